//! Property-based tests for result finalization and analysis
//!
//! Tests invariants:
//! - Finalized results are unique per (rule, translation, normalized root)
//! - The accented root wins a key collision
//! - Empty translations never survive
//! - Finalizing is idempotent
//! - Analyzing any Greek input returns results or `NoRuleFound`

use std::collections::HashSet;

use proptest::prelude::*;

use crate::core::grammar::normalize::{has_diacritics, normalize};
use crate::core::grammar::ranker::finalize;
use crate::core::grammar::AnalysisResult;
use crate::tests::common::sample_analyzer;

const RULES: &[&str] = &["noun - sing - masc - nom", "noun - plural - masc - nom"];
const TRANSLATIONS: &[&str] = &["war", "word", ""];
const ROOTS: &[&str] = &["πόλεμος", "πολεμος", "λόγος", "λογος"];

fn result() -> impl Strategy<Value = AnalysisResult> {
    (
        prop::sample::select(RULES.to_vec()),
        prop::sample::select(TRANSLATIONS.to_vec()),
        prop::sample::select(ROOTS.to_vec()),
    )
        .prop_map(|(rule, translation, root)| AnalysisResult {
            word: "πόλεμοι".to_string(),
            rule: rule.to_string(),
            root_word: root.to_string(),
            translations: if translation.is_empty() {
                Vec::new()
            } else {
                vec![translation.to_string()]
            },
        })
}

fn key(result: &AnalysisResult) -> (String, String, String) {
    (
        result.rule.clone(),
        result.primary_translation().to_string(),
        normalize(&result.root_word),
    )
}

proptest! {
    #[test]
    fn finalized_results_are_unique(results in prop::collection::vec(result(), 0..20)) {
        let finalized = finalize("πόλεμοι", results);
        let keys: HashSet<_> = finalized.iter().map(key).collect();
        prop_assert_eq!(keys.len(), finalized.len());
    }

    #[test]
    fn accented_root_wins(results in prop::collection::vec(result(), 0..20)) {
        let finalized = finalize("πόλεμοι", results.clone());
        for kept in &finalized {
            let accented_available = results
                .iter()
                .any(|r| key(r) == key(kept) && has_diacritics(&r.root_word));
            prop_assert_eq!(has_diacritics(&kept.root_word), accented_available);
        }
    }

    #[test]
    fn empty_translations_dropped(results in prop::collection::vec(result(), 0..20)) {
        let finalized = finalize("πόλεμοι", results);
        prop_assert!(finalized.iter().all(|r| !r.primary_translation().is_empty()));
    }

    #[test]
    fn finalize_is_idempotent(results in prop::collection::vec(result(), 0..20)) {
        let once = finalize("πόλεμοι", results);
        prop_assert_eq!(finalize("πόλεμοι", once.clone()), once);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn analyze_returns_results_or_no_rule_found(word in "[αβγδεζηθικλμνξοπρστυφχψωάέήίόύώ]{0,10}") {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let outcome = runtime.block_on(sample_analyzer().analyze(&word));
        match outcome {
            Ok(results) => prop_assert!(!results.is_empty()),
            Err(e) => prop_assert!(e.is_no_rule_found(), "unexpected error: {}", e),
        }
    }
}
