//! Whole-word lookup for articles, pronouns and irregular forms.

use unicode_normalization::UnicodeNormalization;

use super::catalog::DeclensionGroup;
use super::normalize::normalize;
use super::types::MatchCandidate;

/// Forms of one irregular group that matched a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrregularHit {
    /// The word matched a table entry verbatim, accents included. An exact hit
    /// is authoritative and ends the search.
    pub exact: bool,
    pub candidates: Vec<MatchCandidate>,
}

/// Look `word` up in an irregular group.
///
/// Verbatim equality (up to canonical composition) is tried first; only when
/// no entry matches verbatim is the accent-insensitive comparison used.
pub fn lookup(group: &DeclensionGroup, word: &str) -> Option<IrregularHit> {
    let composed: String = word.nfc().collect();
    let exact = collect(group, word, |pattern| pattern.nfc().eq(composed.chars()));
    if !exact.is_empty() {
        return Some(IrregularHit {
            exact: true,
            candidates: exact,
        });
    }

    let normalized = normalize(word);
    let loose = collect(group, word, |pattern| normalize(pattern) == normalized);
    if loose.is_empty() {
        None
    } else {
        Some(IrregularHit {
            exact: false,
            candidates: loose,
        })
    }
}

fn collect<F>(group: &DeclensionGroup, word: &str, matches: F) -> Vec<MatchCandidate>
where
    F: Fn(&str) -> bool,
{
    group
        .forms
        .iter()
        .filter(|form| !form.search_term_templates.is_empty())
        .filter(|form| matches(&form.suffix_pattern.replace('-', "")))
        .map(|form| MatchCandidate {
            word: word.to_string(),
            rule: form.rule_name.clone(),
            root_candidate: normalize(&form.search_term_templates[0]),
            search_terms: form.search_term_templates.clone(),
            group_kind: group.kind,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grammar::catalog::{FormRule, GroupKind};

    fn article() -> DeclensionGroup {
        DeclensionGroup::new("article", GroupKind::Article)
            .with_form(FormRule::new("article - sing - masc - nom", "ὁ", &["ὁ"]))
            .with_form(FormRule::new("article - sing - fem - nom", "ἡ", &["ὁ"]))
            .with_form(FormRule::new("article - plural - masc - gen", "τῶν", &["ὁ"]))
            .with_form(FormRule::new("article - plural - fem - gen", "τῶν", &["ὁ"]))
    }

    #[test]
    fn test_exact_hit() {
        let hit = lookup(&article(), "ὁ").unwrap();
        assert!(hit.exact);
        assert_eq!(hit.candidates.len(), 1);
        assert_eq!(hit.candidates[0].rule, "article - sing - masc - nom");
        assert_eq!(hit.candidates[0].group_kind, GroupKind::Article);
    }

    #[test]
    fn test_exact_hit_returns_every_matching_rule() {
        let hit = lookup(&article(), "τῶν").unwrap();
        assert!(hit.exact);
        assert_eq!(hit.candidates.len(), 2);
    }

    #[test]
    fn test_accent_insensitive_hit_is_not_exact() {
        let hit = lookup(&article(), "των").unwrap();
        assert!(!hit.exact);
        assert_eq!(hit.candidates.len(), 2);
    }

    #[test]
    fn test_exact_wins_over_loose() {
        let hit = lookup(&article(), "ἡ").unwrap();
        assert!(hit.exact);
        assert_eq!(hit.candidates[0].rule, "article - sing - fem - nom");
    }

    #[test]
    fn test_decomposed_input_is_exact() {
        let hit = lookup(&article(), "ο\u{0314}").unwrap();
        assert!(hit.exact);
        assert_eq!(hit.candidates.len(), 1);
        assert_eq!(hit.candidates[0].rule, "article - sing - masc - nom");

        let hit = lookup(&article(), "τω\u{0342}ν").unwrap();
        assert!(hit.exact);
        assert_eq!(hit.candidates.len(), 2);
    }

    #[test]
    fn test_miss() {
        assert!(lookup(&article(), "λόγος").is_none());
    }
}
