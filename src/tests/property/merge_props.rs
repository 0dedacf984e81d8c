//! Property-based tests for the aggregation merger
//!
//! Tests invariants:
//! - Any sequence of contributions for one root yields exactly one entry
//! - Variant scores sum to the number of contributions
//! - The root word is the most used spelling, first seen on ties
//! - Forms are unique per category and translations unique overall

use std::collections::HashSet;

use proptest::prelude::*;

use crate::core::lexicon::{Contribution, MergeOutcome, PartOfSpeech};
use crate::tests::common::sample_merger;

const SPELLINGS: &[&str] = &["λόγος", "λογος", "Λόγος"];
const FORMS: &[(&str, &str)] = &[
    ("λόγοι", "noun - plural - masc - nom"),
    ("λόγου", "noun - sing - masc - gen"),
    ("λόγον", "noun - sing - masc - acc"),
];
const TRANSLATIONS: &[&str] = &["word", "speech", "reason"];

type Step = (&'static str, (&'static str, &'static str), &'static str);

fn step() -> impl Strategy<Value = Step> {
    (
        prop::sample::select(SPELLINGS.to_vec()),
        prop::sample::select(FORMS.to_vec()),
        prop::sample::select(TRANSLATIONS.to_vec()),
    )
}

/// Most used spelling, earliest first use winning ties.
fn expected_root(steps: &[Step]) -> &'static str {
    let mut counts: Vec<(&'static str, usize)> = Vec::new();
    for (spelling, _, _) in steps {
        match counts.iter_mut().find(|(s, _)| s == spelling) {
            Some((_, count)) => *count += 1,
            None => counts.push((*spelling, 1)),
        }
    }
    let mut best = counts[0];
    for candidate in &counts[1..] {
        if candidate.1 > best.1 {
            best = *candidate;
        }
    }
    best.0
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn merging_one_root_converges(steps in prop::collection::vec(step(), 1..12)) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let (merger, store) = sample_merger();

        let outcomes = runtime.block_on(async {
            let mut outcomes = Vec::new();
            for (spelling, (word, rule), translation) in &steps {
                let outcome = merger
                    .merge_contribution(Contribution {
                        word,
                        rule,
                        root_word: spelling,
                        translation,
                        part_of_speech: PartOfSpeech::Noun,
                    })
                    .await
                    .unwrap();
                outcomes.push(outcome);
            }
            outcomes
        });
        let entries = runtime.block_on(store.entries());

        prop_assert_eq!(outcomes[0], MergeOutcome::Created);
        prop_assert!(outcomes[1..].iter().all(|o| *o == MergeOutcome::Updated));
        prop_assert_eq!(entries.len(), 1);

        let entry = &entries[0].entry;
        let total: u32 = entry.variants.iter().map(|v| v.score).sum();
        prop_assert_eq!(total as usize, steps.len());
        prop_assert_eq!(entry.root_word.as_str(), expected_root(&steps));

        for category in &entry.categories {
            let words: HashSet<_> = category.forms.iter().map(|f| &f.word).collect();
            prop_assert_eq!(words.len(), category.forms.len());
        }
        let translations: HashSet<_> = steps.iter().map(|(_, _, t)| *t).collect();
        prop_assert_eq!(entry.translations.len(), translations.len());
    }
}
