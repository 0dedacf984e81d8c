//! Property-based tests for the normalizer
//!
//! Tests invariants:
//! - Normalizing twice equals normalizing once
//! - Output carries no combining marks, even after decomposition
//! - Precomposed letters keep their count

use proptest::prelude::*;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::core::grammar::normalize::{greek_len, normalize};

/// Precomposed polytonic letters, plain letters and a few capitals.
const LETTERS: &[char] = &[
    'α', 'β', 'γ', 'δ', 'ε', 'ζ', 'η', 'θ', 'ι', 'κ', 'λ', 'μ', 'ν', 'ξ', 'ο', 'π', 'ρ', 'σ',
    'ς', 'τ', 'υ', 'φ', 'χ', 'ψ', 'ω', 'ά', 'έ', 'ή', 'ί', 'ό', 'ύ', 'ώ', 'ὰ', 'ᾶ', 'ἀ', 'ἁ',
    'ἄ', 'ἅ', 'ἦ', 'ῥ', 'ᾳ', 'ῷ', 'ϊ', 'ΐ', 'ὑ', 'Ἀ', 'Ὁ', 'Ω', 'Λ', 'Σ',
];

/// Free-standing combining marks: acute, grave, circumflex, smooth and rough
/// breathing, iota subscript, breve.
const MARKS: &[char] = &[
    '\u{0301}', '\u{0300}', '\u{0342}', '\u{0313}', '\u{0314}', '\u{0345}', '\u{0306}',
];

fn precomposed_word() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(LETTERS.to_vec()), 0..16)
        .prop_map(|chars| chars.into_iter().collect())
}

fn any_greek() -> impl Strategy<Value = String> {
    let chars: Vec<char> = LETTERS.iter().chain(MARKS).copied().collect();
    prop::collection::vec(prop::sample::select(chars), 0..24)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn normalize_is_idempotent(word in any_greek()) {
        let once = normalize(&word);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_strips_all_marks(word in any_greek()) {
        let normalized = normalize(&word);
        prop_assert!(normalized.nfd().all(|c| !is_combining_mark(c)));
    }

    #[test]
    fn normalize_keeps_letter_count(word in precomposed_word()) {
        prop_assert_eq!(greek_len(&normalize(&word)), word.chars().count());
    }

    #[test]
    fn normalize_arbitrary_text_never_panics(word in ".*") {
        let once = normalize(&word);
        prop_assert_eq!(normalize(&once), once);
    }
}
