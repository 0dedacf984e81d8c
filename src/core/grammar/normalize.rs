//! Accent-insensitive comparison form for Greek words.
//!
//! Every comparison in the matcher and the merger goes through [`normalize`]:
//! the word is lower-cased, decomposed (NFD), stripped of combining marks and
//! recomposed (NFC). Lower-casing first keeps the function idempotent for
//! letters whose lower-case form carries a combining mark.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Strip diacritics and case-fold a word into its comparison form.
///
/// Pure, total and idempotent: `normalize(&normalize(w)) == normalize(w)`.
pub fn normalize(word: &str) -> String {
    let stripped: String = word
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    stripped.nfc().collect()
}

/// Length of a word in letters (Unicode scalar values), never bytes.
pub fn greek_len(word: &str) -> usize {
    word.chars().count()
}

/// Whether normalization changes the word, i.e. it carries accents,
/// breathings, length marks or upper-case letters.
pub fn has_diacritics(word: &str) -> bool {
    normalize(word) != word
}

/// Normalize a rule pattern: hyphens mark the affix boundary and are not part
/// of the letters compared.
pub fn normalize_pattern(pattern: &str) -> String {
    normalize(&pattern.replace('-', ""))
}

/// Take a letter-indexed slice `[start, end)` of a word.
pub(crate) fn letter_slice(word: &str, start: usize, end: usize) -> String {
    word.chars().skip(start).take(end.saturating_sub(start)).collect()
}
