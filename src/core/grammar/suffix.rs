//! Suffix Matcher
//!
//! Strips the endings of a declension group from a word and rebuilds the
//! dictionary search terms each matching ending implies.
//!
//! Past-tense groups treat the first letter as the augment. An initial `η`
//! may be the augment of either `α` or `ε`, so both stems are tried. Words of
//! the `παρε-` family keep their prefix and have their search terms rewritten
//! to the unaugmented `παρα-`.

use tracing::trace;

use super::catalog::{DeclensionGroup, FormRule, GroupKind};
use super::normalize::{greek_len, letter_slice, normalize, normalize_pattern};
use super::types::{push_unique, MatchCandidate};

const AUGMENTED_PARA: &str = "παρε";
const PARA: &str = "παρα";
const LONG_AUGMENT: char = 'η';
const LONG_AUGMENT_SOURCES: [char; 2] = ['α', 'ε'];

/// A word prepared once for matching against many rules.
struct PreparedWord<'a> {
    original: &'a str,
    normalized: String,
    len: usize,
    /// Letters cut from the front before the stem starts.
    cutoff: usize,
    /// Augment stem alternatives (`α`/`ε` for an initial `η`).
    augment_sources: &'static [char],
    rewrite_para: bool,
}

impl<'a> PreparedWord<'a> {
    /// The augment cut and the `παρε-` to `παρα-` rewrite apply only to groups
    /// with an augment (past tenses); other groups match `παρε-` words as-is.
    fn new(word: &'a str, kind: GroupKind) -> Self {
        let normalized = normalize(word);
        let len = greek_len(&normalized);
        let para = kind.has_augment() && normalized.starts_with(AUGMENTED_PARA);
        let augmented = kind.has_augment() && !para;
        let augment_sources: &'static [char] =
            if augmented && normalized.starts_with(LONG_AUGMENT) {
                &LONG_AUGMENT_SOURCES
            } else {
                &[]
            };

        Self {
            original: word,
            normalized,
            len,
            cutoff: usize::from(augmented),
            augment_sources,
            rewrite_para: para,
        }
    }

    /// Stems left after removing the augment and a suffix of `suffix_len`
    /// letters, or `None` when the suffix does not fit.
    fn stems(&self, suffix_len: usize) -> Option<Vec<String>> {
        if suffix_len > self.len || self.cutoff > self.len - suffix_len {
            return None;
        }
        let middle = letter_slice(&self.normalized, self.cutoff, self.len - suffix_len);
        if self.augment_sources.is_empty() {
            return Some(vec![middle]);
        }
        Some(
            self.augment_sources
                .iter()
                .map(|vowel| format!("{vowel}{middle}"))
                .collect(),
        )
    }

    fn ends_with(&self, pattern: &str, pattern_len: usize) -> bool {
        letter_slice(&self.normalized, self.len - pattern_len, self.len) == pattern
    }
}

/// Match `word` against every rule of a suffix-matched group.
pub fn match_group(word: &str, group: &DeclensionGroup) -> Vec<MatchCandidate> {
    let prepared = PreparedWord::new(word, group.kind);
    let mut candidates = Vec::new();

    for form in &group.forms {
        if let Some(candidate) = match_form(&prepared, group.kind, form) {
            trace!(word, group = %group.name, rule = %candidate.rule, terms = ?candidate.search_terms, "suffix matched");
            push_unique(&mut candidates, candidate);
        }
    }

    candidates
}

fn match_form(word: &PreparedWord<'_>, kind: GroupKind, form: &FormRule) -> Option<MatchCandidate> {
    let pattern = normalize_pattern(&form.suffix_pattern);
    let pattern_len = greek_len(&pattern);

    let stems = word.stems(pattern_len)?;
    if !word.ends_with(&pattern, pattern_len) {
        return None;
    }

    let mut search_terms: Vec<String> = Vec::new();
    for stem in &stems {
        for template in &form.search_term_templates {
            let mut term = format!("{stem}{}", normalize(template));
            if word.rewrite_para {
                if let Some(rest) = term.strip_prefix(AUGMENTED_PARA) {
                    term = format!("{PARA}{rest}");
                }
            }
            if !search_terms.contains(&term) {
                search_terms.push(term);
            }
        }
    }
    if search_terms.is_empty() {
        return None;
    }

    Some(MatchCandidate {
        word: word.original.to_string(),
        rule: form.rule_name.clone(),
        root_candidate: stems.into_iter().next().unwrap_or_default(),
        search_terms,
        group_kind: kind,
    })
}
