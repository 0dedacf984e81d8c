//! Matcher data types shared by the suffix matcher, the ranker and callers.

use serde::{Deserialize, Serialize};

use super::catalog::GroupKind;

/// A rule that matched a word, with the dictionary terms it implies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCandidate {
    pub word: String,
    pub rule: String,
    pub root_candidate: String,
    pub search_terms: Vec<String>,
    pub group_kind: GroupKind,
}

impl MatchCandidate {
    /// Whether `other` is a duplicate of this candidate: same rule with an
    /// overlapping term, or exactly the same term set.
    pub fn duplicates(&self, other: &MatchCandidate) -> bool {
        let same_terms = {
            let mut a = self.search_terms.clone();
            let mut b = other.search_terms.clone();
            a.sort();
            a.dedup();
            b.sort();
            b.dedup();
            a == b
        };
        if same_terms {
            return true;
        }
        self.rule == other.rule
            && self
                .search_terms
                .iter()
                .any(|t| other.search_terms.contains(t))
    }
}

/// Append `candidate` unless an existing candidate duplicates it.
pub fn push_unique(candidates: &mut Vec<MatchCandidate>, candidate: MatchCandidate) {
    if candidates.iter().any(|c| c.duplicates(&candidate)) {
        return;
    }
    candidates.push(candidate);
}

/// One ranked analysis of a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub word: String,
    pub rule: String,
    pub root_word: String,
    pub translations: Vec<String>,
}

impl AnalysisResult {
    /// First translation, or the empty string.
    pub fn primary_translation(&self) -> &str {
        self.translations.first().map(String::as_str).unwrap_or("")
    }
}

/// Outcome of one analyze call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub word: String,
    pub results: Vec<AnalysisResult>,
    /// Set when the deadline cut off pending dictionary lookups.
    pub partial: bool,
}
