//! Dictionary lookup boundary.
//!
//! The ranker only needs `search(term, language, mode)`. Index layout and
//! query construction stay behind the [`DictionaryLookup`] trait; the crate
//! ships an in-memory implementation used by the binary and the tests.

use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::GrammarResult;
use super::normalize::normalize;

/// Language tag for Greek headword searches.
pub const GREEK: &str = "greek";

/// Matching strategy requested from the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    Exact,
    Fuzzy,
    Phrase,
}

/// One dictionary record.
///
/// `lemma` has the shape `headword[, genitive ending][, article]`, for example
/// `πόλεμος, -ου, ὁ`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryHit {
    pub lemma: String,
    pub translation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dutch: Option<String>,
}

impl DictionaryHit {
    pub fn new(lemma: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            lemma: lemma.into(),
            translation: translation.into(),
            dutch: None,
        }
    }

    /// The dictionary form: everything before the first comma.
    pub fn headword(&self) -> &str {
        self.lemma.split(',').next().unwrap_or("").trim()
    }

    /// The trailing comma part when it is a single token (the article).
    pub fn article(&self) -> Option<&str> {
        let mut parts = self.lemma.split(',');
        parts.next();
        let last = parts.last()?.trim();
        if last.is_empty() || last.contains(char::is_whitespace) {
            None
        } else {
            Some(last)
        }
    }
}

/// External dictionary search.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DictionaryLookup: Send + Sync {
    /// Search `term`; an empty vector means no hit. Transport failures are
    /// reported as `GrammarError::LookupUnavailable`.
    async fn search(
        &self,
        term: &str,
        language: &str,
        mode: SearchMode,
    ) -> GrammarResult<Vec<DictionaryHit>>;
}

// ============================================================================
// InMemoryDictionary
// ============================================================================

#[derive(Debug, Clone)]
struct IndexedHit {
    normalized_headword: String,
    hit: DictionaryHit,
}

/// Dictionary held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDictionary {
    entries: Vec<IndexedHit>,
}

impl InMemoryDictionary {
    pub fn new(hits: Vec<DictionaryHit>) -> Self {
        let mut dictionary = Self::default();
        for hit in hits {
            dictionary.insert(hit);
        }
        dictionary
    }

    /// Load a JSON array of hits.
    pub async fn from_json_file(path: &Path) -> GrammarResult<Self> {
        let contents = tokio::fs::read_to_string(path).await?;
        let hits: Vec<DictionaryHit> = serde_json::from_str(&contents)?;
        tracing::info!(file = %path.display(), entries = hits.len(), "dictionary loaded");
        Ok(Self::new(hits))
    }

    pub fn insert(&mut self, hit: DictionaryHit) {
        self.entries.push(IndexedHit {
            normalized_headword: normalize(hit.headword()),
            hit,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn matches(entry: &IndexedHit, term: &str, mode: SearchMode) -> bool {
        match mode {
            SearchMode::Exact => entry.normalized_headword == term,
            SearchMode::Fuzzy => strsim::levenshtein(&entry.normalized_headword, term) <= 1,
            SearchMode::Phrase => {
                entry.normalized_headword.contains(term)
                    || entry.hit.translation.to_lowercase().contains(term)
            }
        }
    }
}

#[async_trait]
impl DictionaryLookup for InMemoryDictionary {
    async fn search(
        &self,
        term: &str,
        _language: &str,
        mode: SearchMode,
    ) -> GrammarResult<Vec<DictionaryHit>> {
        let term = normalize(term);
        if term.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .entries
            .iter()
            .filter(|entry| Self::matches(entry, &term, mode))
            .map(|entry| entry.hit.clone())
            .collect())
    }
}
