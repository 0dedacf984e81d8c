//! Analyze pipeline
//!
//! word → irregular lookup (an exact hit ends the search) → suffix matching
//! over every productive group → ranking against the dictionary.

use std::sync::Arc;

use tokio::time::Instant;
use tracing::{debug, info_span, Instrument};
use unicode_normalization::UnicodeNormalization;

use super::catalog::{CatalogHandle, RuleCatalog};
use super::dictionary::DictionaryLookup;
use super::error::{GrammarError, GrammarResult};
use super::irregular;
use super::ranker::{CandidateRanker, RankerConfig};
use super::suffix;
use super::types::{push_unique, Analysis, AnalysisResult, MatchCandidate};

/// Collect the match candidates of `word` from one catalog snapshot.
pub fn collect_candidates(catalog: &RuleCatalog, word: &str) -> Vec<MatchCandidate> {
    let mut candidates = Vec::new();

    for group in catalog.irregular_groups() {
        let Some(hit) = irregular::lookup(group, word) else {
            continue;
        };
        if hit.exact {
            debug!(word, group = %group.name, rules = hit.candidates.len(), "exact irregular form");
            let mut exact = Vec::new();
            for candidate in hit.candidates {
                push_unique(&mut exact, candidate);
            }
            return exact;
        }
        for candidate in hit.candidates {
            push_unique(&mut candidates, candidate);
        }
    }

    for group in catalog.productive_groups() {
        for candidate in suffix::match_group(word, group) {
            push_unique(&mut candidates, candidate);
        }
    }

    debug!(word, candidates = candidates.len(), "candidates collected");
    candidates
}

/// Morphological analyzer over a hot-swappable catalog.
pub struct Analyzer {
    catalog: CatalogHandle,
    ranker: CandidateRanker,
}

impl Analyzer {
    pub fn new(catalog: CatalogHandle, dictionary: Arc<dyn DictionaryLookup>) -> Self {
        Self::with_config(catalog, dictionary, RankerConfig::default())
    }

    pub fn with_config(
        catalog: CatalogHandle,
        dictionary: Arc<dyn DictionaryLookup>,
        config: RankerConfig,
    ) -> Self {
        Self {
            catalog,
            ranker: CandidateRanker::with_config(dictionary, config),
        }
    }

    pub fn catalog(&self) -> &CatalogHandle {
        &self.catalog
    }

    /// Ranked analyses of `word`; fails with `NoRuleFound` when nothing is
    /// found, or `LookupUnavailable` when dictionary failures left nothing.
    pub async fn analyze(&self, word: &str) -> GrammarResult<Vec<AnalysisResult>> {
        Ok(self.analyze_with_deadline(word, None).await?.results)
    }

    /// As [`Analyzer::analyze`], bounding all dictionary lookups by
    /// `deadline`. Results cut short by the deadline are flagged `partial`.
    ///
    /// Dropping the returned future abandons in-flight lookups.
    pub async fn analyze_with_deadline(
        &self,
        word: &str,
        deadline: Option<Instant>,
    ) -> GrammarResult<Analysis> {
        let composed: String = word.trim().nfc().collect();
        let word = composed.as_str();
        if word.is_empty() {
            return Err(GrammarError::no_rule_found(word));
        }

        let span = info_span!("analyze", word);
        async move {
            let catalog = self.catalog.snapshot().await;
            let candidates = collect_candidates(&catalog, word);
            let ranking = self.ranker.rank(word, candidates, deadline).await?;

            if ranking.results.is_empty() {
                if ranking.failed_lookups > 0 {
                    return Err(GrammarError::lookup_unavailable(format!(
                        "{} dictionary lookups failed for '{word}'",
                        ranking.failed_lookups
                    )));
                }
                if ranking.deadline_hit {
                    return Err(GrammarError::DeadlineExceeded(word.to_string()));
                }
                return Err(GrammarError::no_rule_found(word));
            }

            Ok(Analysis {
                word: word.to_string(),
                results: ranking.results,
                partial: ranking.deadline_hit,
            })
        }
        .instrument(span)
        .await
    }
}
