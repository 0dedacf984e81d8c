//! Candidate Ranker
//!
//! Turns match candidates into dictionary-backed analyses:
//! 1. Partition candidates into priority tiers by declension family
//! 2. Look up every search term, fanning out within a tier
//! 3. Filter hits whose article disagrees with the rule's gender
//! 4. Deduplicate by `(rule, first translation, normalized root)`
//! 5. Fall back to a direct lookup of the word when nothing survives

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use indexmap::IndexMap;
use tokio::time::Instant;
use tracing::{debug, warn};

use super::catalog::Tier;
use super::dictionary::{DictionaryHit, DictionaryLookup, SearchMode};
use super::error::{GrammarError, GrammarResult};
use super::normalize::{greek_len, has_diacritics, normalize};
use super::types::{AnalysisResult, MatchCandidate};

/// Rule reported for analyses found by direct dictionary lookup.
pub const NO_RULE_FOUND: &str = "no rule found";

/// Normalized form of the nominative article; the only one-letter search term
/// worth a lookup.
const NOMINATIVE_ARTICLE: &str = "ο";

/// Normalized roots that are bare article/pronoun forms.
const BARE_PRONOUNS: &[&str] = &["η", "ο", "το"];

/// Ranking configuration
#[derive(Debug, Clone)]
pub struct RankerConfig {
    /// Language passed to the dictionary.
    pub language: String,
    /// Upper bound for a single dictionary lookup.
    pub lookup_timeout: Duration,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            language: super::dictionary::GREEK.to_string(),
            lookup_timeout: Duration::from_secs(2),
        }
    }
}

/// Ranked analyses plus what went wrong on the way.
#[derive(Debug, Clone, Default)]
pub struct Ranking {
    pub results: Vec<AnalysisResult>,
    /// Lookups that failed or timed out individually.
    pub failed_lookups: usize,
    /// Lookups that succeeded (hit or miss).
    pub completed_lookups: usize,
    /// The caller's deadline cut off at least one lookup.
    pub deadline_hit: bool,
}

/// Ranks candidates against the dictionary.
pub struct CandidateRanker {
    dictionary: Arc<dyn DictionaryLookup>,
    config: RankerConfig,
}

impl CandidateRanker {
    pub fn new(dictionary: Arc<dyn DictionaryLookup>) -> Self {
        Self::with_config(dictionary, RankerConfig::default())
    }

    pub fn with_config(dictionary: Arc<dyn DictionaryLookup>, config: RankerConfig) -> Self {
        Self { dictionary, config }
    }

    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    /// Rank `candidates` for `word`.
    ///
    /// Primary and secondary tiers short-circuit: the secondary tier is only
    /// consulted when the primary one produced nothing after finalization. The catch-all tier is
    /// always consulted. Errors are returned only when the final direct lookup
    /// of the word fails; per-term failures are counted in the [`Ranking`].
    pub async fn rank(
        &self,
        word: &str,
        candidates: Vec<MatchCandidate>,
        deadline: Option<Instant>,
    ) -> GrammarResult<Ranking> {
        let mut tiers: BTreeMap<Tier, Vec<MatchCandidate>> = BTreeMap::new();
        for candidate in candidates {
            tiers.entry(candidate.group_kind.tier()).or_default().push(candidate);
        }

        let mut ranking = Ranking::default();
        let mut results = Vec::new();

        for tier in [Tier::Primary, Tier::Secondary] {
            if !results.is_empty() {
                break;
            }
            if let Some(tier_candidates) = tiers.get(&tier) {
                // A tier only counts as productive with results that survive
                // finalization.
                let tier_results = self
                    .rank_tier(word, tier_candidates, deadline, &mut ranking)
                    .await;
                results = finalize(word, tier_results);
                debug!(word, ?tier, results = results.len(), "tier ranked");
            }
        }
        if let Some(tier_candidates) = tiers.get(&Tier::CatchAll) {
            let catch_all = self
                .rank_tier(word, tier_candidates, deadline, &mut ranking)
                .await;
            debug!(word, results = catch_all.len(), "catch-all tier ranked");
            results.extend(catch_all);
        }

        ranking.results = finalize(word, results);
        if ranking.results.is_empty() {
            ranking.results = self.fallback(word, deadline, &mut ranking).await?;
        }
        Ok(ranking)
    }

    async fn rank_tier(
        &self,
        word: &str,
        candidates: &[MatchCandidate],
        deadline: Option<Instant>,
        ranking: &mut Ranking,
    ) -> Vec<AnalysisResult> {
        let mut terms: Vec<&str> = Vec::new();
        for candidate in candidates {
            for term in candidate.search_terms.iter().filter(|t| worth_lookup(t)) {
                if !terms.contains(&term.as_str()) {
                    terms.push(term);
                }
            }
        }

        let lookups = terms.iter().map(|term| self.lookup(term, deadline));
        let outcomes = join_all(lookups).await;

        let mut hits_by_term: HashMap<&str, Vec<DictionaryHit>> = HashMap::new();
        for (term, outcome) in terms.iter().zip(outcomes) {
            match outcome {
                LookupOutcome::Hits(hits) => {
                    ranking.completed_lookups += 1;
                    hits_by_term.insert(*term, hits);
                }
                LookupOutcome::Failed => ranking.failed_lookups += 1,
                LookupOutcome::DeadlineHit => ranking.deadline_hit = true,
            }
        }

        let mut results = Vec::new();
        for candidate in candidates {
            for term in &candidate.search_terms {
                let Some(hits) = hits_by_term.get(term.as_str()) else {
                    continue;
                };
                for hit in hits {
                    if !agrees_with_article(&candidate.rule, hit) {
                        debug!(word, rule = %candidate.rule, lemma = %hit.lemma, "article disagrees with rule gender");
                        continue;
                    }
                    results.push(AnalysisResult {
                        word: word.to_string(),
                        rule: candidate.rule.clone(),
                        root_word: hit.headword().to_string(),
                        translations: vec![hit.translation.trim().to_string()],
                    });
                }
            }
        }
        results
    }

    async fn fallback(
        &self,
        word: &str,
        deadline: Option<Instant>,
        ranking: &mut Ranking,
    ) -> GrammarResult<Vec<AnalysisResult>> {
        let term = normalize(word);
        let hits = match self.lookup_raw(&term, deadline).await {
            Some(result) => result?,
            None => {
                ranking.deadline_hit = true;
                return Ok(Vec::new());
            }
        };
        ranking.completed_lookups += 1;

        let results = hits
            .into_iter()
            .map(|hit| AnalysisResult {
                word: word.to_string(),
                rule: NO_RULE_FOUND.to_string(),
                root_word: hit.headword().to_string(),
                translations: vec![hit.translation.trim().to_string()],
            })
            .collect();
        Ok(finalize(word, results))
    }

    async fn lookup(&self, term: &str, deadline: Option<Instant>) -> LookupOutcome {
        match self.lookup_raw(term, deadline).await {
            Some(Ok(hits)) => LookupOutcome::Hits(hits),
            Some(Err(e)) => {
                warn!(term, error = %e, "dictionary lookup failed, skipping term");
                LookupOutcome::Failed
            }
            None => LookupOutcome::DeadlineHit,
        }
    }

    /// One bounded lookup. `None` means the caller's deadline expired; a
    /// per-lookup timeout is reported as `LookupUnavailable`.
    async fn lookup_raw(
        &self,
        term: &str,
        deadline: Option<Instant>,
    ) -> Option<GrammarResult<Vec<DictionaryHit>>> {
        let now = Instant::now();
        let own_limit = now + self.config.lookup_timeout;
        let limit = match deadline {
            Some(deadline) if deadline <= now => return None,
            Some(deadline) => deadline.min(own_limit),
            None => own_limit,
        };

        let search = self
            .dictionary
            .search(term, &self.config.language, SearchMode::Exact);
        match tokio::time::timeout_at(limit, search).await {
            Ok(result) => Some(result),
            Err(_) if deadline.is_some_and(|d| d <= limit) => None,
            Err(_) => Some(Err(GrammarError::lookup_unavailable(format!(
                "lookup of '{term}' timed out after {:?}",
                self.config.lookup_timeout
            )))),
        }
    }
}

enum LookupOutcome {
    Hits(Vec<DictionaryHit>),
    Failed,
    DeadlineHit,
}

/// Single letters are nearly always accidental matches on exclamations; the
/// nominative article is the exception.
fn worth_lookup(term: &str) -> bool {
    greek_len(term) > 1 || normalize(term) == NOMINATIVE_ARTICLE
}

/// Grammatical gender implied by an article.
fn implied_gender(article: &str) -> Option<&'static str> {
    match normalize(article).as_str() {
        "ο" => Some("masc"),
        "η" => Some("fem"),
        "το" => Some("neut"),
        _ => None,
    }
}

fn agrees_with_article(rule: &str, hit: &DictionaryHit) -> bool {
    match hit.article().and_then(implied_gender) {
        Some(gender) => rule.contains(gender),
        None => true,
    }
}

/// Drop empty translations and stray pronoun roots, then deduplicate by
/// `(rule, first translation, normalized root)` keeping the accented root.
pub fn finalize(word: &str, results: Vec<AnalysisResult>) -> Vec<AnalysisResult> {
    let normalized_word = normalize(word);
    let mut unique: IndexMap<(String, String, String), AnalysisResult> = IndexMap::new();

    for result in results {
        if result.primary_translation().is_empty() {
            continue;
        }
        let normalized_root = normalize(&result.root_word);
        if BARE_PRONOUNS.contains(&normalized_root.as_str()) && normalized_root != normalized_word {
            continue;
        }

        let key = (
            result.rule.clone(),
            result.primary_translation().to_string(),
            normalized_root,
        );
        match unique.get_mut(&key) {
            Some(existing) => {
                if !has_diacritics(&existing.root_word) && has_diacritics(&result.root_word) {
                    *existing = result;
                }
            }
            None => {
                unique.insert(key, result);
            }
        }
    }

    unique.into_values().collect()
}
