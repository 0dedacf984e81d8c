//! Aggregation merger
//!
//! Folds accepted analyses into the shared lexical store, one entry per
//! root word. Merges for one root are serialized in-process by a sharded lock
//! keyed on the unaccented root; across processes the store's versioning
//! catches lost updates and the merge is retried from a fresh read.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::error::{LexiconError, LexiconResult};
use super::store::LexicalStore;
use super::tags::parse_rule_tags;
use super::types::{CategoryTags, FormEntry, LexicalEntry, MergeOutcome, PartOfSpeech};
use crate::core::grammar::normalize::normalize;

/// Default number of lock shards.
pub const DEFAULT_SHARD_COUNT: usize = 64;

/// Default number of attempts before a conflicting merge gives up.
pub const DEFAULT_MAX_RETRIES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergerConfig {
    pub shard_count: usize,
    pub max_retries: usize,
}

impl Default for MergerConfig {
    fn default() -> Self {
        Self {
            shard_count: DEFAULT_SHARD_COUNT,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// One contribution: an inflected form, the rule that produced it, its root
/// and a translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contribution<'a> {
    pub word: &'a str,
    pub rule: &'a str,
    pub root_word: &'a str,
    pub translation: &'a str,
    pub part_of_speech: PartOfSpeech,
}

pub struct AggregationMerger {
    store: Arc<dyn LexicalStore>,
    shards: Vec<Mutex<()>>,
    max_retries: usize,
}

impl AggregationMerger {
    pub fn new(store: Arc<dyn LexicalStore>) -> Self {
        Self::with_config(store, MergerConfig::default())
    }

    pub fn with_config(store: Arc<dyn LexicalStore>, config: MergerConfig) -> Self {
        let shards = (0..config.shard_count.max(1))
            .map(|_| Mutex::new(()))
            .collect();
        Self {
            store,
            shards,
            max_retries: config.max_retries.max(1),
        }
    }

    fn shard(&self, key: &str) -> &Mutex<()> {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        let index = (hasher.finish() % self.shards.len() as u64) as usize;
        &self.shards[index]
    }

    /// Merge one contribution into the store.
    ///
    /// Returns `Created` when no entry matched the root and `Updated`
    /// otherwise. Store failures propagate unchanged.
    pub async fn merge_contribution(
        &self,
        contribution: Contribution<'_>,
    ) -> LexiconResult<MergeOutcome> {
        let root = contribution.root_word.trim();
        let key = normalize(root);
        let tags = parse_rule_tags(contribution.rule, contribution.part_of_speech);
        let form = FormEntry {
            word: contribution.word.trim().to_string(),
            rule: contribution.rule.to_string(),
        };

        let _guard = self.shard(&key).lock().await;

        for attempt in 1..=self.max_retries {
            let result = match self.store.find_entry(root).await? {
                None => {
                    let entry = LexicalEntry::new(
                        root,
                        contribution.part_of_speech,
                        tags.clone(),
                        form.clone(),
                        contribution.translation,
                    );
                    self.store.create_entry(entry).await.map(|id| {
                        info!(%id, root, "lexical entry created");
                        MergeOutcome::Created
                    })
                }
                Some(stored) => {
                    let mut entry = stored.entry;
                    apply(&mut entry, &tags, form.clone(), root, contribution.translation);
                    self.store
                        .update_entry(stored.id, entry, stored.version)
                        .await
                        .map(|version| {
                            debug!(id = %stored.id, version, root, "lexical entry updated");
                            MergeOutcome::Updated
                        })
                }
            };

            match result {
                Err(e) if e.is_conflict() => {
                    warn!(root, attempt, error = %e, "merge conflict, retrying");
                }
                other => return other,
            }
        }

        Err(LexiconError::ConflictRetriesExhausted {
            root: root.to_string(),
            attempts: self.max_retries,
        })
    }
}

/// Fold a contribution into an existing entry.
fn apply(
    entry: &mut LexicalEntry,
    tags: &CategoryTags,
    form: FormEntry,
    root: &str,
    translation: &str,
) {
    entry.category_mut(tags).add_form(form);
    entry.add_translation(translation);
    entry.bump_variant(root);
    entry.promote_root();
    entry.updated_at = Utc::now();
}
