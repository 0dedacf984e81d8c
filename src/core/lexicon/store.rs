//! Lexical store boundary and the in-memory reference store.

use std::sync::Arc;

use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use tracing::debug;

use super::error::{LexiconError, LexiconResult};
use super::types::{EntryId, LexicalEntry, StoredEntry};

/// Persistence for lexical entries with optimistic concurrency.
///
/// Every stored entry carries a version that starts at 1 and increases on each
/// successful update.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LexicalStore: Send + Sync {
    /// Entry whose root word, unaccented word or any variant matches `root`,
    /// exactly or accent-insensitively.
    async fn find_entry(&self, root: &str) -> LexiconResult<Option<StoredEntry>>;

    /// Persist a new entry. Fails with `DuplicateRoot` when an entry with the
    /// same unaccented root already exists.
    async fn create_entry(&self, entry: LexicalEntry) -> LexiconResult<EntryId>;

    /// Replace entry `id` if it is still at `expected_version`; returns the
    /// new version. Fails with `VersionConflict` otherwise.
    async fn update_entry(
        &self,
        id: EntryId,
        entry: LexicalEntry,
        expected_version: u64,
    ) -> LexiconResult<u64>;
}

/// Lexical store held in process memory.
#[derive(Clone, Default)]
pub struct InMemoryLexicalStore {
    entries: Arc<RwLock<IndexMap<EntryId, StoredEntry>>>,
}

impl InMemoryLexicalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, id: EntryId) -> Option<StoredEntry> {
        self.entries.read().await.get(&id).cloned()
    }

    /// All entries in creation order.
    pub async fn entries(&self) -> Vec<StoredEntry> {
        self.entries.read().await.values().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl LexicalStore for InMemoryLexicalStore {
    async fn find_entry(&self, root: &str) -> LexiconResult<Option<StoredEntry>> {
        let entries = self.entries.read().await;
        Ok(entries.values().find(|s| s.entry.matches_root(root)).cloned())
    }

    async fn create_entry(&self, entry: LexicalEntry) -> LexiconResult<EntryId> {
        let mut entries = self.entries.write().await;
        if entries
            .values()
            .any(|s| s.entry.unaccented_word == entry.unaccented_word)
        {
            return Err(LexiconError::DuplicateRoot(entry.unaccented_word));
        }

        let id = EntryId::new();
        debug!(%id, root = %entry.root_word, "entry created");
        entries.insert(
            id,
            StoredEntry {
                id,
                version: 1,
                entry,
            },
        );
        Ok(id)
    }

    async fn update_entry(
        &self,
        id: EntryId,
        entry: LexicalEntry,
        expected_version: u64,
    ) -> LexiconResult<u64> {
        let mut entries = self.entries.write().await;
        let stored = entries
            .get_mut(&id)
            .ok_or_else(|| LexiconError::NotFound(id.to_string()))?;
        if stored.version != expected_version {
            return Err(LexiconError::VersionConflict {
                id,
                expected: expected_version,
                actual: stored.version,
            });
        }

        stored.entry = entry;
        stored.version += 1;
        debug!(%id, version = stored.version, "entry updated");
        Ok(stored.version)
    }
}
