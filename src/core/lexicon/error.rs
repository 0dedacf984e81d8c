//! Error types for the lexicon module.

use thiserror::Error;

use super::types::EntryId;

/// Error type for lexical store and merge operations.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// The lexical store could not be reached.
    #[error("Lexical store unavailable: {0}")]
    StoreUnavailable(String),

    /// Part-of-speech string outside the known set.
    #[error("Invalid part of speech: {0}")]
    InvalidPartOfSpeech(String),

    /// The entry changed since it was read.
    #[error("Version conflict on entry {id}: expected {expected}, found {actual}")]
    VersionConflict {
        id: EntryId,
        expected: u64,
        actual: u64,
    },

    /// Another entry with the same unaccented root was created concurrently.
    #[error("Duplicate root word: {0}")]
    DuplicateRoot(String),

    /// Entry not found in the store.
    #[error("Entry not found: {0}")]
    NotFound(String),

    /// Optimistic retries kept conflicting.
    #[error("Merge of '{root}' still conflicting after {attempts} attempts")]
    ConflictRetriesExhausted { root: String, attempts: usize },
}

impl LexiconError {
    /// Create a store-unavailable error with the given message.
    pub fn store_unavailable(msg: impl Into<String>) -> Self {
        Self::StoreUnavailable(msg.into())
    }

    /// Create an invalid-part-of-speech error.
    pub fn invalid_part_of_speech(value: impl Into<String>) -> Self {
        Self::InvalidPartOfSpeech(value.into())
    }

    /// Conflicts resolved by re-reading and merging again.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::VersionConflict { .. } | Self::DuplicateRoot(_))
    }
}

/// Result type alias for lexicon operations.
pub type LexiconResult<T> = Result<T, LexiconError>;
