//! Lexicon
//!
//! Aggregates user-accepted analyses into one lexical entry per root word:
//! inflected forms grouped by tense/mood/voice, translations, and the root
//! spellings seen with their frequencies.
//!
//! - [`types`]: entry data model
//! - [`tags`]: rule-string tag classifier
//! - [`store`]: the lexical store boundary and an in-memory store
//! - [`merger`]: per-root serialized, version-checked merging

pub mod error;
pub mod merger;
pub mod store;
pub mod tags;
pub mod types;

pub use error::{LexiconError, LexiconResult};
pub use merger::{AggregationMerger, Contribution, MergerConfig};
pub use store::{InMemoryLexicalStore, LexicalStore};
pub use tags::{parse_rule_tags, Mood, RuleToken, Tense, Voice};
pub use types::{
    CategoryTags, EntryId, FormEntry, GrammaticalCategory, LexicalEntry, MergeOutcome,
    PartOfSpeech, StoredEntry, Variant,
};
