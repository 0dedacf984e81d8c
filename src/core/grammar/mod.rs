//! Morphological Matcher
//!
//! Determines which declension or conjugation rule produced an inflected
//! Ancient Greek word and recovers its dictionary root.
//!
//! # Architecture
//!
//! ```text
//!   word ──► normalize ──► irregular lookup ──(exact hit)──────────┐
//!                               │                                  │
//!                               ▼                                  ▼
//!                        suffix matcher ──► candidates ──► candidate ranker ──► analyses
//!                               ▲                                  │
//!                         rule catalog                      dictionary lookup
//! ```
//!
//! # Module Structure
//!
//! - [`normalize`]: accent-insensitive comparison form
//! - [`catalog`]: declension tables, sources and the hot-swappable handle
//! - [`irregular`]: whole-word lookup for articles, pronouns, irregular forms
//! - [`suffix`]: suffix stripping with augment and `παρε-` handling
//! - [`dictionary`]: the dictionary lookup boundary
//! - [`ranker`]: tiering, article agreement, deduplication, fallback
//! - [`analyzer`]: the analyze pipeline

pub mod analyzer;
pub mod catalog;
pub mod dictionary;
pub mod error;
pub mod irregular;
pub mod normalize;
pub mod ranker;
pub mod suffix;
pub mod types;

pub use analyzer::{collect_candidates, Analyzer};
pub use catalog::{
    BundledCatalogSource, CatalogHandle, CatalogSource, DeclensionGroup, FileCatalogSource,
    FormRule, GroupKind, RuleCatalog, StaticCatalogSource, Tier,
};
pub use dictionary::{DictionaryHit, DictionaryLookup, InMemoryDictionary, SearchMode, GREEK};
pub use error::{GrammarError, GrammarResult};
pub use normalize::normalize;
pub use ranker::{CandidateRanker, RankerConfig, Ranking, NO_RULE_FOUND};
pub use types::{Analysis, AnalysisResult, MatchCandidate};
