//! Error types for the grammar module.
//!
//! Covers dictionary lookups, catalog loading and the analyze outcome.

use thiserror::Error;

/// Unified error type for morphological analysis.
#[derive(Debug, Error)]
pub enum GrammarError {
    /// The external dictionary could not be reached.
    #[error("Dictionary lookup unavailable: {0}")]
    LookupUnavailable(String),

    /// Every matching strategy, including the dictionary-only fallback, came
    /// up empty.
    #[error("No rule found for: {0}")]
    NoRuleFound(String),

    /// The analyze deadline elapsed before any result was collected.
    #[error("Deadline exceeded while analyzing: {0}")]
    DeadlineExceeded(String),

    /// Rule catalog could not be loaded or parsed.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// IO error for file-backed sources.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML deserialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl GrammarError {
    /// Create a lookup-unavailable error with the given message.
    pub fn lookup_unavailable(msg: impl Into<String>) -> Self {
        Self::LookupUnavailable(msg.into())
    }

    /// Create a no-rule-found error for the given word.
    pub fn no_rule_found(word: impl Into<String>) -> Self {
        Self::NoRuleFound(word.into())
    }

    /// Create a catalog error with the given message.
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Whether this is the "no answer" outcome rather than a failure.
    pub fn is_no_rule_found(&self) -> bool {
        matches!(self, Self::NoRuleFound(_))
    }
}

/// Result type alias for grammar operations.
pub type GrammarResult<T> = Result<T, GrammarError>;
