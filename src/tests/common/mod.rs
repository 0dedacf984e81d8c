//! Common Test Utilities
//!
//! Shared fixtures used across test modules:
//! - Dictionaries and catalogs (`fixtures`)
//! - Lexicon setup

pub mod fixtures;

pub use fixtures::*;
