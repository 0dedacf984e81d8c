//! Crate-level test suites: shared fixtures and property-based tests.

pub mod common;
mod property;
