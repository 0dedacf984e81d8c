//! Property-based tests
//!
//! Invariants checked over generated input with proptest:
//!
//! - `normalize_props`: normalization is idempotent, strips every combining
//!   mark, and never changes the letter count of precomposed Greek
//! - `ranking_props`: finalized analyses are unique per
//!   `(rule, translation, normalized root)` and prefer accented roots
//! - `merge_props`: merging any sequence of contributions for one root yields
//!   one entry whose variant scores sum to the number of contributions
//!
//! By default, proptest runs 256 cases per property. This can be configured
//! via the `PROPTEST_CASES` environment variable:
//!
//! ```sh
//! PROPTEST_CASES=1000 cargo test property --release
//! ```

mod merge_props;
mod normalize_props;
mod ranking_props;
