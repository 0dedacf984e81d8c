//! Compile-time bundled declension tables.
//!
//! Bundles the YAML declension and conjugation tables under
//! `assets/grammar/` into the binary via `include_str!`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use dionysios::core::assets::AssetLoader;
//!
//! let groups = AssetLoader::load_declension_groups();
//! ```

use tracing::{debug, warn};

use super::grammar::catalog::DeclensionGroup;

// ============================================================================
// Compile-time bundled YAML: Whole-word tables (3)
// ============================================================================

const GROUP_ARTICLE: &str = include_str!("../../assets/grammar/article.yaml");
const GROUP_PRONOUN: &str = include_str!("../../assets/grammar/pronoun.yaml");
const GROUP_IRREGULAR: &str = include_str!("../../assets/grammar/irregular.yaml");

// ============================================================================
// Compile-time bundled YAML: Noun declensions (3)
// ============================================================================

const GROUP_FIRST: &str = include_str!("../../assets/grammar/first_declension.yaml");
const GROUP_SECOND: &str = include_str!("../../assets/grammar/second_declension.yaml");
const GROUP_THIRD: &str = include_str!("../../assets/grammar/third_declension.yaml");

// ============================================================================
// Compile-time bundled YAML: Verb conjugations (3)
// ============================================================================

const GROUP_PRESENT_ACTIVE: &str = include_str!("../../assets/grammar/present_active.yaml");
const GROUP_IMPERFECT_ACTIVE: &str = include_str!("../../assets/grammar/imperfect_active.yaml");
const GROUP_AORIST_ACTIVE: &str = include_str!("../../assets/grammar/aorist_active.yaml");

/// All declension group sources, in catalog order, with labels for error
/// reporting.
const DECLENSION_SOURCES: &[(&str, &str)] = &[
    ("article", GROUP_ARTICLE),
    ("pronoun", GROUP_PRONOUN),
    ("irregular", GROUP_IRREGULAR),
    ("first_declension", GROUP_FIRST),
    ("second_declension", GROUP_SECOND),
    ("third_declension", GROUP_THIRD),
    ("present_active", GROUP_PRESENT_ACTIVE),
    ("imperfect_active", GROUP_IMPERFECT_ACTIVE),
    ("aorist_active", GROUP_AORIST_ACTIVE),
];

// ============================================================================
// AssetLoader
// ============================================================================

/// Loads the bundled YAML tables into typed declension groups.
///
/// Parse failures log warnings and skip the invalid file rather than panicking.
pub struct AssetLoader;

impl AssetLoader {
    /// Load all bundled declension groups in catalog order.
    pub fn load_declension_groups() -> Vec<DeclensionGroup> {
        let mut groups = Vec::with_capacity(DECLENSION_SOURCES.len());

        for (label, yaml) in DECLENSION_SOURCES {
            match serde_yaml::from_str::<DeclensionGroup>(yaml) {
                Ok(group) => {
                    debug!(name = %group.name, kind = ?group.kind, forms = group.forms.len(), "loaded declension group");
                    groups.push(group);
                }
                Err(e) => {
                    warn!(file = label, error = %e, "failed to parse declension YAML");
                }
            }
        }

        debug!(count = groups.len(), total = DECLENSION_SOURCES.len(), "declension groups loaded");
        groups
    }

    /// Raw YAML of one bundled table, by label.
    pub fn declension_yaml(label: &str) -> Option<&'static str> {
        DECLENSION_SOURCES
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, yaml)| *yaml)
    }

    /// Count of bundled declension files.
    pub const DECLENSION_COUNT: usize = DECLENSION_SOURCES.len();
}

// ============================================================================
// Tests
// ============================================================================
