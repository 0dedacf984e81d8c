//! Rule Catalog
//!
//! Declension and conjugation tables, grouped by declension family. The
//! catalog is loaded from a [`CatalogSource`] and published as an immutable
//! `Arc<RuleCatalog>` snapshot; reloads swap the snapshot atomically so that a
//! running analysis keeps the tables it started with.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::error::{GrammarError, GrammarResult};
use crate::core::assets::AssetLoader;

// ============================================================================
// Types
// ============================================================================

/// Declension family of a group; drives the matcher strategy and the ranking
/// tier of the candidates it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    First,
    Second,
    Third,
    /// Augmented past tenses (imperfect, aorist).
    Past,
    Article,
    Pronoun,
    Irregular,
    Misc,
    Other,
}

impl GroupKind {
    /// Groups looked up by whole word instead of by suffix.
    pub fn is_irregular(self) -> bool {
        matches!(self, Self::Article | Self::Pronoun | Self::Irregular)
    }

    /// Groups whose words carry a past-tense augment.
    pub fn has_augment(self) -> bool {
        matches!(self, Self::Past)
    }

    /// Ranking tier of candidates produced by this family.
    pub fn tier(self) -> Tier {
        match self {
            Self::First | Self::Second => Tier::Primary,
            Self::Third => Tier::Secondary,
            _ => Tier::CatchAll,
        }
    }
}

/// Priority tier of a candidate group. Lower tiers are only consulted when the
/// higher ones produce nothing; [`Tier::CatchAll`] always runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Primary,
    Secondary,
    CatchAll,
}

/// One row of a declension table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormRule {
    /// Grammatical description, e.g. `noun - plural - masc - nom`.
    #[serde(alias = "rule")]
    pub rule_name: String,
    /// Ending (or whole word for irregular groups). Hyphens mark the affix
    /// boundary.
    #[serde(alias = "declension")]
    pub suffix_pattern: String,
    /// Endings appended to a recovered root to produce dictionary search terms.
    #[serde(alias = "searchTerm", default)]
    pub search_term_templates: Vec<String>,
}

impl FormRule {
    pub fn new(
        rule_name: impl Into<String>,
        suffix_pattern: impl Into<String>,
        templates: &[&str],
    ) -> Self {
        Self {
            rule_name: rule_name.into(),
            suffix_pattern: suffix_pattern.into(),
            search_term_templates: templates.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// A named declension or conjugation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclensionGroup {
    pub name: String,
    #[serde(alias = "type")]
    pub kind: GroupKind,
    #[serde(alias = "declensions", default)]
    pub forms: Vec<FormRule>,
}

impl DeclensionGroup {
    pub fn new(name: impl Into<String>, kind: GroupKind) -> Self {
        Self {
            name: name.into(),
            kind,
            forms: Vec::new(),
        }
    }

    /// Builder-style form registration.
    pub fn with_form(mut self, form: FormRule) -> Self {
        self.forms.push(form);
        self
    }
}

/// Ordered, immutable set of declension groups.
#[derive(Debug, Clone, Default)]
pub struct RuleCatalog {
    groups: Vec<DeclensionGroup>,
}

impl RuleCatalog {
    pub fn new(groups: Vec<DeclensionGroup>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[DeclensionGroup] {
        &self.groups
    }

    /// Groups using whole-word lookup, in catalog order.
    pub fn irregular_groups(&self) -> impl Iterator<Item = &DeclensionGroup> {
        self.groups.iter().filter(|g| g.kind.is_irregular())
    }

    /// Groups using suffix matching, in catalog order.
    pub fn productive_groups(&self) -> impl Iterator<Item = &DeclensionGroup> {
        self.groups.iter().filter(|g| !g.kind.is_irregular())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of form rules across all groups.
    pub fn rule_count(&self) -> usize {
        self.groups.iter().map(|g| g.forms.len()).sum()
    }
}

// ============================================================================
// Sources
// ============================================================================

/// Provider of declension groups, consulted at startup and on re-poll.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &str;

    /// Fetch the ordered declension groups.
    async fn load(&self) -> GrammarResult<Vec<DeclensionGroup>>;
}

/// Fixed in-memory groups.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    groups: Vec<DeclensionGroup>,
}

impl StaticCatalogSource {
    pub fn new(groups: Vec<DeclensionGroup>) -> Self {
        Self { groups }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn load(&self) -> GrammarResult<Vec<DeclensionGroup>> {
        Ok(self.groups.clone())
    }
}

/// Declension tables compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledCatalogSource;

#[async_trait]
impl CatalogSource for BundledCatalogSource {
    fn name(&self) -> &str {
        "bundled"
    }

    async fn load(&self) -> GrammarResult<Vec<DeclensionGroup>> {
        Ok(AssetLoader::load_declension_groups())
    }
}

/// A directory of `*.json` / `*.yaml` group files, loaded in file-name order.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    dir: PathBuf,
}

impl FileCatalogSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn parse_file(path: &Path, contents: &str) -> GrammarResult<DeclensionGroup> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(serde_json::from_str(contents)?),
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(contents)?),
            _ => Err(GrammarError::catalog(format!(
                "unsupported catalog file: {}",
                path.display()
            ))),
        }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn load(&self) -> GrammarResult<Vec<DeclensionGroup>> {
        let mut paths = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            let supported = matches!(
                path.extension().and_then(|e| e.to_str()),
                Some("json") | Some("yaml") | Some("yml")
            );
            if supported {
                paths.push(path);
            }
        }
        paths.sort();

        let mut groups = Vec::with_capacity(paths.len());
        for path in paths {
            let contents = tokio::fs::read_to_string(&path).await?;
            let group = Self::parse_file(&path, &contents)?;
            debug!(file = %path.display(), group = %group.name, forms = group.forms.len(), "loaded declension group");
            groups.push(group);
        }

        if groups.is_empty() {
            return Err(GrammarError::catalog(format!(
                "no declension groups in {}",
                self.dir.display()
            )));
        }
        Ok(groups)
    }
}

// ============================================================================
// CatalogHandle
// ============================================================================

/// Shared, hot-swappable reference to the current catalog snapshot.
#[derive(Debug, Clone, Default)]
pub struct CatalogHandle {
    current: Arc<RwLock<Arc<RuleCatalog>>>,
}

impl CatalogHandle {
    pub fn new(catalog: RuleCatalog) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(catalog))),
        }
    }

    /// Build a handle from the first successful load of `source`.
    pub async fn load(source: &dyn CatalogSource) -> GrammarResult<Self> {
        let handle = Self::default();
        handle.reload(source).await?;
        Ok(handle)
    }

    /// The catalog as of now. Later swaps do not affect the returned snapshot.
    pub async fn snapshot(&self) -> Arc<RuleCatalog> {
        self.current.read().await.clone()
    }

    /// Replace the current catalog.
    pub async fn swap(&self, catalog: RuleCatalog) {
        *self.current.write().await = Arc::new(catalog);
    }

    /// Reload from `source`, returning the number of groups now published.
    /// A failed load leaves the previous snapshot in place.
    pub async fn reload(&self, source: &dyn CatalogSource) -> GrammarResult<usize> {
        let groups = source.load().await?;
        let catalog = RuleCatalog::new(groups);
        let count = catalog.len();
        info!(
            source = source.name(),
            groups = count,
            rules = catalog.rule_count(),
            "rule catalog loaded"
        );
        self.swap(catalog).await;
        Ok(count)
    }

    /// Re-poll `source` every `interval` in the background.
    pub fn spawn_refresh(
        &self,
        source: Arc<dyn CatalogSource>,
        interval: Duration,
    ) -> JoinHandle<()> {
        let handle = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick completes immediately; the initial load is the
            // caller's job.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if let Err(e) = handle.reload(source.as_ref()).await {
                    warn!(source = source.name(), error = %e, "catalog reload failed, keeping previous snapshot");
                }
            }
        })
    }
}
