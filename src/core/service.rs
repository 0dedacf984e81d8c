//! Grammar service facade.
//!
//! Exposes the two public operations, `analyze` and `contribute`, over one
//! analyzer and one aggregation merger.

use std::sync::Arc;

use thiserror::Error;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::info;

use super::grammar::{
    Analysis, AnalysisResult, Analyzer, BundledCatalogSource, CatalogHandle, CatalogSource,
    DictionaryLookup, FileCatalogSource, GrammarError,
};
use super::lexicon::{
    AggregationMerger, Contribution, LexicalStore, LexiconError, MergeOutcome, PartOfSpeech,
};
use crate::config::AppConfig;

/// Errors surfaced by [`GrammarService`].
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Grammar(#[from] GrammarError),

    #[error(transparent)]
    Lexicon(#[from] LexiconError),
}

impl ServiceError {
    /// The analyze call found nothing; a normal "no answer" outcome.
    pub fn is_no_rule_found(&self) -> bool {
        matches!(self, Self::Grammar(e) if e.is_no_rule_found())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

pub struct GrammarService {
    analyzer: Analyzer,
    merger: AggregationMerger,
    refresh: Option<JoinHandle<()>>,
}

impl GrammarService {
    pub fn new(analyzer: Analyzer, merger: AggregationMerger) -> Self {
        Self {
            analyzer,
            merger,
            refresh: None,
        }
    }

    /// Build the service from configuration: the catalog comes from
    /// `analyzer.catalog_dir` or the bundled tables and is re-polled when a
    /// refresh interval is set.
    pub async fn from_config(
        config: &AppConfig,
        dictionary: Arc<dyn DictionaryLookup>,
        store: Arc<dyn LexicalStore>,
    ) -> ServiceResult<Self> {
        let source: Arc<dyn CatalogSource> = match &config.analyzer.catalog_dir {
            Some(dir) => Arc::new(FileCatalogSource::new(dir)),
            None => Arc::new(BundledCatalogSource),
        };
        let catalog = CatalogHandle::load(source.as_ref()).await?;

        let refresh = config.analyzer.catalog_refresh().map(|interval| {
            info!(source = source.name(), ?interval, "catalog refresh enabled");
            catalog.spawn_refresh(source.clone(), interval)
        });

        let analyzer = Analyzer::with_config(catalog, dictionary, config.analyzer.ranker_config());
        let merger = AggregationMerger::with_config(store, config.merger.clone());

        Ok(Self {
            analyzer,
            merger,
            refresh,
        })
    }

    pub fn catalog(&self) -> &CatalogHandle {
        self.analyzer.catalog()
    }

    /// Ranked analyses of `word`.
    pub async fn analyze(&self, word: &str) -> ServiceResult<Vec<AnalysisResult>> {
        Ok(self.analyzer.analyze(word).await?)
    }

    /// Ranked analyses of `word`, with all dictionary lookups bounded by
    /// `deadline`.
    pub async fn analyze_with_deadline(
        &self,
        word: &str,
        deadline: Instant,
    ) -> ServiceResult<Analysis> {
        Ok(self.analyzer.analyze_with_deadline(word, Some(deadline)).await?)
    }

    /// Record an accepted analysis in the lexicon.
    ///
    /// The part of speech is validated before the store is touched.
    pub async fn contribute(
        &self,
        word: &str,
        rule: &str,
        root_word: &str,
        translation: &str,
        part_of_speech: &str,
    ) -> ServiceResult<MergeOutcome> {
        let part_of_speech: PartOfSpeech = part_of_speech.parse()?;
        let outcome = self
            .merger
            .merge_contribution(Contribution {
                word,
                rule,
                root_word,
                translation,
                part_of_speech,
            })
            .await?;
        Ok(outcome)
    }
}

impl Drop for GrammarService {
    fn drop(&mut self) {
        if let Some(refresh) = self.refresh.take() {
            refresh.abort();
        }
    }
}
