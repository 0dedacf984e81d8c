use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::grammar::dictionary::GREEK;
use crate::core::grammar::ranker::RankerConfig;
use crate::core::lexicon::merger::MergerConfig;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub analyzer: AnalyzerConfig,
    pub merger: MergerConfig,
    pub logging: LoggingConfig,
}

/// Analyzer and catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Language passed to dictionary lookups.
    pub language: String,
    /// Upper bound for a single dictionary lookup, in milliseconds.
    pub lookup_timeout_ms: u64,
    /// Directory of declension group files; the bundled tables when unset.
    pub catalog_dir: Option<PathBuf>,
    /// Re-poll interval of the catalog source; `0` disables refreshing.
    pub catalog_refresh_secs: u64,
    /// JSON dictionary file for the in-memory dictionary.
    pub dictionary_file: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, overridden by `RUST_LOG`.
    pub filter: String,
    /// Directory for daily-rolling JSON logs; no file logging when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            language: GREEK.to_string(),
            lookup_timeout_ms: 2_000,
            catalog_dir: None,
            catalog_refresh_secs: 0,
            dictionary_file: None,
        }
    }
}

impl AnalyzerConfig {
    pub fn ranker_config(&self) -> RankerConfig {
        RankerConfig {
            language: self.language.clone(),
            lookup_timeout: Duration::from_millis(self.lookup_timeout_ms.max(1)),
        }
    }

    pub fn catalog_refresh(&self) -> Option<Duration> {
        (self.catalog_refresh_secs > 0).then(|| Duration::from_secs(self.catalog_refresh_secs))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/dionysios/config.toml`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Failed to parse config at {}: {e}, using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::debug!("No config file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("dionysios").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
