//! Logging initialization.
//!
//! Installs a `tracing` subscriber with a human-readable console layer and an
//! optional JSON file layer, and bridges `log` records into `tracing`.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Layer};

use crate::config::LoggingConfig;

/// Log file name inside the configured log directory.
pub const LOG_FILE_NAME: &str = "dionysios.log";

/// Build the event filter: `RUST_LOG` when set, the configured directives
/// otherwise, and `info` when those do not parse.
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Errors raised while installing the global logging hooks.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to initialize LogTracer: {0}")]
    LogBridge(#[from] log::SetLoggerError),

    #[error("Failed to initialize tracing subscriber: {0}")]
    Subscriber(#[from] TryInitError),
}

/// Initialize the logging system, reporting failures on stderr.
///
/// This sets up:
/// 1. Redirects standard `log` crate events to `tracing`.
/// 2. A stderr logger (pretty formatted). Stdout is left to command output.
/// 3. A daily-rolling JSON file logger when `log_dir` is configured.
///
/// Returns the file appender's `WorkerGuard`, which must be kept alive for
/// buffered logs to be flushed on shutdown.
pub fn init(config: &LoggingConfig) -> Option<WorkerGuard> {
    match try_init(config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{e}");
            None
        }
    }
}

/// As [`init`], returning the failure instead of printing it. Succeeds once
/// per process.
pub fn try_init(config: &LoggingConfig) -> Result<Option<WorkerGuard>, LoggingError> {
    // The subscriber's own `tracing-log` feature is off, so this is the only
    // `log` bridge.
    tracing_log::LogTracer::init()?;

    let filter = build_filter(config);

    let (file_layer, guard) = match config.log_dir.as_deref().and_then(prepare_log_dir) {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .json()
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true)
                .with_target(true)
                .with_filter(build_filter(config));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .pretty()
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()?;

    if let Some(dir) = &config.log_dir {
        log::info!(
            "Logging initialized. Writing to: {:?} (daily rolling)",
            dir.join(LOG_FILE_NAME)
        );
    }

    Ok(guard)
}

fn prepare_log_dir(dir: &Path) -> Option<&Path> {
    if !dir.exists() {
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("Failed to create logs directory {}: {}", dir.display(), e);
            return None;
        }
    }
    Some(dir)
}
