use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;

use dionysios::config::AppConfig;
use dionysios::core::grammar::{DictionaryLookup, InMemoryDictionary};
use dionysios::core::lexicon::InMemoryLexicalStore;
use dionysios::core::service::GrammarService;

/// Ancient Greek morphological analyzer
#[derive(Parser, Debug)]
#[command(name = "dionysios")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Configuration file (defaults to ~/.config/dionysios/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze inflected words
    Analyze {
        words: Vec<String>,

        /// Overall deadline per word, in milliseconds
        #[arg(long)]
        deadline_ms: Option<u64>,
    },

    /// Record an accepted analysis in the lexicon
    Contribute {
        word: String,
        rule: String,
        root_word: String,
        translation: String,
        part_of_speech: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    let _log_guard = dionysios::core::logging::init(&config.logging);
    log::info!("Dionysios v{} starting", dionysios::VERSION);

    let dictionary: Arc<dyn DictionaryLookup> = match &config.analyzer.dictionary_file {
        Some(path) => Arc::new(
            InMemoryDictionary::from_json_file(path)
                .await
                .with_context(|| format!("loading dictionary {}", path.display()))?,
        ),
        None => {
            log::warn!("No dictionary_file configured, every lookup will miss");
            Arc::new(InMemoryDictionary::default())
        }
    };
    let store = InMemoryLexicalStore::new();
    let service = GrammarService::from_config(&config, dictionary, Arc::new(store.clone()))
        .await
        .context("building grammar service")?;

    let output = match args.command {
        Command::Analyze { words, deadline_ms } => {
            let mut analyses = Vec::with_capacity(words.len());
            for word in &words {
                let outcome = match deadline_ms {
                    Some(ms) => {
                        let deadline = tokio::time::Instant::now() + Duration::from_millis(ms);
                        service
                            .analyze_with_deadline(word, deadline)
                            .await
                            .map(|a| json!({ "word": word, "results": a.results, "partial": a.partial }))
                    }
                    None => service
                        .analyze(word)
                        .await
                        .map(|results| json!({ "word": word, "results": results, "partial": false })),
                };
                analyses.push(match outcome {
                    Ok(value) => value,
                    Err(e) if e.is_no_rule_found() => json!({ "word": word, "results": [], "partial": false }),
                    Err(e) => json!({ "word": word, "error": e.to_string() }),
                });
            }
            json!(analyses)
        }
        Command::Contribute {
            word,
            rule,
            root_word,
            translation,
            part_of_speech,
        } => {
            let outcome = service
                .contribute(&word, &rule, &root_word, &translation, &part_of_speech)
                .await?;
            json!({ "outcome": outcome, "entries": store.entries().await })
        }
    };

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");
    Ok(())
}
