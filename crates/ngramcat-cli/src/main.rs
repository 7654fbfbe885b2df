//! ngramcat
//!
//! Command-line front end for n-gram text categorization: train category
//! profiles from sample text, persist them, and classify documents.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ngramcat_classifiers::{codec, Classifier, ExtractionMode, PatternExtractor, ProfileRegistry};
use ngramcat_core::{CategoryId, Error};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};

mod config;

use config::CliConfig;

/// Exit status for documents that could not be classified
const EXIT_UNCLASSIFIED: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "ngramcat")]
#[command(about = "Text categorization by n-gram frequency ranks", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "ngramcat.yaml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Train a category from sample files and store it in the profile file
    Train {
        /// Profile file to update (created when missing)
        #[arg(short, long)]
        profiles: Option<PathBuf>,

        /// Category id to train
        #[arg(short = 'C', long, allow_negative_numbers = true)]
        category: CategoryId,

        /// Sample files; standard input when none are given
        inputs: Vec<PathBuf>,
    },

    /// Classify a document against the stored profiles
    Classify {
        /// Profile file to read
        #[arg(short, long)]
        profiles: Option<PathBuf>,

        /// Categories to enable; all trained categories when omitted
        #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
        enable: Vec<CategoryId>,

        /// Relative threshold multiplier
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Maximum number of candidates before the result is ambiguous
        #[arg(short, long)]
        max_candidates: Option<usize>,

        /// Minimum number of letters in the document
        #[arg(long)]
        min_doc_size: Option<usize>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,

        /// Document text; standard input when omitted
        text: Option<String>,
    },

    /// List the categories stored in the profile file
    List {
        /// Profile file to read
        #[arg(short, long)]
        profiles: Option<PathBuf>,
    },

    /// Print the ranked n-grams of a text
    Patterns {
        /// Rank raw bytes instead of case-folded code points
        #[arg(long)]
        bytes: bool,

        /// Number of patterns to print
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,

        /// Text to rank; standard input when omitted
        text: Option<String>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = CliConfig::load(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config))?;
    debug!(?config, "Configuration loaded");

    match cli.command {
        Command::Train {
            profiles,
            category,
            inputs,
        } => {
            let path = profiles.unwrap_or(config.profiles);
            train(&path, category, &inputs)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Classify {
            profiles,
            enable,
            threshold,
            max_candidates,
            min_doc_size,
            json,
            text,
        } => {
            let mut settings = config.classifier;
            if let Some(threshold) = threshold {
                settings.threshold_value = threshold;
            }
            if let Some(max_candidates) = max_candidates {
                settings.max_candidates = max_candidates;
            }
            if let Some(min_doc_size) = min_doc_size {
                settings.min_doc_size = min_doc_size;
            }
            let classifier = Classifier::new(settings)?;

            let path = profiles.unwrap_or(config.profiles);
            let mut registry = load_registry(&path)?;
            if enable.is_empty() {
                registry.enable_all();
            } else {
                registry.enable(enable);
            }

            let document = text_or_stdin(text)?;
            classify(&classifier, &registry, &document, json)
        }
        Command::List { profiles } => {
            let path = profiles.unwrap_or(config.profiles);
            let registry = load_registry(&path)?;
            for (id, profile) in registry.trained() {
                println!("{}\t{}", id, profile.len());
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Patterns { bytes, limit, text } => {
            let mode = if bytes {
                ExtractionMode::Bytes
            } else {
                ExtractionMode::CodePoints
            };
            let text = text_or_stdin(text)?;
            let ranked = PatternExtractor::new()?.extract(&text, mode);
            for pattern in ranked.iter().take(limit) {
                let gram = match pattern.as_str() {
                    Some(s) => s.to_string(),
                    None => format!("{:?}", pattern.gram),
                };
                println!("{}\t{}\t{}", pattern.rank, pattern.count, gram);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn train(path: &Path, category: CategoryId, inputs: &[PathBuf]) -> Result<()> {
    let mut registry = if path.exists() {
        load_registry(path)?
    } else {
        info!(path = %path.display(), "Creating new profile file");
        ProfileRegistry::new()
    };

    let samples = if inputs.is_empty() {
        vec![read_stdin()?]
    } else {
        inputs
            .iter()
            .map(|input| {
                std::fs::read_to_string(input)
                    .with_context(|| format!("Failed to read sample {}", input.display()))
            })
            .collect::<Result<Vec<String>>>()?
    };

    let extractor = PatternExtractor::new()?;
    if !registry.train(&extractor, category, &samples) {
        anyhow::bail!("Training samples for category {} contain no letters", category);
    }

    codec::save(&registry, path)
        .with_context(|| format!("Failed to write profiles to {}", path.display()))?;
    info!(category, path = %path.display(), "Saved profiles");
    Ok(())
}

fn classify(
    classifier: &Classifier,
    registry: &ProfileRegistry,
    document: &str,
    json: bool,
) -> Result<ExitCode> {
    match classifier.classify(registry, document) {
        Ok(result) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                let ids: Vec<String> = result.categories.iter().map(|id| id.to_string()).collect();
                println!("{}", ids.join(","));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_document_error() => {
            eprintln!("{}", e);
            if json {
                println!("{}", serde_json::json!({ "error": e.to_string(), "kind": error_kind(&e) }));
            }
            Ok(ExitCode::from(EXIT_UNCLASSIFIED))
        }
        Err(e) => Err(e.into()),
    }
}

fn error_kind(error: &Error) -> &'static str {
    match error {
        Error::TooShort { .. } => "too_short",
        Error::NoProfiles => "no_profiles",
        Error::Ambiguous { .. } => "ambiguous",
        _ => "internal",
    }
}

fn load_registry(path: &Path) -> Result<ProfileRegistry> {
    codec::load(path).with_context(|| format!("Failed to read profiles from {}", path.display()))
}

fn text_or_stdin(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => read_stdin(),
    }
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read standard input")?;
    Ok(buf)
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("ngramcat=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ngramcat=warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
