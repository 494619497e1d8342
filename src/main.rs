//! Olelo - Main entrypoint.
//!
//! This is the demonstration harness around the Lehua Trie: it initializes
//! the logging system, loads configuration, seeds the trie from the
//! configured word list, and answers a single query through the four core
//! operations.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::info;

use olelo_lib::config::{self, ConfigLoader};
use olelo_lib::data_structures::LehuaTrie;
use olelo_lib::error::{OleloError, OleloResult};
use olelo_lib::seed;

/// Command line arguments for Olelo.
#[derive(Parser, Debug)]
#[clap(name = "Olelo", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Suggest completions for a prefix (prompts on stdin when PREFIX is omitted)
    Suggest {
        /// Prefix to complete
        prefix: Option<String>,

        /// Maximum number of suggestions (defaults to the configured limit)
        #[clap(short, long, value_parser)]
        limit: Option<usize>,

        /// Print suggestions with frequencies as JSON
        #[clap(long)]
        json: bool,
    },

    /// Look a word up: exact match and prefix existence
    Lookup {
        /// Word to look up
        word: String,
    },

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
fn init_logging() -> OleloResult<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| OleloError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Builds a trie seeded from the configured word list.
fn seeded_trie() -> OleloResult<LehuaTrie> {
    let config = config::get_global_config();
    let words = seed::load_words(&config.get().seed.path)?;

    let mut trie = LehuaTrie::new();
    seed::seed_trie(&mut trie, &words);
    Ok(trie)
}

/// Prompts on stdout and reads one prefix line from stdin.
fn read_prefix() -> OleloResult<String> {
    print!("Enter the letters : ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Main entry point for the application.
fn main() -> OleloResult<()> {
    // Initialize logging early to capture any startup errors
    init_logging()?;

    // Parse command-line arguments
    let args = <Args as clap::Parser>::parse();

    // Load and validate configuration
    let config_loader = ConfigLoader::new(args.config.as_deref(), "OLELO");
    let loaded = match config_loader.load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            process::exit(1);
        }
    };
    config::init_global_config(loaded);

    match args.command.unwrap_or(Command::Suggest {
        prefix: None,
        limit: None,
        json: false,
    }) {
        Command::Suggest {
            prefix,
            limit,
            json,
        } => {
            let trie = seeded_trie()?;

            let prefix = match prefix {
                Some(prefix) => prefix,
                None => read_prefix()?,
            };
            let limit = limit.unwrap_or_else(|| config::get_global_config().get().suggest.limit);

            info!(prefix = %prefix, limit, "Computing suggestions");
            let suggestions = trie.suggestions(&prefix, limit);

            if json {
                println!("{}", serde_json::to_string_pretty(&suggestions)?);
            } else if suggestions.is_empty() {
                println!("(no suggestions)");
            } else {
                for suggestion in &suggestions {
                    println!("{}", suggestion.word);
                }
            }
            Ok(())
        }
        Command::Lookup { word } => {
            let trie = seeded_trie()?;

            println!("search({word:?}) = {}", trie.search(&word));
            println!("starts_with({word:?}) = {}", trie.starts_with(&word));
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = config::OleloConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent).map_err(OleloError::Io)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| OleloError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml).map_err(OleloError::Io)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
