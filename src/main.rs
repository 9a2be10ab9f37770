//! Huaolelo - Main entrypoint.
//!
//! Loads configuration and a word list, builds a dictionary and answers one
//! query per invocation.

use clap::{Parser, Subcommand};
use huaolelo_lib::config::{ConfigLoader, HuaoleloConfig, LogConfig, ENV_PREFIX};
use huaolelo_lib::data_structures::HuaTrie;
use huaolelo_lib::error::{
    ErrorContext, ErrorReporter, HuaoleloError, HuaoleloResult, TracingErrorReporter,
};
use huaolelo_lib::loader::WordListLoader;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Command line arguments for Huaolelo.
#[derive(Parser, Debug)]
#[clap(name = "huaolelo", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Word list to load (overrides `dictionary.word_list`)
    #[clap(short, long, value_parser)]
    words: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print the shortest words starting with a prefix
    Complete {
        /// Prefix to complete
        prefix: String,

        /// Maximum number of completions (defaults to `dictionary.default_completions`)
        #[clap(short = 'n', long, value_parser)]
        count: Option<usize>,

        /// Print the completions as a JSON array
        #[clap(long)]
        json: bool,
    },

    /// Check whether words are in the dictionary
    Check {
        /// Words to look up
        #[clap(required = true)]
        words: Vec<String>,
    },

    /// Print word and node counts
    Stats,

    /// Print every word in pre-order
    Dump,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

impl Command {
    /// Subcommand name as typed on the command line.
    fn name(&self) -> &'static str {
        match self {
            Command::Complete { .. } => "complete",
            Command::Check { .. } => "check",
            Command::Stats => "stats",
            Command::Dump => "dump",
            Command::Validate => "validate",
            Command::GenConfig { .. } => "gen-config",
        }
    }
}

/// Describes the invocation for error reports.
fn invocation_details(command: &Command, word_list: Option<&Path>) -> String {
    match word_list {
        Some(path) => format!("command: {}, word list: {}", command.name(), path.display()),
        None => format!("command: {}, word list: none", command.name()),
    }
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> HuaoleloResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| HuaoleloError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Builds the dictionary from the configured word list.
fn build_dictionary(config: &HuaoleloConfig, words: Option<PathBuf>) -> HuaoleloResult<HuaTrie> {
    let mut dictionary = HuaTrie::new();

    match words.or_else(|| config.dictionary.word_list.clone()) {
        Some(path) => {
            WordListLoader::new(&config.dictionary).load_path(&mut dictionary, &path)?;
        }
        None => warn!("No word list configured, starting with an empty dictionary"),
    }

    Ok(dictionary)
}

fn run(args: Args, config: HuaoleloConfig) -> HuaoleloResult<bool> {
    match args.command {
        Command::Complete {
            prefix,
            count,
            json,
        } => {
            let dictionary = build_dictionary(&config, args.words)?;
            let count = count.unwrap_or(config.dictionary.default_completions);
            let completions = dictionary.predict_completions(&prefix, count);

            if json {
                println!("{}", serde_json::to_string(&completions)?);
            } else {
                for completion in &completions {
                    println!("{completion}");
                }
            }
            Ok(true)
        }
        Command::Check { words } => {
            let dictionary = build_dictionary(&config, args.words)?;
            let mut all_known = true;
            for word in &words {
                let known = dictionary.is_word(word);
                all_known &= known;
                println!("{word}: {known}");
            }
            Ok(all_known)
        }
        Command::Stats => {
            let dictionary = build_dictionary(&config, args.words)?;
            println!("words: {}", dictionary.size());
            println!("nodes: {}", dictionary.node_count());
            Ok(true)
        }
        Command::Dump => {
            let dictionary = build_dictionary(&config, args.words)?;
            for word in dictionary.words() {
                println!("{word}");
            }
            Ok(true)
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(true)
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = HuaoleloConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| HuaoleloError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(true)
        }
    }
}

/// Main entry point for the application.
fn main() {
    let args = <Args as clap::Parser>::parse();

    // Configuration comes first since it decides how to log
    let config = match ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(2);
        }
    };

    if let Err(e) = init_logging(&config.log) {
        eprintln!("{e}");
        process::exit(2);
    }

    let word_list = args
        .words
        .clone()
        .or_else(|| config.dictionary.word_list.clone());
    let details = invocation_details(&args.command, word_list.as_deref());

    match run(args, config) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            TracingErrorReporter.report(ErrorContext::new(e, "huaolelo").with_details(details));
            process::exit(2);
        }
    }
}
