//! Lanai Suggest - Main entrypoint.
//!
//! Loads a weighted-term file into a ternary search trie and answers prefix
//! and almost-match queries against it from the command line.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lanai_suggest_lib::config::{self, ConfigLoader, LanaiConfig, LogConfig};
use lanai_suggest_lib::data_structures::lanai_trie::{LanaiTrie, MismatchPolicy};
use lanai_suggest_lib::error::{
    report_error, set_error_reporter, ErrorContext, LanaiError, LanaiResult, TracingErrorReporter,
};
use lanai_suggest_lib::loader::{LoadStats, WeightedTermLoader};

/// Command line arguments for Lanai Suggest.
#[derive(Parser, Debug)]
#[clap(name = "Lanai Suggest", version, author, about)]
struct Cli {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[clap(long, global = true)]
    json: bool,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Term file to query.
#[derive(clap::Args, Debug)]
struct DictArgs {
    /// Weighted-term file (`term<TAB>weight` per line)
    #[clap(short, long, value_parser)]
    dict: PathBuf,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// List terms starting with a prefix
    Prefix {
        #[clap(flatten)]
        dict: DictArgs,

        /// Prefix to complete
        prefix: String,

        /// Maximum number of results (negative for unlimited)
        #[clap(short, long, allow_negative_numbers = true)]
        limit: Option<i32>,
    },

    /// List terms that differ from a key by a few substitutions
    Almost {
        #[clap(flatten)]
        dict: DictArgs,

        /// Key to match
        key: String,

        /// Maximum number of results (negative for unlimited)
        #[clap(short, long, allow_negative_numbers = true)]
        limit: Option<i32>,

        /// Substitutions tolerated (clamped to 0..=3)
        #[clap(long, allow_negative_numbers = true)]
        diff: Option<i32>,

        /// Which mismatch counts to report
        #[clap(long, value_enum)]
        policy: PolicyArg,
    },

    /// Show term and node counts for a term file
    Stats {
        #[clap(flatten)]
        dict: DictArgs,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Mismatch policy as spelled on the command line.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum PolicyArg {
    /// Exactly the tolerated number of substitutions
    Exact,
    /// Anywhere from zero up to the tolerated number
    UpTo,
}

impl From<PolicyArg> for MismatchPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Exact => MismatchPolicy::Exact,
            PolicyArg::UpTo => MismatchPolicy::UpTo,
        }
    }
}

/// One query result.
#[derive(Debug, Serialize)]
struct Suggestion {
    term: String,
    weight: Option<f32>,
}

/// Output of the `stats` command.
#[derive(Debug, Serialize)]
struct TrieStats {
    terms: usize,
    nodes: usize,
    approx_bytes: usize,
    load: LoadStats,
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> LanaiResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(true)
        .with_file(true);

    let installed = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };
    installed
        .map_err(|e| LanaiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn load_dictionary(path: &Path, config: &LanaiConfig) -> LanaiResult<(LanaiTrie<f32>, LoadStats)> {
    let mut trie = config.trie.build_trie()?;
    let stats = WeightedTermLoader::new(config.loader.clone()).load_path(path, &mut trie)?;
    Ok((trie, stats))
}

fn print_suggestions(trie: &LanaiTrie<f32>, terms: Vec<String>, json: bool) -> LanaiResult<()> {
    let suggestions: Vec<Suggestion> = terms
        .into_iter()
        .map(|term| {
            let weight = trie.get(&term).copied();
            Suggestion { term, weight }
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
    } else {
        for suggestion in &suggestions {
            match suggestion.weight {
                Some(weight) => println!("{}\t{}", suggestion.term, weight),
                None => println!("{}", suggestion.term),
            }
        }
    }
    Ok(())
}

fn run(command: Command, json: bool, config: &LanaiConfig) -> LanaiResult<()> {
    match command {
        Command::Prefix {
            dict,
            prefix,
            limit,
        } => {
            let (trie, _) = load_dictionary(&dict.dict, config)?;
            let terms = match limit {
                Some(limit) => trie.match_prefix(&prefix, limit),
                None => trie.match_prefix_default(&prefix),
            };
            print_suggestions(&trie, terms, json)
        }
        Command::Almost {
            dict,
            key,
            limit,
            diff,
            policy,
        } => {
            let (trie, _) = load_dictionary(&dict.dict, config)?;
            let diff = diff.unwrap_or_else(|| i32::from(trie.match_almost_diff()));
            let limit = limit.unwrap_or(config.trie.num_return_values);
            let terms = trie.match_almost_with_diff(&key, diff, limit, policy.into());
            print_suggestions(&trie, terms, json)
        }
        Command::Stats { dict } => {
            let (trie, load) = load_dictionary(&dict.dict, config)?;
            let stats = TrieStats {
                terms: trie.num_data_nodes(),
                nodes: trie.num_nodes(),
                approx_bytes: trie.size_in_bytes(),
                load,
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("terms\t{}", stats.terms);
                println!("nodes\t{}", stats.nodes);
                println!("approx_bytes\t{}", stats.approx_bytes);
            }
            Ok(())
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&LanaiConfig::default())
                .map_err(|e| LanaiError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() -> ExitCode {
    let cli = Cli::parse();

    let loader = ConfigLoader::new(cli.config.as_deref(), config::ENV_PREFIX);
    let loaded = match loader.load() {
        Ok(loaded) => loaded,
        Err(e) => {
            report_error(ErrorContext::new(e.into(), "config"));
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(&loaded.log) {
        eprintln!("{e}");
    }
    set_error_reporter(Arc::new(TracingErrorReporter));
    config::init_global_config(loaded);

    let global = config::global_config();
    match run(cli.command, cli.json, &global) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(ErrorContext::new(e, "cli"));
            ExitCode::FAILURE
        }
    }
}
