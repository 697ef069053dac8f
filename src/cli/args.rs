//! Command line argument parsing for the prefixsim CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{PrefixSimError, Result};
use crate::matching::config::MatchConfig;
use crate::matching::level::SimilarityLevel;

/// prefixsim - prefix-accelerated approximate phrase matching
#[derive(Parser, Debug, Clone)]
#[command(name = "prefixsim")]
#[command(about = "Find dictionary phrases whose tokens start with a query and resemble it")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PrefixSimArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Engine configuration file (JSON)
    #[arg(short, long, env = "PREFIXSIM_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PrefixSimArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Match a single query against a dictionary
    Search(SearchArgs),

    /// Answer a JSON similarity request
    Request(RequestArgs),

    /// Match every query of a file, in parallel
    Batch(BatchArgs),

    /// Print the token tree built from a dictionary
    Tree(TreeArgs),
}

/// How the acceptance threshold is chosen.
#[derive(Args, Debug, Clone, Default)]
pub struct ThresholdArgs {
    /// Similarity level (EXTRA_LOW, LOW, MEDIUM, HIGH, EXTRA_HIGH)
    #[arg(short, long, conflicts_with = "threshold")]
    pub level: Option<String>,

    /// Raw similarity threshold between 0.0 and 1.0
    #[arg(short, long)]
    pub threshold: Option<f64>,
}

impl ThresholdArgs {
    /// Resolve to a numeric threshold; the config's default level applies when
    /// neither flag is given.
    pub fn resolve(&self, config: &MatchConfig) -> Result<f64> {
        if let Some(threshold) = self.threshold {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(PrefixSimError::invalid_argument(format!(
                    "threshold must be between 0.0 and 1.0, got {threshold}"
                )));
            }
            return Ok(threshold);
        }

        let level = match &self.level {
            Some(name) => SimilarityLevel::parse(name).unwrap_or_else(|| {
                warn!("unknown similarity level {name:?}, accepting every candidate");
                SimilarityLevel::ExtraLow
            }),
            None => config.default_level,
        };
        Ok(level.threshold())
    }
}

/// Arguments for a single search
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Dictionary file (one phrase per line, or a JSON array)
    #[arg(short, long, value_name = "DICTIONARY_FILE")]
    pub dictionary: PathBuf,

    #[command(flatten)]
    pub threshold: ThresholdArgs,

    /// Print raw matches (unsorted, with duplicates) instead of ranked ones
    #[arg(long)]
    pub raw: bool,

    /// Maximum number of results to print
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Arguments for answering a JSON request
#[derive(Parser, Debug, Clone)]
pub struct RequestArgs {
    /// Request file; reads stdin when omitted
    #[arg(value_name = "REQUEST_FILE")]
    pub request_file: Option<PathBuf>,
}

/// Arguments for batch matching
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// Dictionary file (one phrase per line, or a JSON array)
    #[arg(short, long, value_name = "DICTIONARY_FILE")]
    pub dictionary: PathBuf,

    /// File with one query per line
    #[arg(long, value_name = "QUERIES_FILE")]
    pub queries: PathBuf,

    #[command(flatten)]
    pub threshold: ThresholdArgs,

    /// Number of worker threads (defaults to the number of CPUs)
    #[arg(long)]
    pub threads: Option<usize>,
}

/// Arguments for printing the token tree
#[derive(Parser, Debug, Clone)]
pub struct TreeArgs {
    /// Dictionary file (one phrase per line, or a JSON array)
    #[arg(short, long, value_name = "DICTIONARY_FILE")]
    pub dictionary: PathBuf,

    /// Only print keys starting with this prefix
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Do not descend below this depth
    #[arg(long)]
    pub max_depth: Option<usize>,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_search_command() {
        let args = PrefixSimArgs::try_parse_from([
            "prefixsim",
            "search",
            "new",
            "--dictionary",
            "cities.txt",
            "--level",
            "HIGH",
            "--raw",
        ])
        .unwrap();

        if let Command::Search(search_args) = args.command {
            assert_eq!(search_args.query, "new");
            assert_eq!(search_args.dictionary, PathBuf::from("cities.txt"));
            assert_eq!(search_args.threshold.level.as_deref(), Some("HIGH"));
            assert!(search_args.raw);
            assert_eq!(search_args.limit, None);
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_level_and_threshold_conflict() {
        let result = PrefixSimArgs::try_parse_from([
            "prefixsim",
            "search",
            "new",
            "-d",
            "cities.txt",
            "--level",
            "HIGH",
            "--threshold",
            "0.5",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_batch_command() {
        let args = PrefixSimArgs::try_parse_from([
            "prefixsim",
            "-vv",
            "--format",
            "json",
            "batch",
            "-d",
            "cities.txt",
            "--queries",
            "queries.txt",
            "--threshold",
            "0.4",
            "--threads",
            "2",
        ])
        .unwrap();

        assert_eq!(args.verbosity(), 2);
        assert_eq!(args.output_format, OutputFormat::Json);
        if let Command::Batch(batch_args) = args.command {
            assert_eq!(batch_args.queries, PathBuf::from("queries.txt"));
            assert_eq!(batch_args.threshold.threshold, Some(0.4));
            assert_eq!(batch_args.threads, Some(2));
        } else {
            panic!("Expected Batch command");
        }
    }

    #[test]
    fn test_request_command_defaults_to_stdin() {
        let args = PrefixSimArgs::try_parse_from(["prefixsim", "request"]).unwrap();
        if let Command::Request(request_args) = args.command {
            assert!(request_args.request_file.is_none());
        } else {
            panic!("Expected Request command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = PrefixSimArgs::try_parse_from(["prefixsim", "-q", "request"]).unwrap();
        assert_eq!(args.verbosity(), 0);

        let args = PrefixSimArgs::try_parse_from(["prefixsim", "request"]).unwrap();
        assert_eq!(args.verbosity(), 1);
    }

    #[test]
    fn test_threshold_resolution() {
        let config = MatchConfig::default();

        let args = ThresholdArgs {
            level: Some("MEDIUM".to_string()),
            threshold: None,
        };
        assert_eq!(args.resolve(&config).unwrap(), 0.4);

        let args = ThresholdArgs {
            level: Some("bogus".to_string()),
            threshold: None,
        };
        assert_eq!(args.resolve(&config).unwrap(), 0.0);

        let args = ThresholdArgs {
            level: None,
            threshold: Some(1.5),
        };
        assert!(args.resolve(&config).is_err());

        let config = MatchConfig {
            default_level: SimilarityLevel::ExtraHigh,
            ..Default::default()
        };
        assert_eq!(ThresholdArgs::default().resolve(&config).unwrap(), 0.8);
    }
}
