//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bugseed - Extract ranked test-input seeds from bug reports.
#[derive(Debug, Parser)]
#[command(name = "bugseed")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "BUGSEED_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the extraction pipeline over a bug-report table
    Extract(ExtractArgs),

    /// Print the top-ranked seed inputs of an extraction stream
    Seeds(SeedsArgs),
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Bug-report CSV file
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// JSON Lines output file (truncated)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Model identifier
    #[arg(short, long)]
    pub model: Option<String>,
}

/// Arguments for the seeds command.
#[derive(Debug, Parser)]
pub struct SeedsArgs {
    /// JSON Lines file written by `extract`
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Number of seeds per bug report
    #[arg(short = 'k', long)]
    pub top_k: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: CliFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable report (default)
    Text,
    /// One JSON object per bug report
    Json,
}

impl From<CliFormat> for crate::output::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::output::OutputFormat::Text,
            CliFormat::Json => crate::output::OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_defaults() {
        let cli = Cli::parse_from(["bugseed", "extract"]);
        match cli.command {
            Command::Extract(args) => {
                assert!(args.input.is_none());
                assert!(args.output.is_none());
                assert!(args.model.is_none());
            }
            _ => panic!("Expected Extract command"),
        }
    }

    #[test]
    fn test_seeds_command() {
        let cli = Cli::parse_from([
            "bugseed", "seeds", "--input", "out.jsonl", "-k", "5", "--format", "json",
        ]);
        match cli.command {
            Command::Seeds(args) => {
                assert_eq!(args.input, Some(PathBuf::from("out.jsonl")));
                assert_eq!(args.top_k, Some(5));
                assert_eq!(args.format, CliFormat::Json);
                assert!(!args.no_color);
            }
            _ => panic!("Expected Seeds command"),
        }
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::parse_from(["bugseed", "extract", "--config", "bugseed.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("bugseed.toml")));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["bugseed"]).is_err());
    }
}
