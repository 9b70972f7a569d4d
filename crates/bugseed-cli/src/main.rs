//! Bugseed CLI - Extract ranked test-input seeds from bug reports.

use bugseed_cli::commands;
use bugseed_cli::{AppConfig, Cli, Command, Formatter, OutputFormat};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize tracing (log to stderr, stdout carries the report)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> bugseed_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load and check config
    let config = AppConfig::load(cli.config.as_deref())?;
    config.validate()?;

    // Handle commands
    match cli.command {
        Command::Extract(args) => {
            let formatter = Formatter::new(OutputFormat::Text, true);
            commands::execute_extract(args, &config, &formatter)?;
        }
        Command::Seeds(args) => {
            commands::execute_seeds(args, &config)?;
        }
    }

    Ok(())
}
