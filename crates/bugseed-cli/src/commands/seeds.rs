//! Seeds command implementation.

use crate::cli::SeedsArgs;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use bugseed_domain::OutputRecord;
use bugseed_selector::{read_records_from_path, select_seeds};
use std::io::{self, Write};

/// Execute the seeds command.
pub fn execute_seeds(args: SeedsArgs, config: &AppConfig) -> Result<()> {
    let input = args.input.unwrap_or_else(|| config.pipeline.output.clone());
    let top_k = args.top_k.unwrap_or(config.selector.top_k);
    if top_k == 0 {
        return Err(CliError::InvalidInput("--top-k must be > 0".to_string()));
    }

    let formatter = Formatter::new(args.format.into(), !args.no_color);
    let records = read_records_from_path(&input)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_seeds(&records, top_k, &formatter, &mut out)
}

/// Write the top `top_k` seeds of every record, in stream order.
pub fn write_seeds<W: Write>(
    records: &[OutputRecord],
    top_k: usize,
    formatter: &Formatter,
    out: &mut W,
) -> Result<()> {
    for record in records {
        let seeds = select_seeds(record, top_k);
        out.write_all(formatter.format_seeds(&seeds)?.as_bytes())?;
    }
    out.flush()?;
    Ok(())
}
