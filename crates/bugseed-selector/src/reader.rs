//! JSON Lines record reader

use crate::error::{Result, SelectorError};
use bugseed_domain::OutputRecord;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Read every record of a JSON Lines stream
///
/// Blank lines are skipped. A line that does not decode is an error naming
/// its 1-based line number.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<OutputRecord>> {
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line).map_err(|source| SelectorError::Json {
            line: index + 1,
            source,
        })?;
        records.push(record);
    }

    debug!("Read {} output records", records.len());
    Ok(records)
}

/// Read a record stream from a file
pub fn read_records_from_path(path: impl AsRef<Path>) -> Result<Vec<OutputRecord>> {
    let file = File::open(path.as_ref())?;
    read_records(BufReader::new(file))
}
