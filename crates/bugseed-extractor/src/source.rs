//! Bug-report table input

use crate::error::Result;
use bugseed_domain::BugReport;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Read every row of a headed CSV table
///
/// Rows shorter than the header are padded with empty cells. Cells beyond the
/// last header column are dropped.
pub fn read_bug_reports<R: Read>(reader: R) -> Result<Vec<BugReport>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let mut reports = Vec::new();

    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        if record.len() > headers.len() {
            warn!(
                row = index + 1,
                cells = record.len(),
                columns = headers.len(),
                "row has more cells than the header, extra cells dropped"
            );
        }
        let cells = headers
            .iter()
            .enumerate()
            .map(|(i, column)| (column, record.get(i).unwrap_or("")));
        reports.push(BugReport::from_cells(cells));
    }

    debug!("Read {} bug reports", reports.len());
    Ok(reports)
}

/// Read a bug-report table from a file
pub fn read_bug_reports_from_path(path: impl AsRef<Path>) -> Result<Vec<BugReport>> {
    let file = File::open(path.as_ref())?;
    read_bug_reports(file)
}
