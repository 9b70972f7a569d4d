//! Bug report rows as read from the tabular input

/// Column holding the one-line summary
pub const SUMMARY_COLUMN: &str = "Summary";

/// Column holding the reproduction steps
pub const STEPS_COLUMN: &str = "Steps to Reproduce";

/// Column holding the report identifier
pub const ID_COLUMN: &str = "Bug Report ID";

/// One input row: ordered (column, value) cells
///
/// Column order is preserved because the flattened text joins cell values in
/// that order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BugReport {
    cells: Vec<(String, String)>,
}

impl BugReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a report from (column, value) pairs
    pub fn from_cells<I, C, V>(cells: I) -> Self
    where
        I: IntoIterator<Item = (C, V)>,
        C: Into<String>,
        V: Into<String>,
    {
        Self {
            cells: cells
                .into_iter()
                .map(|(c, v)| (c.into(), v.into()))
                .collect(),
        }
    }

    /// Append a cell
    pub fn with_cell(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.cells.push((column.into(), value.into()));
        self
    }

    /// All cells in column order
    pub fn cells(&self) -> &[(String, String)] {
        &self.cells
    }

    /// Value of a column, if present
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v.as_str())
    }

    /// Value of a column, or the empty string
    pub fn field(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }

    /// The `Summary` field
    pub fn summary(&self) -> &str {
        self.field(SUMMARY_COLUMN)
    }

    /// The `Steps to Reproduce` field
    pub fn steps_to_reproduce(&self) -> &str {
        self.field(STEPS_COLUMN)
    }

    /// The `Bug Report ID` field
    pub fn id(&self) -> &str {
        self.field(ID_COLUMN)
    }

    /// Every cell value joined by a single space, in column order
    pub fn flatten(&self) -> String {
        self.cells
            .iter()
            .map(|(_, v)| v.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
