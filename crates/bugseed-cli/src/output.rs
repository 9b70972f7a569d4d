//! Output formatting for the CLI.

use crate::error::Result;
use bugseed_selector::{render_json, render_text, score_label, SeedSet};
use colored::*;
use std::path::Path;

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// One compact JSON object per line
    Json,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the seeds of one bug report.
    ///
    /// Text output keeps the plain report layout, with color added only when
    /// enabled.
    pub fn format_seeds(&self, seeds: &SeedSet) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(format!("{}\n", render_json(seeds)?)),
            OutputFormat::Text if !self.color_enabled => Ok(render_text(seeds)),
            OutputFormat::Text => Ok(self.format_seeds_colored(seeds)),
        }
    }

    fn format_seeds_colored(&self, seeds: &SeedSet) -> String {
        let mut out = String::from("\n");
        out.push_str(&format!("{} {}\n", "Bug ID:".bold(), seeds.bug_report_id.as_str().cyan()));
        out.push_str(&format!("{}\n", "Seed Inputs:".bold()));
        for (rank, seed) in seeds.seeds.iter().enumerate() {
            out.push_str(&format!(
                "{}. {} (type={}, score={})\n",
                rank + 1,
                seed.value.as_str().green(),
                seed.kind,
                score_label(seed.relevance_score).as_str().yellow()
            ));
        }
        out
    }

    /// Format the extraction completion line.
    pub fn extraction_complete(&self, output: &Path) -> String {
        self.success(&format!(
            "Extraction completed. Output saved to {}",
            output.display()
        ))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(message, "green")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            _ => text.to_string(),
        }
    }
}
