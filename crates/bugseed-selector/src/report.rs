//! Seed report rendering

use crate::error::Result;
use crate::select::SeedSet;

/// Console block for one record
///
/// A leading blank line, the bug id, a header, then one numbered line per
/// seed. A missing score renders as `n/a`.
pub fn render_text(seeds: &SeedSet) -> String {
    let mut out = String::from("\n");
    out.push_str(&format!("Bug ID: {}\n", seeds.bug_report_id));
    out.push_str("Seed Inputs:\n");
    for (rank, seed) in seeds.seeds.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} (type={}, score={})\n",
            rank + 1,
            seed.value,
            seed.kind,
            score_label(seed.relevance_score)
        ));
    }
    out
}

/// One compact JSON line for downstream tools, without the trailing newline
pub fn render_json(seeds: &SeedSet) -> Result<String> {
    Ok(serde_json::to_string(seeds)?)
}

/// Score as shown in the report, `n/a` when missing
pub fn score_label(score: Option<i64>) -> String {
    score.map_or_else(|| "n/a".to_string(), |s| s.to_string())
}
