//! Candidate merging

use crate::error::Result;
use bugseed_domain::Candidate;

/// Literal candidates followed by linguistic candidates, untouched
pub fn merge_candidates(literal: Vec<Candidate>, linguistic: Vec<Candidate>) -> Vec<Candidate> {
    let mut merged = literal;
    merged.extend(linguistic);
    merged
}

/// Pretty-printed JSON array of `{value, kind, source}` objects
pub fn candidates_json(candidates: &[Candidate]) -> Result<String> {
    Ok(serde_json::to_string_pretty(candidates)?)
}
