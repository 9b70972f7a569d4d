//! Top-K selection

use crate::error::{Result, SelectorError};
use bugseed_domain::{OutputRecord, RefinedInput};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Seeds reported per bug report unless configured otherwise
pub const DEFAULT_TOP_K: usize = 3;

/// Selection settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Number of seeds kept per record
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl SelectorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(SelectorError::Config("top_k must be > 0".to_string()));
        }
        Ok(())
    }
}

/// The highest-ranked inputs of one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedSet {
    /// Identifier of the bug report
    pub bug_report_id: String,
    /// Selected inputs, best first
    pub seeds: Vec<RefinedInput>,
}

/// The `k` highest-scoring inputs, best first
///
/// A missing score ranks as 0. The sort is stable, so equal scores keep their
/// input order.
pub fn select_top_k(inputs: &[RefinedInput], k: usize) -> Vec<RefinedInput> {
    let mut ranked = inputs.to_vec();
    ranked.sort_by_key(|input| Reverse(input.rank_score()));
    ranked.truncate(k);
    ranked
}

/// Select the top `k` inputs of a record
pub fn select_seeds(record: &OutputRecord, k: usize) -> SeedSet {
    SeedSet {
        bug_report_id: record.bug_report_id.clone(),
        seeds: select_top_k(&record.refined_test_inputs, k),
    }
}
