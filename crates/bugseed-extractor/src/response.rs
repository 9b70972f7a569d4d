//! Parse LLM output into refined inputs

use bugseed_domain::RefinedInput;
use serde_json::Value;
use tracing::warn;

/// Lowest relevance score the prompt asks for
pub const MIN_RELEVANCE_SCORE: i64 = 1;

/// Highest relevance score the prompt asks for
pub const MAX_RELEVANCE_SCORE: i64 = 5;

/// Result of interpreting one model response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefinementOutcome {
    /// The response was a list of refined inputs
    Refined(Vec<RefinedInput>),

    /// The response could not be read as a list of refined inputs
    Unparseable {
        /// Decoder message
        reason: String,
        /// Length of the response text in bytes
        response_len: usize,
    },
}

impl RefinementOutcome {
    /// The refined inputs, or an empty list for an unparseable response
    pub fn into_inputs(self) -> Vec<RefinedInput> {
        match self {
            RefinementOutcome::Refined(inputs) => inputs,
            RefinementOutcome::Unparseable { .. } => Vec::new(),
        }
    }

    /// Whether the response parsed
    pub fn is_refined(&self) -> bool {
        matches!(self, RefinementOutcome::Refined(_))
    }
}

/// Parse a model response as a JSON array of refined inputs
///
/// Only text that is not a JSON array is unparseable. Inside the array an
/// element that is not an object is skipped with a warning; the rest are kept
/// in order. Scores outside the requested range are clamped.
pub fn parse_refinement(response: &str, unwrap_code_fences: bool) -> RefinementOutcome {
    let json = if unwrap_code_fences {
        strip_code_fence(response)
    } else {
        response.to_string()
    };

    let elements = match serde_json::from_str::<Vec<Value>>(&json) {
        Ok(elements) => elements,
        Err(e) => {
            return RefinementOutcome::Unparseable {
                reason: e.to_string(),
                response_len: response.len(),
            }
        }
    };

    let mut inputs = Vec::with_capacity(elements.len());
    for (index, element) in elements.into_iter().enumerate() {
        match serde_json::from_value::<RefinedInput>(element) {
            Ok(input) => inputs.push(input),
            Err(e) => warn!(index, error = %e, "skipping malformed refined input"),
        }
    }
    RefinementOutcome::Refined(clamp_scores(inputs))
}

fn clamp_scores(mut inputs: Vec<RefinedInput>) -> Vec<RefinedInput> {
    for input in &mut inputs {
        if let Some(score) = input.relevance_score {
            let clamped = score.clamp(MIN_RELEVANCE_SCORE, MAX_RELEVANCE_SCORE);
            if clamped != score {
                warn!(
                    value = %input.value,
                    score,
                    clamped,
                    "relevance score out of range"
                );
                input.relevance_score = Some(clamped);
            }
        }
    }
    inputs
}

/// Remove a Markdown code fence around the response, if there is one
fn strip_code_fence(response: &str) -> String {
    let trimmed = response.trim();
    if !trimmed.starts_with("```") {
        return trimmed.to_string();
    }

    let lines: Vec<&str> = trimmed.lines().collect();
    if lines.len() < 2 {
        return String::new();
    }

    // Skip the opening fence (``` or ```json) and a closing fence if present
    let end = if lines[lines.len() - 1].trim() == "```" {
        lines.len() - 1
    } else {
        lines.len()
    };
    lines[1..end].join("\n")
}
