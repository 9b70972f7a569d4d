//! Refined inputs and the persisted output record
//!
//! Both types are read from text written by a language model (or from a file
//! that text was copied into), so decoding never rejects an object for the
//! type of one of its fields: a `value` of `404` reads as `"404"`, `null` or a
//! missing key reads as `""`, an array reads as its compact JSON text, and a
//! score of `4.0` or `"4"` reads as `4`.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A candidate after language-model refinement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefinedInput {
    /// The test input value
    #[serde(default, deserialize_with = "lenient_text")]
    pub value: String,

    /// Category, possibly relabelled by the model
    #[serde(default, deserialize_with = "lenient_text")]
    pub kind: String,

    /// Why the model kept this value
    #[serde(default, deserialize_with = "lenient_text")]
    pub rationale: String,

    /// Relevance score, requested in [1, 5]
    #[serde(
        default,
        deserialize_with = "lenient_score",
        skip_serializing_if = "Option::is_none"
    )]
    pub relevance_score: Option<i64>,
}

impl RefinedInput {
    /// Create a refined input
    pub fn new(
        value: impl Into<String>,
        kind: impl Into<String>,
        rationale: impl Into<String>,
        relevance_score: Option<i64>,
    ) -> Self {
        Self {
            value: value.into(),
            kind: kind.into(),
            rationale: rationale.into(),
            relevance_score,
        }
    }

    /// Score used for ranking; a missing score ranks as 0
    pub fn rank_score(&self) -> i64 {
        self.relevance_score.unwrap_or(0)
    }
}

/// One persisted line of the output stream
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutputRecord {
    /// Identifier of the source bug report (empty if the row had none)
    #[serde(default, deserialize_with = "lenient_text")]
    pub bug_report_id: String,

    /// Refined inputs in the order the model returned them
    #[serde(default)]
    pub refined_test_inputs: Vec<RefinedInput>,
}

impl OutputRecord {
    /// Create an output record
    pub fn new(bug_report_id: impl Into<String>, refined_test_inputs: Vec<RefinedInput>) -> Self {
        Self {
            bug_report_id: bug_report_id.into(),
            refined_test_inputs,
        }
    }
}

/// Interpret a JSON value as a relevance score
///
/// Integers are taken as-is, finite floats are rounded, numeric strings are
/// parsed. Everything else has no score.
pub fn score_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.round() as i64)),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed.parse::<i64>().ok().or_else(|| {
                trimmed
                    .parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(|f| f.round() as i64)
            })
        }
        _ => None,
    }
}

fn lenient_score<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(score_from_value))
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}
