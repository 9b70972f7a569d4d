//! LLM prompt engineering for test-input refinement

use crate::error::Result;
use crate::merge::candidates_json;
use bugseed_domain::{BugReport, Candidate, Message};

/// Persona for the system message
pub const SYSTEM_PROMPT: &str = "You are an expert software test engineer.";

/// Builds the two-message refinement conversation
pub struct PromptBuilder {
    summary: String,
    steps_to_reproduce: String,
    candidates: Vec<Candidate>,
}

impl PromptBuilder {
    /// Create a new prompt builder
    pub fn new(summary: impl Into<String>, steps_to_reproduce: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            steps_to_reproduce: steps_to_reproduce.into(),
            candidates: Vec::new(),
        }
    }

    /// Create a builder from a report's `Summary` and `Steps to Reproduce`
    pub fn for_report(report: &BugReport) -> Self {
        Self::new(report.summary(), report.steps_to_reproduce())
    }

    /// Add the merged candidate list
    pub fn with_candidates(mut self, candidates: Vec<Candidate>) -> Self {
        self.candidates = candidates;
        self
    }

    /// Build the system and user messages
    pub fn build(&self) -> Result<Vec<Message>> {
        Ok(vec![
            Message::system(SYSTEM_PROMPT),
            Message::user(self.user_content()?),
        ])
    }

    fn user_content(&self) -> Result<String> {
        let mut content = String::new();

        // 1. The report itself
        content.push('\n');
        content.push_str(&format!("Bug Summary: {}\n", self.summary));
        content.push_str("Steps to Reproduce:\n");
        content.push_str(&self.steps_to_reproduce);
        content.push_str("\n\n");

        // 2. Candidates from both extraction passes
        content.push_str("Candidate Inputs:\n");
        content.push_str(&candidates_json(&self.candidates)?);
        content.push_str("\n\n");

        // 3. Task and output contract
        content.push_str(REFINEMENT_INSTRUCTIONS);
        content.push('\n');

        Ok(content)
    }
}

/// Build the refinement prompt for one report
pub fn build_prompt(report: &BugReport, candidates: &[Candidate]) -> Result<Vec<Message>> {
    PromptBuilder::for_report(report)
        .with_candidates(candidates.to_vec())
        .build()
}

const REFINEMENT_INSTRUCTIONS: &str = r#"Task:
1. Reason step by step about which inputs are relevant.
2. Remove irrelevant or duplicate values.
3. Infer missing boundary values if implied.
4. Return a ranked list in strict JSON.

Output format:
[
  {
    "value": "...",
    "kind": "...",
    "rationale": "...",
    "relevance_score": 1-5
  }
]
Return JSON only."#;
