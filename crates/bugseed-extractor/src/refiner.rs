//! Refinement client: one model call per bug report

use crate::config::ExtractorConfig;
use crate::error::{ExtractorError, Result};
use crate::response::{parse_refinement, RefinementOutcome};
use bugseed_domain::traits::LlmProvider;
use bugseed_domain::{CompletionParams, Message, RefinedInput};
use std::fmt::Display;
use tracing::{debug, warn};

/// Sends refinement prompts to the model and reads back refined inputs
pub struct Refiner<L> {
    llm: L,
    params: CompletionParams,
    unwrap_code_fences: bool,
}

impl<L> Refiner<L>
where
    L: LlmProvider,
    L::Error: Display,
{
    /// Create a new Refiner
    pub fn new(llm: L, config: &ExtractorConfig) -> Self {
        Self {
            llm,
            params: config.completion_params(),
            unwrap_code_fences: config.unwrap_code_fences,
        }
    }

    /// Decoding parameters sent with every request
    pub fn params(&self) -> &CompletionParams {
        &self.params
    }

    /// Call the model once and report whether the response parsed
    ///
    /// Provider failures are errors; an unusable response is an
    /// [`RefinementOutcome::Unparseable`] value.
    pub fn refine_outcome(&self, messages: &[Message]) -> Result<RefinementOutcome> {
        let response = self
            .llm
            .complete(messages, &self.params)
            .map_err(|e| ExtractorError::Llm(e.to_string()))?;

        debug!("LLM response length: {} chars", response.len());

        Ok(parse_refinement(&response, self.unwrap_code_fences))
    }

    /// Call the model once and return its refined inputs
    ///
    /// An unusable response yields an empty list and a warning.
    pub fn refine_with_llm(&self, messages: &[Message]) -> Result<Vec<RefinedInput>> {
        match self.refine_outcome(messages)? {
            RefinementOutcome::Refined(inputs) => Ok(inputs),
            RefinementOutcome::Unparseable {
                reason,
                response_len,
            } => {
                warn!(
                    %reason,
                    response_len,
                    "LLM response is not a refined-input list, recording no inputs"
                );
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bugseed_llm::MockProvider;

    fn messages() -> Vec<Message> {
        vec![Message::system("sys"), Message::user("refine this")]
    }

    #[test]
    fn test_refine_parses_list() {
        let llm = MockProvider::new(r#"[{"value": "a", "kind": "string", "rationale": "r", "relevance_score": 2}]"#);
        let refiner = Refiner::new(llm, &ExtractorConfig::default());

        let inputs = refiner.refine_with_llm(&messages()).unwrap();
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].kind, "string");
    }

    #[test]
    fn test_non_json_yields_empty_list() {
        let llm = MockProvider::new("not json");
        let refiner = Refiner::new(llm.clone(), &ExtractorConfig::default());

        let inputs = refiner.refine_with_llm(&messages()).unwrap();
        assert!(inputs.is_empty());
        assert_eq!(llm.call_count(), 1);
    }

    #[test]
    fn test_outcome_carries_reason() {
        let refiner = Refiner::new(MockProvider::new("nope"), &ExtractorConfig::default());
        let outcome = refiner.refine_outcome(&messages()).unwrap();
        match outcome {
            RefinementOutcome::Unparseable { reason, .. } => assert!(!reason.is_empty()),
            other => panic!("expected Unparseable, got {:?}", other),
        }
    }

    #[test]
    fn test_provider_error_propagates() {
        let mut llm = MockProvider::default();
        llm.add_error("refine this");
        let refiner = Refiner::new(llm, &ExtractorConfig::default());

        let result = refiner.refine_with_llm(&messages());
        assert!(matches!(result, Err(ExtractorError::Llm(_))));
    }

    #[test]
    fn test_sends_configured_params() {
        let llm = MockProvider::default();
        let config = ExtractorConfig {
            temperature: 0.0,
            max_completion_tokens: 42,
            unwrap_code_fences: false,
        };
        let refiner = Refiner::new(llm.clone(), &config);
        refiner.refine_with_llm(&messages()).unwrap();

        let request = llm.last_request().unwrap();
        assert_eq!(request.params.temperature, 0.0);
        assert_eq!(request.params.max_completion_tokens, 42);
        assert_eq!(request.messages, messages());
    }
}
