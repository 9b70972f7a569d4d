//! Bugseed Extractor
//!
//! Turns bug reports into ranked test-input seeds with a language model.
//!
//! # Overview
//!
//! Each bug report row is flattened into one text, scanned for literal values
//! and parsed for entities and actions. The merged candidates are embedded in a
//! prompt and the model returns a refined, ranked list. One output record is
//! written per row, in input order.
//!
//! # Architecture
//!
//! ```text
//! CSV row → flatten → {literals, entities/actions} → prompt → LLM → RefinedInput[] → JSONL
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use bugseed_extractor::{read_bug_reports_from_path, ExtractorConfig, JsonlSink, Pipeline};
//! use bugseed_llm::MockProvider;
//! use bugseed_nlp::NullParser;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let reports = read_bug_reports_from_path("data/sample_bug_reports.csv")?;
//! let pipeline = Pipeline::new(MockProvider::default(), NullParser, &ExtractorConfig::default())?;
//! let mut sink = JsonlSink::create("extracted_test_inputs.jsonl")?;
//!
//! let summary = pipeline.run(&reports, &mut sink)?;
//! println!("Processed {} rows", summary.rows);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod linguistic;
mod literals;
mod merge;
mod pipeline;
mod prompt;
mod refiner;
mod response;
mod sink;
mod source;

#[cfg(test)]
mod tests;

pub use config::{ExtractorConfig, DEFAULT_MAX_COMPLETION_TOKENS, DEFAULT_TEMPERATURE};
pub use error::{ExtractorError, Result};
pub use linguistic::extract_nlp_candidates;
pub use literals::LiteralMatcher;
pub use merge::{candidates_json, merge_candidates};
pub use pipeline::{Pipeline, RunSummary};
pub use prompt::{build_prompt, PromptBuilder, SYSTEM_PROMPT};
pub use refiner::Refiner;
pub use response::{parse_refinement, RefinementOutcome, MAX_RELEVANCE_SCORE, MIN_RELEVANCE_SCORE};
pub use sink::JsonlSink;
pub use source::{read_bug_reports, read_bug_reports_from_path};
