//! Bugseed Domain Layer
//!
//! This crate contains the data model shared by every stage of the bug-report
//! extraction pipeline and the two capability traits the pipeline depends on.
//! It carries no infrastructure: HTTP clients, CSV loading and file handling
//! live in other crates.
//!
//! ## Key Concepts
//!
//! - **Candidate**: a value pulled out of bug-report text, tagged with its kind
//!   and the stage that produced it
//! - **RefinedInput**: a candidate after the language model has ranked,
//!   deduplicated and annotated it
//! - **OutputRecord**: the persisted unit, one per bug report
//! - **BugReport**: one input row, an ordered list of (column, value) cells
//! - **Document**: the annotated parse of a text, produced by a linguistic parser
//!
//! ## Architecture
//!
//! - Pure data and pure functions only
//! - Trait definitions for the two external capabilities (model, parser)
//! - Implementations live in `bugseed-llm` and `bugseed-nlp`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bug_report;
pub mod candidate;
pub mod document;
pub mod message;
pub mod refined;
pub mod traits;

// Re-exports for convenience
pub use bug_report::BugReport;
pub use candidate::{Candidate, CandidateKind, CandidateSource, LiteralKind};
pub use document::{Document, Entity, Sentence, Token};
pub use message::{CompletionParams, Message, Role};
pub use refined::{OutputRecord, RefinedInput};
