//! Bugseed Selector
//!
//! Reads the persisted extraction stream and picks the best-ranked test inputs
//! of each bug report for seeding test generators.
//!
//! Selection never modifies the stream: records are read, ranked in memory and
//! rendered.
//!
//! ```no_run
//! use bugseed_selector::{read_records_from_path, render_text, select_seeds, DEFAULT_TOP_K};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! for record in read_records_from_path("extracted_test_inputs.jsonl")? {
//!     print!("{}", render_text(&select_seeds(&record, DEFAULT_TOP_K)));
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod reader;
mod report;
mod select;

pub use error::{Result, SelectorError};
pub use reader::{read_records, read_records_from_path};
pub use report::{render_json, render_text, score_label};
pub use select::{select_seeds, select_top_k, SeedSet, SelectorConfig, DEFAULT_TOP_K};
