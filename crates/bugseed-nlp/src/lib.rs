//! Bugseed Linguistic Parser Layer
//!
//! Implementations of the `LinguisticParser` trait from `bugseed-domain`.
//!
//! # Parsers
//!
//! - `StaticParser`: golden documents for deterministic tests
//! - `NullParser`: returns empty documents, disabling the linguistic pass
//! - `HttpParser`: posts text to a parse service that answers with the
//!   `Document` JSON (tokens with lemma/POS/dependency, sentences, entities)
//!
//! # Examples
//!
//! ```
//! use bugseed_nlp::StaticParser;
//! use bugseed_domain::traits::LinguisticParser;
//! use bugseed_domain::Document;
//!
//! let parser = StaticParser::default();
//! assert_eq!(parser.parse("anything").unwrap(), Document::default());
//! ```

#![warn(missing_docs)]

pub mod http;

use bugseed_domain::traits::LinguisticParser;
use bugseed_domain::Document;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

pub use http::{HttpParser, HttpParserConfig};

/// Errors that can occur during parsing
#[derive(Error, Debug)]
pub enum NlpError {
    /// Network or service communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// The service answered with something that is not a usable document
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// Invalid parser configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Parser returning pre-built documents
///
/// Documents can be registered per input text; anything else gets the default
/// document. Clones share their registry and call counter.
#[derive(Debug, Clone, Default)]
pub struct StaticParser {
    default_document: Document,
    documents: Arc<Mutex<HashMap<String, Document>>>,
    calls: Arc<Mutex<usize>>,
}

impl StaticParser {
    /// Create a parser that returns `document` for every text
    pub fn new(document: Document) -> Self {
        Self {
            default_document: document,
            ..Default::default()
        }
    }

    /// Register the document returned for an exact input text
    pub fn add_document(&mut self, text: impl Into<String>, document: Document) {
        lock(&self.documents).insert(text.into(), document);
    }

    /// Number of parse calls so far
    pub fn call_count(&self) -> usize {
        *lock(&self.calls)
    }
}

impl LinguisticParser for StaticParser {
    type Error = NlpError;

    fn parse(&self, text: &str) -> Result<Document, Self::Error> {
        *lock(&self.calls) += 1;
        let document = lock(&self.documents)
            .get(text)
            .cloned()
            .unwrap_or_else(|| self.default_document.clone());
        document.validate().map_err(NlpError::InvalidDocument)?;
        Ok(document)
    }
}

/// Parser that recognizes nothing
///
/// Used when no parse service is configured: the pipeline still runs, with
/// literal candidates only.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullParser;

impl LinguisticParser for NullParser {
    type Error = NlpError;

    fn parse(&self, _text: &str) -> Result<Document, Self::Error> {
        Ok(Document::default())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
