//! Candidate module - values extracted from bug-report text before refinement

use serde::{Serialize, Serializer};
use std::fmt;

/// The fixed literal categories recognized by pattern matching
///
/// The declaration order is significant: literal candidates are emitted kind by
/// kind in the order of [`LiteralKind::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    /// Single- or double-quoted text
    String,
    /// Integer or decimal number
    Number,
    /// Identifier ending in `Exception`
    Exception,
    /// `HTTP` followed by a three-digit status code
    HttpStatus,
    /// POSIX or Windows filesystem path
    Path,
}

impl LiteralKind {
    /// Every literal kind, in emission order
    pub const ALL: [LiteralKind; 5] = [
        LiteralKind::String,
        LiteralKind::Number,
        LiteralKind::Exception,
        LiteralKind::HttpStatus,
        LiteralKind::Path,
    ];

    /// The string tag used in serialized candidates
    pub fn as_str(&self) -> &'static str {
        match self {
            LiteralKind::String => "string",
            LiteralKind::Number => "number",
            LiteralKind::Exception => "exception",
            LiteralKind::HttpStatus => "http_status",
            LiteralKind::Path => "path",
        }
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extraction category of a candidate
///
/// Serializes to a flat string tag: the literal kind name, `entity_<LABEL>`,
/// or `action`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CandidateKind {
    /// One of the fixed literal patterns
    Literal(LiteralKind),
    /// A named entity carrying the parser's label (e.g. `ORG`, `CARDINAL`)
    Entity(String),
    /// A verb followed by its objects
    Action,
}

impl fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateKind::Literal(kind) => f.write_str(kind.as_str()),
            CandidateKind::Entity(label) => write!(f, "entity_{}", label),
            CandidateKind::Action => f.write_str("action"),
        }
    }
}

impl Serialize for CandidateKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Stage that produced a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateSource {
    /// Pattern-based literal extraction
    Regex,
    /// Linguistic parsing
    Nlp,
}

/// A tagged value produced by extraction
///
/// Candidates are created fresh per bug report and only ever serialized into
/// the refinement prompt; they are never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// The raw extracted text
    pub value: String,

    /// Extraction category
    pub kind: CandidateKind,

    /// Producing stage
    pub source: CandidateSource,
}

impl Candidate {
    /// Create a candidate from a literal pattern match
    pub fn literal(value: impl Into<String>, kind: LiteralKind) -> Self {
        Self {
            value: value.into(),
            kind: CandidateKind::Literal(kind),
            source: CandidateSource::Regex,
        }
    }

    /// Create a candidate from a recognized entity
    pub fn entity(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: CandidateKind::Entity(label.into()),
            source: CandidateSource::Nlp,
        }
    }

    /// Create a candidate from a verb-object phrase
    pub fn action(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: CandidateKind::Action,
            source: CandidateSource::Nlp,
        }
    }
}
