//! Pattern-based literal extraction

use crate::error::Result;
use bugseed_domain::{Candidate, LiteralKind};
use regex::{Captures, Regex};

/// Literal patterns in emission order
///
/// When a pattern has several capture groups the first non-empty group is the
/// value; patterns without captures yield the whole match.
const LITERAL_PATTERNS: [(LiteralKind, &str); 5] = [
    (LiteralKind::String, r#""([^"]+)"|'([^']+)'"#),
    (LiteralKind::Number, r"\b\d+(?:\.\d+)?\b"),
    (LiteralKind::Exception, r"\b[A-Za-z0-9_]*Exception\b"),
    (LiteralKind::HttpStatus, r"\bHTTP\s*\d{3}\b"),
    (
        LiteralKind::Path,
        r"(/[A-Za-z0-9_\-./]+)|([A-Za-z]:\\[A-Za-z0-9_\-\\.]+)",
    ),
];

/// Scans text for quoted strings, numbers, exception names, HTTP statuses and
/// filesystem paths
///
/// Stateless once built; the same text always yields the same candidates.
#[derive(Debug, Clone)]
pub struct LiteralMatcher {
    patterns: Vec<(LiteralKind, Regex)>,
}

impl LiteralMatcher {
    /// Compile the literal patterns
    pub fn new() -> Result<Self> {
        let patterns = LITERAL_PATTERNS
            .iter()
            .map(|(kind, pattern)| Ok((*kind, Regex::new(pattern)?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Extract every literal match, kind by kind, each kind in text order
    ///
    /// Matches are not deduplicated: a number inside a path is reported both
    /// as a number and as part of the path.
    pub fn extract_literals(&self, text: &str) -> Vec<Candidate> {
        let mut candidates = Vec::new();
        for (kind, regex) in &self.patterns {
            for captures in regex.captures_iter(text) {
                candidates.push(Candidate::literal(match_value(&captures), *kind));
            }
        }
        candidates
    }
}

fn match_value<'t>(captures: &Captures<'t>) -> &'t str {
    captures
        .iter()
        .skip(1)
        .flatten()
        .map(|m| m.as_str())
        .find(|s| !s.is_empty())
        .or_else(|| captures.get(0).map(|m| m.as_str()))
        .unwrap_or_default()
}
