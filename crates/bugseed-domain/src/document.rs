//! Annotated document produced by a linguistic parser
//!
//! Token indices are positions in [`Document::tokens`]. Spans are half-open
//! (`start..end`). A root token is its own head.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Part-of-speech tag for verbs
pub const POS_VERB: &str = "VERB";

/// Dependency label for a direct object
pub const DEP_DIRECT_OBJECT: &str = "dobj";

/// Dependency label for the object of a preposition
pub const DEP_PREPOSITIONAL_OBJECT: &str = "pobj";

/// A single token with its annotations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text
    pub text: String,
    /// Base form
    pub lemma: String,
    /// Coarse part-of-speech tag (e.g. `VERB`, `NOUN`)
    pub pos: String,
    /// Dependency relation to the head (e.g. `dobj`, `pobj`)
    pub dep: String,
    /// Index of the syntactic head
    pub head: usize,
}

/// A named-entity span
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Entity text as it appears in the document
    pub text: String,
    /// Entity label (e.g. `ORG`, `CARDINAL`)
    pub label: String,
    /// First token of the span
    pub start: usize,
    /// One past the last token of the span
    pub end: usize,
}

/// A sentence span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// First token of the sentence
    pub start: usize,
    /// One past the last token
    pub end: usize,
}

/// Parsed text: tokens, sentence boundaries and entities
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Document {
    /// Tokens in document order
    #[serde(default)]
    pub tokens: Vec<Token>,
    /// Sentence boundaries in document order
    #[serde(default)]
    pub sentences: Vec<Sentence>,
    /// Entities in document order
    #[serde(default)]
    pub entities: Vec<Entity>,
}

impl Document {
    /// Token ranges of each sentence
    ///
    /// A document without sentence boundaries is one sentence.
    pub fn sentence_spans(&self) -> Vec<Range<usize>> {
        if self.sentences.is_empty() {
            if self.tokens.is_empty() {
                return Vec::new();
            }
            return vec![0..self.tokens.len()];
        }
        self.sentences.iter().map(|s| s.start..s.end).collect()
    }

    /// Syntactic children of the token at `index`, in document order
    pub fn children(&self, index: usize) -> impl Iterator<Item = &Token> + '_ {
        self.tokens
            .iter()
            .enumerate()
            .filter(move |(i, t)| t.head == index && *i != index)
            .map(|(_, t)| t)
    }

    /// Check that every head and span points inside the token list
    pub fn validate(&self) -> Result<(), String> {
        let len = self.tokens.len();
        for (i, token) in self.tokens.iter().enumerate() {
            if token.head >= len {
                return Err(format!(
                    "token {} ('{}') has head {} outside {} tokens",
                    i, token.text, token.head, len
                ));
            }
        }
        for sentence in &self.sentences {
            if sentence.start > sentence.end || sentence.end > len {
                return Err(format!(
                    "sentence {}..{} outside {} tokens",
                    sentence.start, sentence.end, len
                ));
            }
        }
        for entity in &self.entities {
            if entity.start > entity.end || entity.end > len {
                return Err(format!(
                    "entity '{}' span {}..{} outside {} tokens",
                    entity.text, entity.start, entity.end, len
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(text: &str, pos: &str, dep: &str, head: usize) -> Token {
        Token {
            text: text.to_string(),
            lemma: text.to_lowercase(),
            pos: pos.to_string(),
            dep: dep.to_string(),
            head,
        }
    }

    #[test]
    fn test_children_in_document_order() {
        let doc = Document {
            tokens: vec![
                token("Users", "NOUN", "nsubj", 1),
                token("open", "VERB", "ROOT", 1),
                token("files", "NOUN", "dobj", 1),
            ],
            ..Default::default()
        };
        let children: Vec<_> = doc.children(1).map(|t| t.text.as_str()).collect();
        assert_eq!(children, ["Users", "files"]);
        assert_eq!(doc.children(0).count(), 0);
    }

    #[test]
    fn test_missing_sentences_cover_whole_document() {
        let doc = Document {
            tokens: vec![token("Crash", "NOUN", "ROOT", 0)],
            ..Default::default()
        };
        assert_eq!(doc.sentence_spans(), vec![0..1]);
        assert!(Document::default().sentence_spans().is_empty());
    }

    #[test]
    fn test_validate_rejects_bad_head() {
        let doc = Document {
            tokens: vec![token("Crash", "NOUN", "ROOT", 3)],
            ..Default::default()
        };
        assert!(doc.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_entity_span() {
        let doc = Document {
            tokens: vec![token("Acme", "PROPN", "ROOT", 0)],
            entities: vec![Entity {
                text: "Acme".to_string(),
                label: "ORG".to_string(),
                start: 0,
                end: 2,
            }],
            ..Default::default()
        };
        assert!(doc.validate().is_err());
    }

    #[test]
    fn test_decode_with_missing_sections() {
        let doc: Document = serde_json::from_str(r#"{"tokens": []}"#).unwrap();
        assert!(doc.entities.is_empty());
        assert!(doc.validate().is_ok());
    }
}
