//! Entity and action extraction from a parsed document

use crate::error::{ExtractorError, Result};
use bugseed_domain::document::{DEP_DIRECT_OBJECT, DEP_PREPOSITIONAL_OBJECT, POS_VERB};
use bugseed_domain::traits::LinguisticParser;
use bugseed_domain::{Candidate, Document};
use std::fmt::Display;

/// Parse `text` once and emit entity candidates followed by action candidates
///
/// Entities come first, across the whole document. Actions follow sentence by
/// sentence: every verb with at least one direct or prepositional object
/// yields `"<lemma> <objects...>"`.
pub fn extract_nlp_candidates<P>(text: &str, parser: &P) -> Result<Vec<Candidate>>
where
    P: LinguisticParser,
    P::Error: Display,
{
    let document = parser
        .parse(text)
        .map_err(|e| ExtractorError::Parser(e.to_string()))?;
    document.validate().map_err(ExtractorError::Parser)?;

    let mut candidates = entity_candidates(&document);
    candidates.extend(action_candidates(&document));
    Ok(candidates)
}

fn entity_candidates(document: &Document) -> Vec<Candidate> {
    document
        .entities
        .iter()
        .map(|entity| Candidate::entity(entity.text.clone(), entity.label.clone()))
        .collect()
}

fn action_candidates(document: &Document) -> Vec<Candidate> {
    let mut actions = Vec::new();
    for span in document.sentence_spans() {
        for index in span {
            let token = &document.tokens[index];
            if token.pos != POS_VERB {
                continue;
            }
            let objects: Vec<&str> = document
                .children(index)
                .filter(|child| child.dep == DEP_DIRECT_OBJECT || child.dep == DEP_PREPOSITIONAL_OBJECT)
                .map(|child| child.text.as_str())
                .collect();
            if !objects.is_empty() {
                actions.push(Candidate::action(format!(
                    "{} {}",
                    token.lemma,
                    objects.join(" ")
                )));
            }
        }
    }
    actions
}
