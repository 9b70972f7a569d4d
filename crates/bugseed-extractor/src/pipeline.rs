//! Pipeline driver: one output record per bug report

use crate::config::ExtractorConfig;
use crate::error::{ExtractorError, Result};
use crate::linguistic::extract_nlp_candidates;
use crate::literals::LiteralMatcher;
use crate::merge::merge_candidates;
use crate::prompt::build_prompt;
use crate::refiner::Refiner;
use crate::sink::JsonlSink;
use bugseed_domain::traits::{LinguisticParser, LlmProvider};
use bugseed_domain::{BugReport, Candidate, OutputRecord};
use std::fmt::Display;
use std::io::Write;
use tracing::{debug, info};

/// Totals for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Rows processed
    pub rows: usize,
    /// Candidates sent to the model across all rows
    pub candidates: usize,
    /// Refined inputs persisted across all rows
    pub refined_inputs: usize,
    /// Records persisted with no refined inputs
    pub empty_records: usize,
}

/// Runs literal matching, linguistic extraction, prompting and refinement for
/// each bug report
pub struct Pipeline<L, P> {
    matcher: LiteralMatcher,
    parser: P,
    refiner: Refiner<L>,
}

impl<L, P> Pipeline<L, P>
where
    L: LlmProvider,
    L::Error: Display,
    P: LinguisticParser,
    P::Error: Display,
{
    /// Create a new Pipeline
    pub fn new(llm: L, parser: P, config: &ExtractorConfig) -> Result<Self> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self {
            matcher: LiteralMatcher::new()?,
            parser,
            refiner: Refiner::new(llm, config),
        })
    }

    /// Merged literal and linguistic candidates for `text`
    pub fn candidates(&self, text: &str) -> Result<Vec<Candidate>> {
        let literal = self.matcher.extract_literals(text);
        let linguistic = extract_nlp_candidates(text, &self.parser)?;
        debug!(
            literal = literal.len(),
            linguistic = linguistic.len(),
            "extracted candidates"
        );
        Ok(merge_candidates(literal, linguistic))
    }

    /// Process one bug report into its output record
    pub fn process(&self, report: &BugReport) -> Result<OutputRecord> {
        Ok(self.process_counted(report)?.0)
    }

    /// Process every report in order, appending one line per report
    pub fn run<'a, I, W>(&self, reports: I, sink: &mut JsonlSink<W>) -> Result<RunSummary>
    where
        I: IntoIterator<Item = &'a BugReport>,
        W: Write,
    {
        let mut summary = RunSummary::default();

        for report in reports {
            let (record, candidates) = self.process_counted(report)?;
            sink.append(&record)?;

            summary.rows += 1;
            summary.candidates += candidates;
            summary.refined_inputs += record.refined_test_inputs.len();
            if record.refined_test_inputs.is_empty() {
                summary.empty_records += 1;
            }

            info!(
                "Processed bug report '{}': {} candidates, {} refined inputs",
                record.bug_report_id,
                candidates,
                record.refined_test_inputs.len()
            );
        }

        info!(
            "Run complete: {} rows, {} candidates, {} refined inputs, {} empty records",
            summary.rows, summary.candidates, summary.refined_inputs, summary.empty_records
        );

        Ok(summary)
    }

    fn process_counted(&self, report: &BugReport) -> Result<(OutputRecord, usize)> {
        let text = report.flatten();
        let candidates = self.candidates(&text)?;
        let messages = build_prompt(report, &candidates)?;

        debug!(
            "Prompt length: {} chars",
            messages.iter().map(|m| m.content.len()).sum::<usize>()
        );

        let refined = self.refiner.refine_with_llm(&messages)?;
        Ok((OutputRecord::new(report.id(), refined), candidates.len()))
    }
}
