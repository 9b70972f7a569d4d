//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use bugseed_domain::traits::{LinguisticParser, LlmProvider};
use bugseed_domain::BugReport;
use bugseed_extractor::{read_bug_reports_from_path, ExtractorConfig, JsonlSink, Pipeline, RunSummary};
use bugseed_llm::{LlmError, OpenAiConfig, OpenAiProvider};
use bugseed_nlp::{HttpParser, NullParser};
use std::fmt::Display;
use std::path::Path;
use tracing::{info, warn};

/// Execute the extract command.
///
/// The credential is resolved before anything is read or written, so a
/// missing key leaves the output file untouched.
pub fn execute_extract(
    args: ExtractArgs,
    config: &AppConfig,
    formatter: &Formatter,
) -> Result<RunSummary> {
    let input = args.input.unwrap_or_else(|| config.pipeline.input.clone());
    let output = args.output.unwrap_or_else(|| config.pipeline.output.clone());
    let model = args.model.unwrap_or_else(|| config.llm.model.clone());

    let openai_config = resolve_credential(&model, &config.llm.api_key_env)?
        .with_endpoint(config.llm.endpoint.clone())
        .with_timeout_secs(config.llm.timeout_secs);

    let reports = read_bug_reports_from_path(&input)?;
    info!("Loaded {} bug reports from {}", reports.len(), input.display());

    let llm = OpenAiProvider::new(openai_config)?;

    let summary = match &config.parser {
        Some(parser_config) => {
            let parser = HttpParser::new(parser_config.clone())?;
            run_extraction(llm, parser, &config.extractor, &reports, &output)?
        }
        None => {
            warn!("No parser configured, extracting literal candidates only");
            run_extraction(llm, NullParser, &config.extractor, &reports, &output)?
        }
    };

    println!("{}", formatter.extraction_complete(&output));
    Ok(summary)
}

/// Read the API key for `model` from `env_var`.
pub fn resolve_credential(model: &str, env_var: &str) -> Result<OpenAiConfig> {
    OpenAiConfig::from_env(model, env_var).map_err(|e| match e {
        LlmError::MissingCredential(var) => CliError::MissingCredential(var),
        other => CliError::Llm(other),
    })
}

/// Run the pipeline over `reports`, truncating `output` first.
pub fn run_extraction<L, P>(
    llm: L,
    parser: P,
    extractor_config: &ExtractorConfig,
    reports: &[BugReport],
    output: &Path,
) -> Result<RunSummary>
where
    L: LlmProvider,
    L::Error: Display,
    P: LinguisticParser,
    P::Error: Display,
{
    let pipeline = Pipeline::new(llm, parser, extractor_config)?;
    let mut sink = JsonlSink::create(output)?;
    Ok(pipeline.run(reports, &mut sink)?)
}
