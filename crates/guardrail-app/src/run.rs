//! The `run` use case: load sources, evaluate every input, write the decision document.

use camino::Utf8PathBuf;
use guardrail_domain::model::{InputItem, PolicySet};
use guardrail_domain::report::DomainReport;
use guardrail_domain::{evaluate, evaluate_item};
use guardrail_types::{Action, DecisionRecord};
use rayon::prelude::*;

use crate::load::{load_inputs, load_policies};
use crate::render::{run_markdown, to_renderable};
use crate::sink::{write_output, write_text};

pub const DEFAULT_POLICIES_PATH: &str = "policies.json";
pub const DEFAULT_INPUTS_PATH: &str = "inputs.json";
pub const DEFAULT_OUTPUT_PATH: &str = "output.json";

/// Resolved run configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub policies_path: Utf8PathBuf,
    pub inputs_path: Utf8PathBuf,
    pub output_path: Utf8PathBuf,
    /// Also render the batch as Markdown to this path.
    pub markdown_path: Option<Utf8PathBuf>,
    /// Evaluate inputs on the rayon pool. Output order is unchanged.
    pub parallel: bool,
    /// Decisions at least this restrictive make the run fail.
    pub fail_on: Option<Action>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            policies_path: Utf8PathBuf::from(DEFAULT_POLICIES_PATH),
            inputs_path: Utf8PathBuf::from(DEFAULT_INPUTS_PATH),
            output_path: Utf8PathBuf::from(DEFAULT_OUTPUT_PATH),
            markdown_path: None,
            parallel: false,
            fail_on: None,
        }
    }
}

/// Output from the run use case.
#[derive(Clone, Debug)]
pub struct RunOutput {
    pub report: DomainReport,
    pub policies_loaded: usize,
    pub inputs_loaded: usize,
    /// False when the decision document could not be written.
    pub output_written: bool,
    pub exit_code: i32,
}

/// Run the whole pipeline.
///
/// Malformed or missing sources and sink failures are logged, never returned: the decisions are
/// always available in the result.
pub fn run_engine(config: &RunConfig) -> RunOutput {
    tracing::info!(
        policies = %config.policies_path,
        inputs = %config.inputs_path,
        output = %config.output_path,
        parallel = config.parallel,
        "guardrail run starting"
    );

    let policy_set = load_policies(&config.policies_path);
    let inputs = load_inputs(&config.inputs_path);

    let report = evaluate_batch(&inputs, &policy_set, config.parallel);
    for record in &report.records {
        log_decision(record);
    }

    let output_written = match write_output(&config.output_path, &report.records) {
        Ok(()) => {
            tracing::info!(path = %config.output_path, records = report.records.len(), "wrote output document");
            true
        }
        Err(e) => {
            let error = format!("{e:#}");
            tracing::error!(path = %config.output_path, %error, "failed to write output document");
            false
        }
    };

    if let Some(md_path) = &config.markdown_path {
        let output_path = output_written.then(|| config.output_path.to_string());
        let markdown = run_markdown(&to_renderable(&report.records, output_path));
        if let Err(e) = write_text(md_path, &markdown) {
            let error = format!("{e:#}");
            tracing::error!(path = %md_path, %error, "failed to write markdown report");
        }
    }

    tracing::info!(
        total = report.records.len(),
        block = report.counts.block,
        escalate = report.counts.escalate,
        sanitize = report.counts.sanitize,
        allow = report.counts.allow,
        defaulted = report.counts.defaulted,
        "guardrail run finished"
    );

    let exit_code = decision_exit_code(&report, config.fail_on);
    RunOutput {
        policies_loaded: policy_set.policies.len(),
        inputs_loaded: inputs.len(),
        report,
        output_written,
        exit_code,
    }
}

/// Map a batch to a process exit code.
///
/// 2 when `fail_on` is set and some decision is at least as restrictive; 0 otherwise.
pub fn decision_exit_code(report: &DomainReport, fail_on: Option<Action>) -> i32 {
    match fail_on {
        Some(threshold) if report.any_at_least(threshold) => 2,
        _ => 0,
    }
}

fn evaluate_batch(inputs: &[InputItem], policy_set: &PolicySet, parallel: bool) -> DomainReport {
    if !parallel {
        return evaluate(inputs, policy_set);
    }
    let records: Vec<DecisionRecord> = inputs
        .par_iter()
        .map(|input| evaluate_item(input, policy_set))
        .collect();
    DomainReport::from_records(records)
}

fn log_decision(record: &DecisionRecord) {
    tracing::debug!(
        id = %record.id,
        matched = record.rule_trace.len(),
        applied = record.applied_policies.len(),
        "evaluated input"
    );
    tracing::info!(
        id = %record.id,
        decision = %record.decision,
        reason = %record.reason,
        "decision"
    );
}
