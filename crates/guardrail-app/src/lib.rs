//! Use case orchestration for guardrail.
//!
//! This crate provides the application layer: it reads sources from disk, runs the pure domain
//! pipeline, and writes the output document. Malformed data never surfaces as an error here; it
//! is logged through `tracing` and degraded to documented defaults.
//!
//! The CLI crate depends on this; it only handles argument parsing and process concerns.

#![forbid(unsafe_code)]

mod explain;
mod load;
mod render;
mod run;
mod sink;

pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use load::{load_inputs, load_policies};
pub use render::{parse_output_json, run_markdown, to_renderable};
pub use run::{
    DEFAULT_INPUTS_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_POLICIES_PATH, RunConfig, RunOutput,
    decision_exit_code, run_engine,
};
pub use sink::{serialize_output, write_output, write_text};
