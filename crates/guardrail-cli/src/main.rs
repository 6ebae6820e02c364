//! CLI entry point for guardrail.
//!
//! This module is intentionally thin: it handles argument parsing, logging setup, and exit codes.
//! All business logic lives in the `guardrail-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use guardrail_app::{
    DEFAULT_INPUTS_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_POLICIES_PATH, ExplainOutput, RunConfig,
    parse_output_json, run_engine, run_explain, run_markdown, to_renderable, write_text,
};
use guardrail_types::Action;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "guardrail",
    version,
    about = "Policy-driven guardrail decisions for AI-generated outputs",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Commands>,

    #[command(flatten)]
    run: RunArgs,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate inputs against policies and write the decision document (default).
    Run(RunArgs),

    /// Render Markdown from an existing output document.
    Md {
        /// Path to the JSON output document.
        #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
        report: Utf8PathBuf,

        /// Where to write the Markdown (if not specified, prints to stdout).
        #[arg(long)]
        output_file: Option<Utf8PathBuf>,
    },

    /// Explain an action: its rank and the text it releases.
    Explain {
        /// Action name (block, escalate, sanitize, allow).
        action: String,
    },
}

#[derive(Args, Debug, Clone)]
struct RunArgs {
    /// Path to the policy source.
    #[arg(long, default_value = DEFAULT_POLICIES_PATH)]
    policies: Utf8PathBuf,

    /// Path to the input source.
    #[arg(long, default_value = DEFAULT_INPUTS_PATH)]
    inputs: Utf8PathBuf,

    /// Where to write the JSON decision document.
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    output: Utf8PathBuf,

    /// Also write a Markdown report to this path.
    #[arg(long)]
    markdown_out: Option<Utf8PathBuf>,

    /// Evaluate inputs in parallel.
    #[arg(long)]
    parallel: bool,

    /// Exit with code 2 if any decision is at least this restrictive.
    #[arg(long, value_name = "ACTION")]
    fail_on: Option<Action>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

impl From<RunArgs> for RunConfig {
    fn from(args: RunArgs) -> Self {
        RunConfig {
            policies_path: args.policies,
            inputs_path: args.inputs,
            output_path: args.output,
            markdown_path: args.markdown_out,
            parallel: args.parallel,
            fail_on: args.fail_on,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Some(Commands::Run(args)) => cmd_run(args),
        None => cmd_run(cli.run),
        Some(Commands::Md {
            report,
            output_file,
        }) => cmd_md(report, output_file),
        Some(Commands::Explain { action }) => cmd_explain(&action),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("guardrail_app=debug,info")
    } else {
        EnvFilter::try_from_env("GUARDRAIL_LOG")
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    init_tracing(args.verbose);

    let config = RunConfig::from(args);
    let output = run_engine(&config);

    let written = output
        .output_written
        .then(|| config.output_path.to_string());
    let batch = to_renderable(&output.report.records, written);
    print!("{}", guardrail_render::render_summary_table(&batch));

    if output.exit_code != 0 {
        std::process::exit(output.exit_code);
    }
    Ok(())
}

fn cmd_md(report_path: Utf8PathBuf, output_file: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    init_tracing(false);

    let text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read output document: {}", report_path))?;
    let records = parse_output_json(&text)?;
    let md = run_markdown(&to_renderable(&records, Some(report_path.to_string())));

    if let Some(out_path) = output_file {
        write_text(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_explain(action: &str) -> anyhow::Result<()> {
    match run_explain(action) {
        ExplainOutput::Found(exp) => {
            print!("{}", guardrail_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_actions,
        } => {
            eprint!(
                "{}",
                guardrail_app::format_not_found(&identifier, available_actions)
            );
            std::process::exit(1);
        }
    }
}
