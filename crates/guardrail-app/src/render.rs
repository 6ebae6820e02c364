//! Render use cases: console summary and Markdown from decision records.

use anyhow::Context;
use guardrail_domain::report::DecisionCounts;
use guardrail_render::{RenderableBatch, RenderableCounts, RenderableRow};
use guardrail_types::{DecisionRecord, OutputDocument};

/// Parse a previously written output document.
pub fn parse_output_json(text: &str) -> anyhow::Result<OutputDocument> {
    serde_json::from_str(text).context("parse output document")
}

pub fn to_renderable(records: &[DecisionRecord], output_path: Option<String>) -> RenderableBatch {
    let counts = DecisionCounts::from_records(records);
    RenderableBatch {
        rows: records
            .iter()
            .map(|r| RenderableRow {
                id: r.id.clone(),
                decision: r.decision,
                applied_policies: r.applied_policies.clone(),
                reason: r.reason.clone(),
                final_output: r.final_output.clone(),
            })
            .collect(),
        counts: RenderableCounts {
            allow: counts.allow,
            sanitize: counts.sanitize,
            escalate: counts.escalate,
            block: counts.block,
            defaulted: counts.defaulted,
        },
        output_path,
    }
}

pub fn run_markdown(batch: &RenderableBatch) -> String {
    guardrail_render::render_markdown(batch)
}
