use crate::RenderableBatch;
use guardrail_types::Action;

const MIN_ID_WIDTH: usize = 6;
const DECISION_WIDTH: usize = 10;
const RULE_WIDTH: usize = 65;
const DEFAULT_MARKER: &str = "(default)";

/// Render the console summary printed after a run: one line per input with its decision and the
/// policies that applied, followed by totals.
pub fn render_summary_table(batch: &RenderableBatch) -> String {
    let id_width = batch
        .rows
        .iter()
        .map(|r| r.id.chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_ID_WIDTH);
    let rule = "─".repeat(RULE_WIDTH);

    let mut out = String::new();
    out.push_str("\n── Guardrail Summary ");
    out.push_str(&"─".repeat(RULE_WIDTH - 21));
    out.push('\n');
    out.push_str(&format!(
        "{:<w$} {:<d$} {}\n",
        "ID",
        "DECISION",
        "POLICIES",
        w = id_width,
        d = DECISION_WIDTH
    ));
    out.push_str(&rule);
    out.push('\n');

    for row in &batch.rows {
        let policies = if row.applied_policies.is_empty() {
            DEFAULT_MARKER.to_string()
        } else {
            row.applied_policies.join(", ")
        };
        out.push_str(&format!(
            "{:<w$} {:<d$} {}\n",
            row.id,
            row.decision.as_str(),
            policies,
            w = id_width,
            d = DECISION_WIDTH
        ));
    }

    out.push_str(&rule);
    out.push('\n');

    let per_action: Vec<String> = Action::ALL
        .iter()
        .map(|a| format!("{}={}", a, batch.counts.get(*a)))
        .collect();
    out.push_str(&format!(
        "Decisions: {} ({} by default)\n",
        per_action.join(" "),
        batch.counts.defaulted
    ));
    out.push_str(&format!("Total processed: {} inputs\n", batch.rows.len()));
    match &batch.output_path {
        Some(path) => out.push_str(&format!("Output written to: {}\n", path)),
        None => out.push_str("Output was not written; see the log for details.\n"),
    }

    out
}
