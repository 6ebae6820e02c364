use crate::RenderableBatch;
use guardrail_types::Action;

pub fn render_markdown(batch: &RenderableBatch) -> String {
    let mut out = String::new();

    out.push_str("# Guardrail report\n\n");
    out.push_str(&format!("- Inputs: {}\n", batch.rows.len()));
    for action in Action::ALL {
        out.push_str(&format!(
            "- {}: {}\n",
            capitalize(action.as_str()),
            batch.counts.get(action)
        ));
    }
    out.push_str(&format!(
        "- Decided by default action: {}\n\n",
        batch.counts.defaulted
    ));

    if batch.rows.is_empty() {
        out.push_str("No inputs.\n");
        return out;
    }

    out.push_str("## Decisions\n\n");

    for row in &batch.rows {
        out.push_str(&format!(
            "### `{}`: **{}**\n\n",
            row.id,
            row.decision.as_str().to_uppercase()
        ));

        if row.applied_policies.is_empty() {
            out.push_str("- Policies: none (default action)\n");
        } else {
            let ids: Vec<String> = row
                .applied_policies
                .iter()
                .map(|p| format!("`{}`", p))
                .collect();
            out.push_str(&format!("- Policies: {}\n", ids.join(", ")));
        }
        out.push_str(&format!("- Reason: {}\n", row.reason));
        out.push_str(&format!(
            "- Final output:\n\n{}\n\n",
            blockquote(&row.final_output)
        ));
    }

    out
}

/// Quote every line of `text`; an empty text is a single empty quote line.
fn blockquote(text: &str) -> String {
    if text.is_empty() {
        return ">".to_string();
    }
    text.lines()
        .map(|line| {
            if line.is_empty() {
                ">".to_string()
            } else {
                format!("> {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
