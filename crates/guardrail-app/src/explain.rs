//! The `explain` use case: describe an action from the vocabulary.

use guardrail_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found(Explanation),
    /// Unknown name; includes the action vocabulary.
    NotFound {
        identifier: String,
        available_actions: &'static [&'static str],
    },
}

pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_actions: explain::all_actions(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str(&format!(
        "Restrictiveness: {} of {} (0 is most restrictive)\n",
        exp.action.restrictiveness(),
        explain::all_actions().len() - 1
    ));
    out.push_str(&format!("Final output: {}\n", exp.final_output));

    out
}

pub fn format_not_found(identifier: &str, actions: &[&'static str]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown action: {}\n\n", identifier));
    out.push_str("Available actions (most restrictive first):\n");
    for action in actions {
        out.push_str(&format!("  - {}\n", action));
    }

    out
}
