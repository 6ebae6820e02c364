//! Explain registry for actions.
//!
//! Maps action names to a human-readable description of what the guardrail does with the output.

use crate::Action;

/// Explanation entry for an action.
#[derive(Debug, Clone)]
pub struct Explanation {
    pub action: Action,
    /// Short description of the action.
    pub title: &'static str,
    /// When policies choose it and what it means downstream.
    pub description: &'static str,
    /// Text released in `final_output`.
    pub final_output: &'static str,
}

/// Look up an explanation by action name.
///
/// Returns `None` if the name is not part of the vocabulary.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    let action: Action = identifier.trim().parse().ok()?;
    Some(explain(action))
}

/// List all known action names, most restrictive first.
pub fn all_actions() -> &'static [&'static str] {
    &["block", "escalate", "sanitize", "allow"]
}

pub fn explain(action: Action) -> Explanation {
    match action {
        Action::Block => Explanation {
            action,
            title: "Block",
            description: "The output is withheld entirely. Block overrides every other action \
                          and is the fallback when no policy covers an input.",
            final_output: action.replacement_text().unwrap_or_default(),
        },
        Action::Escalate => Explanation {
            action,
            title: "Escalate",
            description: "The output is held back and routed to a human reviewer. Escalate \
                          overrides sanitize and allow.",
            final_output: action.replacement_text().unwrap_or_default(),
        },
        Action::Sanitize => Explanation {
            action,
            title: "Sanitize",
            description: "The output is replaced with a fixed safe fallback message. Sanitize \
                          overrides allow.",
            final_output: action.replacement_text().unwrap_or_default(),
        },
        Action::Allow => Explanation {
            action,
            title: "Allow",
            description: "The output is released unchanged. Allow is the least restrictive \
                          action and only wins when every applicable policy allows.",
            final_output: "(original output, unchanged)",
        },
    }
}
