//! Conflict resolution across all matched policies of one input.
//!
//! Most restrictive wins: `block < escalate < sanitize < allow`. When no policy matched, or every
//! matched policy missed its threshold, the policy set's default action applies.

use crate::model::InputItem;
use guardrail_types::{Action, DecisionRecord, PolicyTrace};
use std::collections::BTreeSet;

const REASON_SEPARATOR: &str = " | ";

/// Build the decision record for one input from its policy traces.
///
/// `traces` must be in matched-policy order; that order is kept in `applied_policies` and
/// `rule_trace`.
pub fn resolve_decision(
    input: &InputItem,
    traces: &[PolicyTrace],
    default_action: Action,
) -> DecisionRecord {
    let mut applied_policies: Vec<String> = Vec::new();
    let mut candidate_actions: Vec<Action> = Vec::new();

    for trace in traces.iter().filter(|t| t.applies()) {
        applied_policies.push(trace.policy_id.clone());
        candidate_actions.extend(trace.effective_actions.iter().copied());
    }

    let (decision, reason) = match most_restrictive(&candidate_actions) {
        None if traces.is_empty() => (
            default_action,
            format!(
                "No policies found for risk type '{}'; default action '{}' applied.",
                input.risk, default_action
            ),
        ),
        None => (default_action, below_threshold_reason(traces, default_action)),
        Some(winner) => (winner, applied_reason(traces, &candidate_actions, winner)),
    };

    DecisionRecord {
        id: input.id.clone(),
        decision,
        applied_policies,
        rule_trace: traces.to_vec(),
        final_output: decision.final_output(&input.output),
        reason,
    }
}

/// The single most restrictive action, or `None` for an empty slice.
pub fn most_restrictive(actions: &[Action]) -> Option<Action> {
    actions.iter().copied().min_by_key(|a| a.restrictiveness())
}

fn below_threshold_reason(traces: &[PolicyTrace], default_action: Action) -> String {
    let failed: Vec<String> = traces
        .iter()
        .map(|t| {
            format!(
                "{} requires confidence >= {} (got {})",
                t.policy_id, t.confidence_required, t.confidence_given
            )
        })
        .collect();

    format!(
        "All matching policies failed confidence threshold: {}. Default action '{}' applied.",
        failed.join("; "),
        default_action
    )
}

fn applied_reason(traces: &[PolicyTrace], candidates: &[Action], winner: Action) -> String {
    let mut parts: Vec<String> = traces
        .iter()
        .filter(|t| t.applies())
        .map(|t| {
            format!(
                "Policy {}: confidence {} >= {} passed, actions={}",
                t.policy_id,
                t.confidence_given,
                t.confidence_required,
                format_actions(&t.effective_actions)
            )
        })
        .collect();

    // BTreeSet orders by restrictiveness.
    let distinct: Vec<Action> = candidates
        .iter()
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    if distinct.len() > 1 {
        parts.push(format!(
            "Multiple actions found {}; most restrictive '{}' selected.",
            format_actions(&distinct),
            winner
        ));
    }

    parts.join(REASON_SEPARATOR)
}

fn format_actions(actions: &[Action]) -> String {
    let names: Vec<&str> = actions.iter().map(|a| a.as_str()).collect();
    format!("[{}]", names.join(", "))
}
