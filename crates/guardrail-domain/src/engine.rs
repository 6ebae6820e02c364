use crate::matcher::{evaluate_policy, find_matching_policies};
use crate::model::{InputItem, PolicySet};
use crate::report::DomainReport;
use crate::resolver::resolve_decision;
use guardrail_types::{DecisionRecord, PolicyTrace};

/// Run match -> evaluate -> resolve for a single input.
///
/// Depends on nothing but its arguments, so callers may fan items out across threads.
pub fn evaluate_item(input: &InputItem, policy_set: &PolicySet) -> DecisionRecord {
    let traces: Vec<PolicyTrace> = find_matching_policies(input, &policy_set.policies)
        .into_iter()
        .map(|policy| evaluate_policy(input, policy))
        .collect();

    resolve_decision(input, &traces, policy_set.default_action)
}

/// Evaluate a batch sequentially, preserving input order.
pub fn evaluate(inputs: &[InputItem], policy_set: &PolicySet) -> DomainReport {
    let records = inputs
        .iter()
        .map(|input| evaluate_item(input, policy_set))
        .collect();

    DomainReport::from_records(records)
}
