//! Policy selection and per-policy threshold evaluation.

use crate::model::{InputItem, Policy};
use guardrail_types::PolicyTrace;

/// Every policy whose risk category equals the input's, in source order.
///
/// Both sides are normalized at load time, so this is plain string equality. An input with risk
/// `"unknown"` only matches policies written for `"unknown"`.
pub fn find_matching_policies<'a>(input: &InputItem, policies: &'a [Policy]) -> Vec<&'a Policy> {
    policies.iter().filter(|p| p.risk == input.risk).collect()
}

/// Check one policy's confidence threshold against an input. The boundary is inclusive.
pub fn evaluate_policy(input: &InputItem, policy: &Policy) -> PolicyTrace {
    let threshold_met = input.confidence >= policy.min_confidence;
    let effective_actions = if threshold_met {
        policy.allowed_actions.clone()
    } else {
        Vec::new()
    };

    PolicyTrace {
        policy_id: policy.id.clone(),
        confidence_required: policy.min_confidence,
        confidence_given: input.confidence,
        threshold_met,
        candidate_actions: policy.allowed_actions.clone(),
        effective_actions,
    }
}
