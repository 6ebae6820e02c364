use crate::model::{InputItem, Policy, PolicySet};
use guardrail_types::{Action, PolicyTrace};

pub fn input(id: &str, risk: &str, confidence: f64) -> InputItem {
    InputItem {
        id: id.to_string(),
        risk: risk.to_string(),
        output: "Some AI output".to_string(),
        confidence,
    }
}

pub fn policy(id: &str, risk: &str, actions: &[Action], min_confidence: f64) -> Policy {
    Policy {
        id: id.to_string(),
        risk: risk.to_string(),
        allowed_actions: actions.to_vec(),
        min_confidence,
    }
}

pub fn passing_trace(id: &str, actions: &[Action], required: f64, given: f64) -> PolicyTrace {
    PolicyTrace {
        policy_id: id.to_string(),
        confidence_required: required,
        confidence_given: given,
        threshold_met: true,
        candidate_actions: actions.to_vec(),
        effective_actions: actions.to_vec(),
    }
}

pub fn failing_trace(id: &str, actions: &[Action], required: f64, given: f64) -> PolicyTrace {
    PolicyTrace {
        policy_id: id.to_string(),
        confidence_required: required,
        confidence_given: given,
        threshold_met: false,
        candidate_actions: actions.to_vec(),
        effective_actions: Vec::new(),
    }
}

/// Two medical and two general policies with a `block` default.
pub fn reference_policy_set() -> PolicySet {
    PolicySet {
        policies: vec![
            policy("MED_STRICT", "medical", &[Action::Escalate], 0.95),
            policy("MED_BLOCK", "medical", &[Action::Block], 0.0),
            policy("GEN_ALLOW", "general", &[Action::Allow], 0.7),
            policy("GEN_SANITIZE", "general", &[Action::Sanitize], 0.0),
        ],
        default_action: Action::Block,
    }
}
