use crate::Action;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Outcome of checking one policy against one input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PolicyTrace {
    pub policy_id: String,
    pub confidence_required: f64,
    pub confidence_given: f64,
    pub threshold_met: bool,
    /// Every action the policy allows, regardless of the threshold.
    pub candidate_actions: Vec<Action>,
    /// `candidate_actions` when the threshold was met, otherwise empty.
    pub effective_actions: Vec<Action>,
}

impl PolicyTrace {
    pub fn applies(&self) -> bool {
        !self.effective_actions.is_empty()
    }
}

/// Final, auditable decision for one input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DecisionRecord {
    pub id: String,
    pub decision: Action,
    /// Policies whose threshold was met, in matched order.
    pub applied_policies: Vec<String>,
    /// Every matched policy, passing or not, in matched order.
    pub rule_trace: Vec<PolicyTrace>,
    pub final_output: String,
    pub reason: String,
}

/// The output document: one record per validated input, in input order.
pub type OutputDocument = Vec<DecisionRecord>;
