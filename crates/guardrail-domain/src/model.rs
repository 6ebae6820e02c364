use guardrail_types::Action;

/// One AI output to evaluate. Fields are already normalized.
#[derive(Clone, Debug, PartialEq)]
pub struct InputItem {
    pub id: String,
    /// Lowercased, trimmed risk category (`"unknown"` when the source had none).
    pub risk: String,
    pub output: String,
    /// Always within `[0, 1]`.
    pub confidence: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Policy {
    pub id: String,
    /// Lowercased, trimmed risk category. Matches inputs by exact equality.
    pub risk: String,
    /// Non-empty, duplicate-free, in source order.
    pub allowed_actions: Vec<Action>,
    /// Always within `[0, 1]`. `0.0` is always satisfied.
    pub min_confidence: f64,
}

/// All policies for a run, in source order, plus the fallback action.
#[derive(Clone, Debug, PartialEq)]
pub struct PolicySet {
    pub policies: Vec<Policy>,
    pub default_action: Action,
}

impl Default for PolicySet {
    fn default() -> Self {
        Self {
            policies: Vec::new(),
            default_action: Action::Block,
        }
    }
}

pub fn normalize_risk(risk: &str) -> String {
    risk.trim().to_lowercase()
}

pub fn clamp_confidence(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}
