use guardrail_types::Action;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `policies.json` schema v1.
///
/// This is the *documented* shape. Loading does not deserialize into it directly: entries are
/// validated one by one so a single bad entry never discards the document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PolicySourceV1 {
    #[serde(default)]
    pub policies: Vec<PolicyEntryV1>,

    /// Fallback when no policy covers an input or none meets its threshold. Defaults to `block`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_action: Option<Action>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PolicyEntryV1 {
    pub id: String,

    /// Risk category; compared case-insensitively after trimming.
    pub risk: String,

    pub allowed_actions: Vec<Action>,

    /// Minimum input confidence in `[0, 1]`. Defaults to `0.0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_confidence: Option<f64>,
}

/// `inputs.json` schema v1: a top-level array of entries.
pub type InputSourceV1 = Vec<InputEntryV1>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InputEntryV1 {
    pub id: String,

    /// Risk category. Defaults to `unknown`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk: Option<String>,

    /// The AI-generated text. Defaults to an empty string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// Model confidence in `[0, 1]`. Defaults to `0.0`; out-of-range values are clamped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}
