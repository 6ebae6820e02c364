//! Stable identifiers and fixed texts.

// Schemas
pub const SCHEMA_POLICIES_V1: &str = "guardrail.policies.v1";
pub const SCHEMA_INPUTS_V1: &str = "guardrail.inputs.v1";
pub const SCHEMA_OUTPUT_V1: &str = "guardrail.output.v1";

/// Risk category assigned to inputs that carry no usable `risk`.
pub const RISK_UNKNOWN: &str = "unknown";

// Final output texts
pub const OUTPUT_SAFE_FALLBACK: &str =
    "This response cannot be shown. Please consult a qualified professional.";
pub const OUTPUT_HUMAN_REVIEW: &str = "Sent for human review.";
pub const OUTPUT_SUPPRESSED: &str = "[Output suppressed by guardrail policy.]";
