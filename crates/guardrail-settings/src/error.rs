use thiserror::Error;

/// The whole document is unusable. Callers degrade to an empty collection.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("policy source must be a JSON object")]
    PolicySourceNotAnObject,

    #[error("input source must contain a JSON array at the top level")]
    InputSourceNotAnArray,
}

/// Why a single policy entry was dropped.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolicyRejection {
    /// `policies` is present but not an array; nothing in it is usable.
    #[error("'policies' is not a JSON array; no entries read")]
    PoliciesNotAList,

    #[error("policy at index {index} is not an object")]
    NotAnObject { index: usize },

    #[error("policy at index {index} missing or invalid 'id'")]
    MissingId { index: usize },

    #[error("policy '{id}' missing or invalid 'risk'")]
    MissingRisk { id: String },

    #[error("policy '{id}' missing or empty 'allowed_actions'")]
    MissingActions { id: String },

    #[error("policy '{id}' has no valid actions after filtering")]
    NoValidActions { id: String },
}

/// Why a single input entry was dropped.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InputRejection {
    #[error("input at index {index} is not an object")]
    NotAnObject { index: usize },

    #[error("input at index {index} missing or invalid 'id'")]
    MissingId { index: usize },

    #[error("input at index {index} reuses id '{id}'")]
    DuplicateId { index: usize, id: String },
}
