//! Entry-level validation: a typed record plus the repairs applied, or a rejection.

use crate::error::{InputRejection, PolicyRejection};
use guardrail_domain::model::{InputItem, Policy, clamp_confidence, normalize_risk};
use guardrail_types::{Action, ids};
use serde_json::{Map, Value};
use std::fmt;

/// A default or correction applied to an otherwise valid entry.
#[derive(Clone, Debug, PartialEq)]
pub enum Repair {
    RiskDefaulted,
    OutputDefaulted,
    ConfidenceDefaulted,
    ConfidenceClamped { from: f64, to: f64 },
    MinConfidenceDefaulted,
    MinConfidenceClamped { from: f64, to: f64 },
    ActionsFiltered { dropped: Vec<String> },
}

impl fmt::Display for Repair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Repair::RiskDefaulted => {
                write!(f, "missing or invalid 'risk', defaulting to '{}'", ids::RISK_UNKNOWN)
            }
            Repair::OutputDefaulted => {
                f.write_str("missing or invalid 'output', defaulting to empty string")
            }
            Repair::ConfidenceDefaulted => {
                f.write_str("missing or invalid 'confidence', defaulting to 0.0")
            }
            Repair::ConfidenceClamped { from, to } => {
                write!(f, "confidence {from} out of range, clamped to {to}")
            }
            Repair::MinConfidenceDefaulted => {
                f.write_str("missing or invalid 'min_confidence', defaulting to 0.0")
            }
            Repair::MinConfidenceClamped { from, to } => {
                write!(f, "min_confidence {from} out of range, clamped to {to}")
            }
            Repair::ActionsFiltered { dropped } => {
                write!(f, "invalid actions dropped: {}", dropped.join(", "))
            }
        }
    }
}

/// A valid record and the repairs it needed.
#[derive(Clone, Debug, PartialEq)]
pub struct Validated<T> {
    pub value: T,
    pub repairs: Vec<Repair>,
}

pub fn validate_policy(index: usize, entry: &Value) -> Result<Validated<Policy>, PolicyRejection> {
    let Some(obj) = entry.as_object() else {
        return Err(PolicyRejection::NotAnObject { index });
    };
    let Some(id) = non_blank_str(obj, "id") else {
        return Err(PolicyRejection::MissingId { index });
    };
    let id = id.to_string();

    let Some(risk) = non_blank_str(obj, "risk").map(normalize_risk) else {
        return Err(PolicyRejection::MissingRisk { id });
    };

    let raw_actions = match obj.get("allowed_actions").and_then(Value::as_array) {
        Some(list) if !list.is_empty() => list,
        _ => return Err(PolicyRejection::MissingActions { id }),
    };

    let mut repairs = Vec::new();
    let mut allowed_actions: Vec<Action> = Vec::new();
    let mut dropped: Vec<String> = Vec::new();
    for raw in raw_actions {
        match raw.as_str().map(str::parse::<Action>) {
            Some(Ok(action)) => {
                if !allowed_actions.contains(&action) {
                    allowed_actions.push(action);
                }
            }
            Some(Err(_)) | None => dropped.push(display_raw(raw)),
        }
    }
    if allowed_actions.is_empty() {
        return Err(PolicyRejection::NoValidActions { id });
    }
    if !dropped.is_empty() {
        repairs.push(Repair::ActionsFiltered { dropped });
    }

    let min_confidence = match obj.get("min_confidence").and_then(number_value) {
        Some(raw) => {
            let clamped = clamp_confidence(raw);
            if clamped != raw {
                repairs.push(Repair::MinConfidenceClamped {
                    from: raw,
                    to: clamped,
                });
            }
            clamped
        }
        None => {
            repairs.push(Repair::MinConfidenceDefaulted);
            0.0
        }
    };

    Ok(Validated {
        value: Policy {
            id,
            risk,
            allowed_actions,
            min_confidence,
        },
        repairs,
    })
}

pub fn validate_input(index: usize, entry: &Value) -> Result<Validated<InputItem>, InputRejection> {
    let Some(obj) = entry.as_object() else {
        return Err(InputRejection::NotAnObject { index });
    };
    let Some(id) = non_blank_str(obj, "id") else {
        return Err(InputRejection::MissingId { index });
    };

    let mut repairs = Vec::new();

    let risk = match non_blank_str(obj, "risk") {
        Some(r) => normalize_risk(r),
        None => {
            repairs.push(Repair::RiskDefaulted);
            ids::RISK_UNKNOWN.to_string()
        }
    };

    let output = match obj.get("output").and_then(Value::as_str) {
        Some(o) => o.to_string(),
        None => {
            repairs.push(Repair::OutputDefaulted);
            String::new()
        }
    };

    let confidence = match obj.get("confidence").and_then(number_value) {
        Some(raw) => {
            let clamped = clamp_confidence(raw);
            if clamped != raw {
                repairs.push(Repair::ConfidenceClamped {
                    from: raw,
                    to: clamped,
                });
            }
            clamped
        }
        None => {
            repairs.push(Repair::ConfidenceDefaulted);
            0.0
        }
    };

    Ok(Validated {
        value: InputItem {
            id: id.to_string(),
            risk,
            output,
            confidence,
        },
        repairs,
    })
}

fn non_blank_str<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    obj.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

/// Numeric value of a JSON number. Literals beyond the `f64` range come back as infinities so
/// they clamp like any other out-of-range value.
fn number_value(raw: &Value) -> Option<f64> {
    let Value::Number(n) = raw else {
        return None;
    };
    n.as_f64().or_else(|| n.to_string().parse::<f64>().ok())
}

pub(crate) fn display_raw(raw: &Value) -> String {
    match raw {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
