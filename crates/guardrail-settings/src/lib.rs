//! Policy and input source parsing.
//!
//! This crate is intentionally IO-free: it parses documents provided as strings. Nothing is logged
//! here; every dropped entry and every applied default is returned so the caller can report it.

#![forbid(unsafe_code)]

mod error;
mod model;
mod validate;

pub use error::{InputRejection, PolicyRejection, SourceError};
pub use model::{InputEntryV1, InputSourceV1, PolicyEntryV1, PolicySourceV1};
pub use validate::{Repair, Validated, validate_input, validate_policy};

use validate::display_raw;

use guardrail_domain::model::{InputItem, PolicySet};
use guardrail_types::Action;
use serde_json::Value;
use std::collections::BTreeSet;

/// A repair attributed to the entry it was applied to.
#[derive(Clone, Debug, PartialEq)]
pub struct EntryRepair {
    pub id: String,
    pub repair: Repair,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadedPolicies {
    pub policy_set: PolicySet,
    pub rejections: Vec<PolicyRejection>,
    pub repairs: Vec<EntryRepair>,
    /// Raw `default_action` value that was replaced by `block`, if any.
    pub replaced_default_action: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadedInputs {
    pub inputs: Vec<InputItem>,
    pub rejections: Vec<InputRejection>,
    pub repairs: Vec<EntryRepair>,
}

/// Parse `policies.json` text into a validated policy set.
///
/// Only a document-level problem is an `Err`; bad entries are dropped and reported.
pub fn parse_policy_source(text: &str) -> Result<LoadedPolicies, SourceError> {
    let doc: Value = serde_json::from_str(text)?;
    let Some(obj) = doc.as_object() else {
        return Err(SourceError::PolicySourceNotAnObject);
    };

    let mut loaded = LoadedPolicies::default();

    match obj.get("default_action") {
        None => {}
        Some(raw) => match raw.as_str().and_then(|s| s.parse::<Action>().ok()) {
            Some(action) => loaded.policy_set.default_action = action,
            None => loaded.replaced_default_action = Some(display_raw(raw)),
        },
    }

    let entries: &[Value] = match obj.get("policies") {
        None => &[],
        Some(Value::Array(list)) => list.as_slice(),
        Some(_) => {
            loaded.rejections.push(PolicyRejection::PoliciesNotAList);
            &[]
        }
    };

    for (index, entry) in entries.iter().enumerate() {
        match validate_policy(index, entry) {
            Ok(Validated { value, repairs }) => {
                loaded
                    .repairs
                    .extend(repairs.into_iter().map(|repair| EntryRepair {
                        id: value.id.clone(),
                        repair,
                    }));
                loaded.policy_set.policies.push(value);
            }
            Err(rejection) => loaded.rejections.push(rejection),
        }
    }

    Ok(loaded)
}

/// Parse `inputs.json` text into validated inputs, in source order.
///
/// The first entry with a given id wins; later ones are rejected.
pub fn parse_input_source(text: &str) -> Result<LoadedInputs, SourceError> {
    let doc: Value = serde_json::from_str(text)?;
    let Some(entries) = doc.as_array() else {
        return Err(SourceError::InputSourceNotAnArray);
    };

    let mut loaded = LoadedInputs::default();
    let mut seen: BTreeSet<String> = BTreeSet::new();

    for (index, entry) in entries.iter().enumerate() {
        match validate_input(index, entry) {
            Ok(Validated { value, repairs }) => {
                if !seen.insert(value.id.clone()) {
                    loaded
                        .rejections
                        .push(InputRejection::DuplicateId { index, id: value.id });
                    continue;
                }
                loaded
                    .repairs
                    .extend(repairs.into_iter().map(|repair| EntryRepair {
                        id: value.id.clone(),
                        repair,
                    }));
                loaded.inputs.push(value);
            }
            Err(rejection) => loaded.rejections.push(rejection),
        }
    }

    Ok(loaded)
}

#[cfg(test)]
mod proptest;
