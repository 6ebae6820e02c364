//! Stable DTOs and IDs used across the guardrail workspace.
//!
//! This crate is intentionally boring:
//! - the four-member action vocabulary and its restrictiveness order
//! - data types for the emitted decision document
//! - stable string IDs and fixed output texts
//! - explain registry for actions

#![forbid(unsafe_code)]

pub mod action;
pub mod explain;
pub mod ids;
pub mod record;

pub use action::{Action, ParseActionError};
pub use explain::{Explanation, lookup_explanation};
pub use record::{DecisionRecord, OutputDocument, PolicyTrace};
