//! Pure guardrail evaluation (no IO).
//!
//! Input: validated inputs and a policy set constructed elsewhere.
//! Output: one decision record per input + decision counts.

#![forbid(unsafe_code)]

pub mod matcher;
pub mod model;
pub mod report;
pub mod resolver;

mod engine;

pub use engine::{evaluate, evaluate_item};

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;
