//! Fuzz target for end-to-end evaluation.
//!
//! Goal: for any policy set and input, the decision is the default action when nothing applies
//! and otherwise the most restrictive applied action.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_resolution
//! ```

#![no_main]

use arbitrary::Arbitrary;
use guardrail_domain::model::{InputItem, Policy, PolicySet};
use guardrail_types::Action;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct FuzzPolicy {
    risk: u8,
    actions: Vec<u8>,
    min_confidence: u8,
}

#[derive(Arbitrary, Debug)]
struct FuzzCase {
    policies: Vec<FuzzPolicy>,
    default_action: u8,
    risk: u8,
    confidence: u8,
}

fn action(b: u8) -> Action {
    Action::ALL[usize::from(b) % Action::ALL.len()]
}

fn risk(b: u8) -> String {
    ["medical", "general", "financial"][usize::from(b) % 3].to_string()
}

fn unit(b: u8) -> f64 {
    f64::from(b) / 255.0
}

fuzz_target!(|case: FuzzCase| {
    if case.policies.len() > 32 {
        return;
    }

    let policies: Vec<Policy> = case
        .policies
        .iter()
        .enumerate()
        .filter(|(_, p)| !p.actions.is_empty())
        .map(|(i, p)| {
            let mut allowed_actions = Vec::new();
            for a in p.actions.iter().take(8).map(|b| action(*b)) {
                if !allowed_actions.contains(&a) {
                    allowed_actions.push(a);
                }
            }
            Policy {
                id: format!("P{i}"),
                risk: risk(p.risk),
                allowed_actions,
                min_confidence: unit(p.min_confidence),
            }
        })
        .collect();
    let set = PolicySet {
        policies,
        default_action: action(case.default_action),
    };
    let input = InputItem {
        id: "R1".to_string(),
        risk: risk(case.risk),
        output: "text".to_string(),
        confidence: unit(case.confidence),
    };

    let record = guardrail_domain::evaluate_item(&input, &set);

    let applied: Vec<Action> = record
        .rule_trace
        .iter()
        .flat_map(|t| t.effective_actions.iter().copied())
        .collect();
    match applied.iter().min() {
        None => {
            assert_eq!(record.decision, set.default_action);
            assert!(record.applied_policies.is_empty());
        }
        Some(winner) => assert_eq!(record.decision, *winner),
    }
    assert_eq!(record.final_output, record.decision.final_output(&input.output));
});
