//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Most-restrictive-wins resolution
//! - Default action fallback
//! - Trace completeness and ordering
//! - Determinism

use crate::engine::{evaluate, evaluate_item};
use crate::matcher::{evaluate_policy, find_matching_policies};
use crate::model::{InputItem, Policy, PolicySet};
use guardrail_types::Action;
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Block),
        Just(Action::Escalate),
        Just(Action::Sanitize),
        Just(Action::Allow),
    ]
}

/// Non-empty, duplicate-free action lists, as the loader produces them.
fn arb_actions() -> impl Strategy<Value = Vec<Action>> {
    prop::collection::vec(arb_action(), 1..5).prop_map(|mut actions| {
        let mut seen = Vec::new();
        actions.retain(|a| {
            if seen.contains(a) {
                false
            } else {
                seen.push(*a);
                true
            }
        });
        actions
    })
}

/// Small category pool so matches are frequent.
fn arb_risk() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("medical".to_string()),
        Just("financial".to_string()),
        Just("general".to_string()),
        Just("unknown".to_string()),
    ]
}

/// Confidences on a coarse grid so exact-boundary cases show up.
fn arb_confidence() -> impl Strategy<Value = f64> {
    prop_oneof![(0u32..=20).prop_map(|n| n as f64 / 20.0), 0.0f64..=1.0]
}

fn arb_policy() -> impl Strategy<Value = Policy> {
    ("[A-Z]{1,3}[0-9]{0,2}", arb_risk(), arb_actions(), arb_confidence()).prop_map(
        |(id, risk, allowed_actions, min_confidence)| Policy {
            id,
            risk,
            allowed_actions,
            min_confidence,
        },
    )
}

fn arb_policy_set() -> impl Strategy<Value = PolicySet> {
    (prop::collection::vec(arb_policy(), 0..8), arb_action()).prop_map(
        |(policies, default_action)| PolicySet {
            policies,
            default_action,
        },
    )
}

fn arb_input() -> impl Strategy<Value = InputItem> {
    ("[a-z0-9]{1,8}", arb_risk(), ".{0,16}", arb_confidence()).prop_map(
        |(id, risk, output, confidence)| InputItem {
            id,
            risk,
            output,
            confidence,
        },
    )
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn decision_is_most_restrictive_passing_action_or_default(
        input in arb_input(),
        set in arb_policy_set(),
    ) {
        let record = evaluate_item(&input, &set);

        let passing: Vec<Action> = set
            .policies
            .iter()
            .filter(|p| p.risk == input.risk && input.confidence >= p.min_confidence)
            .flat_map(|p| p.allowed_actions.iter().copied())
            .collect();

        match passing.iter().min() {
            Some(expected) => {
                prop_assert_eq!(record.decision, *expected);
                prop_assert!(!record.applied_policies.is_empty());
            }
            None => {
                prop_assert_eq!(record.decision, set.default_action);
                prop_assert!(record.applied_policies.is_empty());
            }
        }
    }

    #[test]
    fn rule_trace_covers_every_matched_policy_in_order(
        input in arb_input(),
        set in arb_policy_set(),
    ) {
        let record = evaluate_item(&input, &set);
        let matched: Vec<&str> = find_matching_policies(&input, &set.policies)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        let traced: Vec<&str> = record.rule_trace.iter().map(|t| t.policy_id.as_str()).collect();

        prop_assert_eq!(traced, matched);
    }

    #[test]
    fn applied_policies_are_the_passing_traces(
        input in arb_input(),
        set in arb_policy_set(),
    ) {
        let record = evaluate_item(&input, &set);
        let passing: Vec<&str> = record
            .rule_trace
            .iter()
            .filter(|t| t.threshold_met)
            .map(|t| t.policy_id.as_str())
            .collect();
        let applied: Vec<&str> = record.applied_policies.iter().map(String::as_str).collect();

        prop_assert_eq!(applied, passing);
    }

    #[test]
    fn no_match_means_default(input in arb_input(), set in arb_policy_set()) {
        prop_assume!(set.policies.iter().all(|p| p.risk != input.risk));

        let record = evaluate_item(&input, &set);
        prop_assert_eq!(record.decision, set.default_action);
        prop_assert!(record.applied_policies.is_empty());
        prop_assert!(record.rule_trace.is_empty());
    }

    #[test]
    fn threshold_boundary_is_inclusive(policy in arb_policy(), input in arb_input()) {
        let at_threshold = InputItem { confidence: policy.min_confidence, ..input };
        let trace = evaluate_policy(&at_threshold, &policy);

        prop_assert!(trace.threshold_met);
        prop_assert_eq!(trace.effective_actions, policy.allowed_actions);
    }

    #[test]
    fn final_output_tracks_decision(input in arb_input(), set in arb_policy_set()) {
        let record = evaluate_item(&input, &set);
        prop_assert_eq!(record.final_output, record.decision.final_output(&input.output));
    }

    #[test]
    fn evaluation_is_deterministic(
        inputs in prop::collection::vec(arb_input(), 0..6),
        set in arb_policy_set(),
    ) {
        let first = evaluate(&inputs, &set);
        let second = evaluate(&inputs, &set);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn policy_order_does_not_change_the_decision(
        input in arb_input(),
        set in arb_policy_set(),
    ) {
        let mut reversed = set.clone();
        reversed.policies.reverse();

        prop_assert_eq!(
            evaluate_item(&input, &set).decision,
            evaluate_item(&input, &reversed).decision
        );
    }
}
