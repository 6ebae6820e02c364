//! Property-based tests for source validation: clamping, normalization, and never panicking on
//! arbitrary JSON.

use crate::{parse_input_source, parse_policy_source, validate_input, validate_policy};
use proptest::prelude::*;
use serde_json::{Value, json};

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        (-5.0f64..5.0).prop_map(Value::from),
        "[a-zA-Z ]{0,8}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
            prop::collection::btree_map("[a-z_]{1,16}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn input_confidence_always_lands_in_unit_range(raw in -10.0f64..10.0) {
        let entry = json!({"id": "R1", "risk": "medical", "output": "x", "confidence": raw});
        let v = validate_input(0, &entry).expect("valid");

        prop_assert!((0.0..=1.0).contains(&v.value.confidence));
        if (0.0..=1.0).contains(&raw) {
            prop_assert_eq!(v.value.confidence, raw);
            prop_assert!(v.repairs.is_empty());
        }
    }

    #[test]
    fn policy_min_confidence_always_lands_in_unit_range(raw in -10.0f64..10.0) {
        let entry = json!({"id": "P1", "risk": "medical", "allowed_actions": ["block"], "min_confidence": raw});
        let v = validate_policy(0, &entry).expect("valid");
        prop_assert!((0.0..=1.0).contains(&v.value.min_confidence));
    }

    #[test]
    fn risk_is_trimmed_and_lowercased(risk in "[ ]{0,3}[A-Za-z]{1,10}[ ]{0,3}") {
        let entry = json!({"id": "R1", "risk": risk.clone(), "output": "x", "confidence": 0.5});
        let v = validate_input(0, &entry).expect("valid");

        prop_assert_eq!(v.value.risk, risk.trim().to_lowercase());
    }

    #[test]
    fn policy_and_input_risk_normalize_identically(risk in "[ ]{0,3}[A-Za-z]{1,10}[ ]{0,3}") {
        let p = json!({"id": "P1", "risk": risk.clone(), "allowed_actions": ["block"]});
        let i = json!({"id": "R1", "risk": risk, "output": "x", "confidence": 0.5});

        let policy = validate_policy(0, &p).expect("valid policy");
        let input = validate_input(0, &i).expect("valid input");
        prop_assert_eq!(policy.value.risk, input.value.risk);
    }

    #[test]
    fn arbitrary_entries_never_panic(entry in arb_json()) {
        let _ = validate_policy(0, &entry);
        let _ = validate_input(0, &entry);
    }

    #[test]
    fn arbitrary_documents_never_panic(doc in arb_json()) {
        let text = doc.to_string();
        let _ = parse_policy_source(&text);
        let _ = parse_input_source(&text);
    }

    #[test]
    fn every_policy_entry_is_kept_or_rejected(entries in prop::collection::vec(arb_json(), 0..6)) {
        let doc = json!({"policies": entries.clone()});
        let loaded = parse_policy_source(&doc.to_string()).expect("object source");

        prop_assert_eq!(
            loaded.policy_set.policies.len() + loaded.rejections.len(),
            entries.len()
        );
        for p in &loaded.policy_set.policies {
            prop_assert!(!p.allowed_actions.is_empty());
        }
    }
}
