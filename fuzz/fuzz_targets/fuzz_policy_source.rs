//! Fuzz target for the policy source loader.
//!
//! Goal: parsing arbitrary text should **never panic**, and every kept policy must be usable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_policy_source
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(loaded) = guardrail_settings::parse_policy_source(text) {
        for policy in &loaded.policy_set.policies {
            assert!(!policy.allowed_actions.is_empty());
            assert!((0.0..=1.0).contains(&policy.min_confidence));
            assert_eq!(policy.risk, policy.risk.trim().to_lowercase());
        }
    }
});
