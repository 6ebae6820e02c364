//! Fuzz target for the input source loader.
//!
//! Goal: parsing arbitrary text should **never panic**; kept inputs have unique ids and
//! confidences in range.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_input_source
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::collections::BTreeSet;

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(loaded) = guardrail_settings::parse_input_source(text) {
        let mut seen = BTreeSet::new();
        for input in &loaded.inputs {
            assert!(seen.insert(input.id.clone()), "duplicate id kept");
            assert!((0.0..=1.0).contains(&input.confidence));
        }
    }
});
