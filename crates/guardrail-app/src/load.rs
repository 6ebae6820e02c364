//! Source loading with graceful degradation.
//!
//! A source that cannot be read or parsed becomes an empty collection; every dropped entry and
//! every applied default is reported through `tracing`.

use anyhow::Context;
use camino::Utf8Path;
use guardrail_domain::model::{InputItem, PolicySet};
use guardrail_settings::{LoadedInputs, LoadedPolicies, parse_input_source, parse_policy_source};
use guardrail_types::Action;

fn read_source(path: &Utf8Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read {}", path))
}

/// Load and validate the policy source at `path`.
///
/// Never fails: unreadable or unparseable sources yield an empty set with a `block` default.
pub fn load_policies(path: &Utf8Path) -> PolicySet {
    let text = match read_source(path) {
        Ok(text) => text,
        Err(e) => {
            let error = format!("{e:#}");
            tracing::error!(path = %path, %error, "policy source unavailable; no policies loaded");
            return PolicySet::default();
        }
    };

    let loaded = match parse_policy_source(&text) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!(path = %path, error = %e, "policy source unparseable; no policies loaded");
            return PolicySet::default();
        }
    };

    report_policy_diagnostics(&loaded);
    tracing::info!(
        path = %path,
        policies = loaded.policy_set.policies.len(),
        rejected = loaded.rejections.len(),
        default_action = %loaded.policy_set.default_action,
        "loaded policies"
    );
    loaded.policy_set
}

/// Load and validate the input source at `path`, preserving source order.
///
/// Never fails: unreadable, unparseable or non-array sources yield an empty list.
pub fn load_inputs(path: &Utf8Path) -> Vec<InputItem> {
    let text = match read_source(path) {
        Ok(text) => text,
        Err(e) => {
            let error = format!("{e:#}");
            tracing::error!(path = %path, %error, "input source unavailable; no inputs loaded");
            return Vec::new();
        }
    };

    let loaded = match parse_input_source(&text) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!(path = %path, error = %e, "input source unparseable; no inputs loaded");
            return Vec::new();
        }
    };

    report_input_diagnostics(&loaded);
    tracing::info!(
        path = %path,
        inputs = loaded.inputs.len(),
        rejected = loaded.rejections.len(),
        "loaded inputs"
    );
    loaded.inputs
}

fn report_policy_diagnostics(loaded: &LoadedPolicies) {
    if let Some(raw) = &loaded.replaced_default_action {
        tracing::warn!(
            value = %raw,
            fallback = %Action::Block,
            "invalid default_action; using fallback"
        );
    }
    for rejection in &loaded.rejections {
        tracing::warn!("skipping policy: {rejection}");
    }
    for r in &loaded.repairs {
        tracing::warn!(policy = %r.id, "{}", r.repair);
    }
}

fn report_input_diagnostics(loaded: &LoadedInputs) {
    for rejection in &loaded.rejections {
        tracing::warn!("skipping input: {rejection}");
    }
    for r in &loaded.repairs {
        tracing::warn!(input = %r.id, "{}", r.repair);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    fn write(dir: &tempfile::TempDir, name: &str, text: &str) -> Utf8PathBuf {
        let path = Utf8PathBuf::from_path_buf(dir.path().join(name)).expect("utf8 path");
        std::fs::write(&path, text).expect("write fixture");
        path
    }

    #[test]
    fn missing_policy_file_degrades_to_block_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = Utf8PathBuf::from_path_buf(dir.path().join("absent.json")).expect("utf8 path");

        let set = load_policies(&path);
        assert!(set.policies.is_empty());
        assert_eq!(set.default_action, Action::Block);
    }

    #[test]
    fn unparseable_policy_file_degrades_to_block_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write(&dir, "policies.json", "{ nope");

        let set = load_policies(&path);
        assert_eq!(set, PolicySet::default());
    }

    #[test]
    fn policies_keep_valid_entries() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write(
            &dir,
            "policies.json",
            r#"{"policies": [
                {"id": "A", "risk": "medical", "allowed_actions": ["escalate"], "min_confidence": 0.9},
                {"id": "B", "risk": "medical", "allowed_actions": ["explode"]}
            ], "default_action": "sanitize"}"#,
        );

        let set = load_policies(&path);
        assert_eq!(set.policies.len(), 1);
        assert_eq!(set.policies[0].id, "A");
        assert_eq!(set.default_action, Action::Sanitize);
    }

    #[test]
    fn missing_input_file_degrades_to_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = Utf8PathBuf::from_path_buf(dir.path().join("absent.json")).expect("utf8 path");
        assert!(load_inputs(&path).is_empty());
    }

    #[test]
    fn non_array_input_file_degrades_to_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write(&dir, "inputs.json", r#"{"id": "T1"}"#);
        assert!(load_inputs(&path).is_empty());
    }

    #[test]
    fn inputs_are_repaired_and_ordered() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write(
            &dir,
            "inputs.json",
            r#"[
                {"id": "B", "risk": " General ", "output": "x", "confidence": 1.7},
                {"output": "no id"},
                {"id": "A"}
            ]"#,
        );

        let inputs = load_inputs(&path);
        let ids: Vec<&str> = inputs.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A"]);
        assert_eq!(inputs[0].risk, "general");
        assert_eq!(inputs[0].confidence, 1.0);
        assert_eq!(inputs[1].risk, "unknown");
    }
}
