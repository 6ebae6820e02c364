//! Output sink: the pretty-printed JSON decision document.

use anyhow::Context;
use camino::Utf8Path;
use guardrail_types::DecisionRecord;

pub fn serialize_output(records: &[DecisionRecord]) -> anyhow::Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(records).context("serialize output document")?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Write the decision document to `path`, creating parent directories as needed.
pub fn write_output(path: &Utf8Path, records: &[DecisionRecord]) -> anyhow::Result<()> {
    let bytes = serialize_output(records)?;
    write_bytes(path, &bytes)
}

pub fn write_text(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    write_bytes(path, text.as_bytes())
}

fn write_bytes(path: &Utf8Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create {}", parent))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write {}", path))
}
