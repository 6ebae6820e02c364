//! Developer tasks (schema generation, fixture conformance).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::PathBuf;

/// Get the project root (parent of xtask directory).
fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir().context("Cannot determine current directory")?,
    };

    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .map(|p| p.to_path_buf())
            .context("xtask has no parent")
    } else {
        Ok(manifest_dir)
    }
}

fn schemas_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("schemas"))
}

fn fixtures_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("tests").join("fixtures"))
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_policies_schema() -> schemars::Schema {
    schema_for!(guardrail_settings::PolicySourceV1)
}

fn generate_inputs_schema() -> schemars::Schema {
    schema_for!(guardrail_settings::InputSourceV1)
}

fn generate_output_schema() -> schemars::Schema {
    schema_for!(guardrail_types::OutputDocument)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "guardrail.policies.v1.json",
            generate: generate_policies_schema,
        },
        SchemaSpec {
            filename: "guardrail.inputs.v1.json",
            generate: generate_inputs_schema,
        },
        SchemaSpec {
            filename: "guardrail.output.v1.json",
            generate: generate_output_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);

        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;

        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Check that schemas/ matches what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    let mut stale = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        let expected = serialize_schema(&(spec.generate)())?;
        match fs::read_to_string(&path) {
            Ok(actual) if actual == expected => {}
            Ok(_) => stale.push(format!("{} (out of date)", spec.filename)),
            Err(_) => stale.push(format!("{} (missing)", spec.filename)),
        }
    }

    if stale.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }
    for name in &stale {
        eprintln!("  - {}", name);
    }
    bail!("schemas are stale; run `cargo xtask emit-schemas`")
}

/// Validate every fixture's expected output document against the output schema.
fn conform() -> anyhow::Result<()> {
    let schema = serde_json::to_value(generate_output_schema()).context("schema to JSON")?;
    let validator = jsonschema::validator_for(&schema)
        .map_err(|e| anyhow::anyhow!("invalid output schema: {e}"))?;

    let dir = fixtures_dir()?;
    let mut entries: Vec<PathBuf> = fs::read_dir(&dir)
        .with_context(|| format!("read {}", dir.display()))?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.is_dir())
        .collect();
    entries.sort();

    let mut failures = 0usize;
    for fixture in entries {
        let path = fixture.join("expected.output.json");
        if !path.exists() {
            continue;
        }
        let text = fs::read_to_string(&path)
            .with_context(|| format!("read {}", path.display()))?;
        let doc: serde_json::Value = serde_json::from_str(&text)
            .with_context(|| format!("parse {}", path.display()))?;

        let errors: Vec<String> = validator.iter_errors(&doc).map(|e| e.to_string()).collect();
        if errors.is_empty() {
            println!("ok    {}", path.display());
        } else {
            failures += 1;
            println!("FAIL  {}", path.display());
            for e in errors {
                println!("      {}", e);
            }
        }
    }

    if failures > 0 {
        bail!("{failures} fixture(s) do not conform to the output schema");
    }
    Ok(())
}

fn explain_coverage() -> anyhow::Result<()> {
    let mut errors = Vec::new();

    for name in guardrail_types::explain::all_actions() {
        match guardrail_types::lookup_explanation(name) {
            Some(exp) => {
                if exp.title.is_empty() {
                    errors.push(format!("Action '{}' has empty title", name));
                }
                if exp.description.is_empty() {
                    errors.push(format!("Action '{}' has empty description", name));
                }
            }
            None => errors.push(format!("Action '{}' has no explanation", name)),
        }
    }

    if errors.is_empty() {
        println!("All actions have explanations.");
        Ok(())
    } else {
        for e in &errors {
            eprintln!("  - {}", e);
        }
        bail!("{} explanation problem(s)", errors.len())
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  conform           Validate fixture output documents against the output schema");
    eprintln!("  explain-coverage  Validate all actions have explanations");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
