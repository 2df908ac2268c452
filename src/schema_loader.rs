//! Shared JSON Schema loader for the product catalog.
//!
//! The schema ships inside the crate and can be overridden with a file next
//! to an on-disk catalog. Either way the payload is parsed, its
//! `schema_version` const is checked against the allowed set, and a compiled
//! validator is returned.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Result of loading and compiling a JSON Schema.
pub(crate) struct SchemaLoadResult {
    pub schema_version: String,
    pub compiled: JSONSchema,
}

/// Controls how schemas are checked before compilation.
pub(crate) struct SchemaLoadOptions<'a> {
    /// Where to find the schema_version const inside the schema payload.
    pub schema_version_pointer: &'a str,
    /// Allowed schema_version values; enforced when present.
    pub allowed_versions: Option<&'a BTreeSet<String>>,
}

impl Default for SchemaLoadOptions<'_> {
    fn default() -> Self {
        Self {
            schema_version_pointer: "/properties/schema_version/const",
            allowed_versions: None,
        }
    }
}

pub(crate) fn load_json_schema_from_path(
    path: &Path,
    options: SchemaLoadOptions<'_>,
) -> Result<SchemaLoadResult> {
    let text =
        fs::read_to_string(path).with_context(|| format!("opening schema {}", path.display()))?;
    load_json_schema_from_str(&text, &path.display().to_string(), options)
}

/// Parse and compile a schema held in memory. `origin` names the source in
/// error messages.
pub(crate) fn load_json_schema_from_str(
    text: &str,
    origin: &str,
    options: SchemaLoadOptions<'_>,
) -> Result<SchemaLoadResult> {
    let schema_value: Value =
        serde_json::from_str(text).with_context(|| format!("parsing schema {origin}"))?;

    let schema_version = extract_schema_version(&schema_value, options.schema_version_pointer)
        .ok_or_else(|| anyhow!("schema {origin} missing schema_version const"))?;

    if let Some(allowed) = options.allowed_versions {
        if !allowed.contains(&schema_version) {
            bail!(
                "schema_version '{}' not in allowed set {:?}",
                schema_version,
                allowed
            );
        }
    }

    let compiled = JSONSchema::compile(&schema_value)
        .map_err(|err| anyhow!("compiling schema {origin}: {err}"))?;

    Ok(SchemaLoadResult {
        schema_version,
        compiled,
    })
}

impl SchemaLoadResult {
    /// Validate `instance`, folding every schema violation into one error.
    pub(crate) fn validate(&self, instance: &Value, origin: &str) -> Result<()> {
        if let Err(errors) = self.compiled.validate(instance) {
            let details = errors
                .map(|err| err.to_string())
                .collect::<Vec<_>>()
                .join("\n");
            bail!("{origin} failed schema validation:\n{details}");
        }
        Ok(())
    }
}

fn extract_schema_version(schema: &Value, pointer: &str) -> Option<String> {
    let version = schema.pointer(pointer).and_then(Value::as_str)?;
    if crate::catalog::identity::is_valid_key(version) {
        Some(version.to_string())
    } else {
        None
    }
}
