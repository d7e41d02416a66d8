//! Manifest (`package.json`) customization
//!
//! The only read-modify-write of existing content in the workflow. The
//! `name` field is always rewritten; an `aiva.vertical` annotation is added
//! only when a non-default vertical was chosen. Every other field must
//! survive the rewrite unchanged.

use crate::error::Result;
use camino::Utf8Path;
use serde_json::{json, Map, Value};
use tracing::{debug, info};

/// Manifest filename, fixed relative to the project root
pub const MANIFEST_FILE: &str = "package.json";

/// Patch the project manifest after a template fetch
///
/// A missing manifest is not an error: some templates (theme components)
/// legitimately ship without one, and the scaffold is still usable. A
/// present-but-unparsable manifest is fatal.
///
/// # Arguments
/// * `project_dir` - Root of the freshly fetched project
/// * `name` - Project name to write into the `name` field
/// * `vertical` - Non-default vertical to record, if any
///
/// # Returns
/// `true` if a manifest was found and patched, `false` if none existed.
pub fn customize_manifest(
    project_dir: &Utf8Path,
    name: &str,
    vertical: Option<&str>,
) -> Result<bool> {
    let manifest_path = project_dir.join(MANIFEST_FILE);

    if !manifest_path.exists() {
        debug!("No {} in {}, skipping customization", MANIFEST_FILE, project_dir);
        return Ok(false);
    }

    let raw = std::fs::read_to_string(&manifest_path)?;

    // Deserializing into a Map rejects a parsable-but-non-object manifest
    // the same way malformed JSON is rejected.
    let mut manifest: Map<String, Value> = serde_json::from_str(&raw)?;

    manifest.insert("name".to_string(), Value::String(name.to_string()));

    if let Some(vertical) = vertical {
        info!("Recording vertical: {}", vertical);
        manifest.insert("aiva".to_string(), json!({ "vertical": vertical }));
    }

    let mut serialized = serde_json::to_string_pretty(&manifest)?;
    serialized.push('\n');
    std::fs::write(&manifest_path, serialized)?;

    info!("Manifest customized: {}", manifest_path);
    Ok(true)
}
