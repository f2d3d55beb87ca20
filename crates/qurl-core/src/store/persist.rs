//! Read/write the template file.
//!
//! Canonical format is an ordered JSON array of `{name, pattern}` records.
//! Two legacy shapes are accepted on read: the line-mode object format
//! (`{"Health Check": "[url]/health"}`) and the form shell's array of
//! `{function_name, template}` records.

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::path::Path;

use crate::template::Template;

/// Loads templates from `path`. A missing file is `Ok(None)`; any other
/// failure is an error the caller can surface or swallow.
pub(super) fn load_from_path(path: &Path) -> Result<Option<Vec<Template>>> {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("read templates: {}", path.display())),
    };
    let value: Value = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse templates: {}", path.display()))?;
    Ok(Some(from_value(value)?))
}

/// Load for the explicit load action: a missing file is an error here.
pub(super) fn load_required(path: &Path) -> Result<Vec<Template>> {
    load_from_path(path)?.with_context(|| format!("no template file at {}", path.display()))
}

/// Saves the templates as indented JSON (creates the parent dir if needed).
/// Overwrites any existing file at `path` in full.
pub(super) fn save_to_path(path: &Path, templates: &[Template]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create dir: {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(templates).context("serialize templates")?;
    std::fs::write(path, json).with_context(|| format!("write templates: {}", path.display()))?;
    Ok(())
}

fn from_value(value: Value) -> Result<Vec<Template>> {
    match value {
        Value::Array(items) => items.into_iter().map(record_from_value).collect(),
        // Legacy object format: name → pattern, order preserved by serde_json's
        // preserve_order feature.
        Value::Object(map) => map
            .into_iter()
            .map(|(name, v)| match v {
                Value::String(pattern) => Ok(Template { name, pattern }),
                _ => bail!("template {name:?}: pattern must be a string"),
            })
            .collect(),
        _ => bail!("expected a JSON array or object of templates"),
    }
}

fn record_from_value(value: Value) -> Result<Template> {
    let Value::Object(mut map) = value else {
        bail!("expected a template record object");
    };
    let name = take_string(&mut map, "name").or_else(|| take_string(&mut map, "function_name"));
    let pattern = take_string(&mut map, "pattern").or_else(|| take_string(&mut map, "template"));
    match (name, pattern) {
        (Some(name), Some(pattern)) => Ok(Template { name, pattern }),
        _ => bail!("template record is missing name or pattern"),
    }
}

fn take_string(map: &mut serde_json::Map<String, Value>, key: &str) -> Option<String> {
    match map.remove(key) {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}
