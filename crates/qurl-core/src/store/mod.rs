//! Durable name → pattern mapping persisted as a JSON file.
//!
//! The store is an explicit object passed to whichever operation needs it;
//! there is no process-wide implicit state. A save overwrites the persisted
//! file in full. File access is not locked; last writer wins.

mod persist;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::template::{default_templates, Template};

/// How a store came to hold its templates at startup. The automatic startup
/// load only logs this; the explicit load action can report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Persisted file was read and parsed.
    Loaded { count: usize },
    /// File missing or unusable; built-in defaults are in effect.
    Defaulted { reason: String },
}

/// Result of a remove operation. A missing name is a reported no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotFound,
}

/// Ordered template mapping backed by a JSON file. Names are unique;
/// insertion order is preserved for display.
#[derive(Debug)]
pub struct TemplateStore {
    path: PathBuf,
    templates: Vec<Template>,
}

impl TemplateStore {
    /// Default template file: `~/.config/qurl/templates.json`.
    pub fn default_path() -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("qurl")?;
        Ok(xdg_dirs.place_config_file("templates.json")?)
    }

    /// Opens a store at `path`, falling back to the built-in defaults when
    /// the file is missing or unreadable. Never fails; the outcome records
    /// which path was taken.
    pub fn open(path: PathBuf) -> (Self, LoadOutcome) {
        match persist::load_from_path(&path) {
            Ok(Some(templates)) => {
                let templates = dedup_by_name(templates);
                let count = templates.len();
                (Self { path, templates }, LoadOutcome::Loaded { count })
            }
            Ok(None) => (
                Self {
                    path,
                    templates: default_templates(),
                },
                LoadOutcome::Defaulted {
                    reason: "no template file".to_string(),
                },
            ),
            Err(e) => (
                Self {
                    path,
                    templates: default_templates(),
                },
                LoadOutcome::Defaulted {
                    reason: format!("{e:#}"),
                },
            ),
        }
    }

    /// Strict load for the explicit "load from file" action. Unlike [`open`],
    /// a missing or malformed file surfaces as an error here.
    ///
    /// [`open`]: TemplateStore::open
    pub fn load_strict(path: &Path) -> Result<Vec<Template>> {
        persist::load_required(path)
    }

    /// Serializes the template list as indented JSON to the store's path,
    /// creating parent directories. Returns the resolved path on success.
    pub fn save(&self) -> Result<PathBuf> {
        persist::save_to_path(&self.path, &self.templates)?;
        Ok(self.path.clone())
    }

    /// Inserts a template, or overwrites the pattern of an existing one with
    /// the same name (keeping its position), then persists immediately.
    pub fn add(&mut self, name: &str, pattern: &str) -> Result<PathBuf> {
        match self.templates.iter_mut().find(|t| t.name == name) {
            Some(t) => t.pattern = pattern.to_string(),
            None => self.templates.push(Template::new(name, pattern)),
        }
        self.save()
    }

    /// Removes the template with `name` and persists. An absent name leaves
    /// both memory and disk untouched.
    pub fn remove(&mut self, name: &str) -> Result<RemoveOutcome> {
        let before = self.templates.len();
        self.templates.retain(|t| t.name != name);
        if self.templates.len() == before {
            return Ok(RemoveOutcome::NotFound);
        }
        self.save()?;
        Ok(RemoveOutcome::Removed)
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Collapses duplicate names to the last occurrence, at the first position.
fn dedup_by_name(templates: Vec<Template>) -> Vec<Template> {
    let mut out: Vec<Template> = Vec::with_capacity(templates.len());
    for t in templates {
        match out.iter_mut().find(|e| e.name == t.name) {
            Some(e) => e.pattern = t.pattern,
            None => out.push(t),
        }
    }
    out
}
