//! `qurl remove <name>` – delete a template by name and persist.

use anyhow::Result;
use qurl_core::store::{RemoveOutcome, TemplateStore};

pub fn run_remove(store: &mut TemplateStore, name: &str) -> Result<()> {
    match store.remove(name)? {
        RemoveOutcome::Removed => println!("Removed template {name:?}"),
        RemoveOutcome::NotFound => println!("Template not found: {name}"),
    }
    Ok(())
}
