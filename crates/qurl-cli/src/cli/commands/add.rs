//! `qurl add <name> <template>` – insert or overwrite a template and persist.

use anyhow::{bail, Result};
use qurl_core::store::TemplateStore;

pub fn run_add(store: &mut TemplateStore, name: &str, template: &str) -> Result<()> {
    // The store's data model permits empty names; the CLI rejects them so the
    // entry stays addressable by `remove`.
    if name.trim().is_empty() {
        bail!("template name must not be empty");
    }
    let path = store.add(name, template)?;
    println!("Added template {name:?} (saved to {})", path.display());
    Ok(())
}
