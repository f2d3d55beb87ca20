//! `qurl <url>` – expand every template against the given source URL.

use anyhow::Result;
use qurl_core::expand::{expand, ExpandError};
use qurl_core::store::TemplateStore;
use qurl_core::template::PLACEHOLDER;

use crate::cli::report;

pub fn run_generate(store: &TemplateStore, source_url: &str) -> Result<()> {
    match expand(source_url, store.templates(), PLACEHOLDER) {
        Ok(results) => print!("{}", report::build(source_url, &results)),
        // Reported, but not fatal: the request is aborted and stored state is
        // untouched.
        Err(ExpandError::EmptySourceUrl) => eprintln!("Error: no source URL provided"),
    }
    Ok(())
}
