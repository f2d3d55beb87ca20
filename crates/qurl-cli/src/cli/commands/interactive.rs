//! No-argument mode: prompt for a source URL, print the report, then make a
//! best-effort clipboard copy of the generated block.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use qurl_core::expand::{expand, ExpandError};
use qurl_core::store::TemplateStore;
use qurl_core::template::PLACEHOLDER;

use crate::cli::{clipboard, report};

pub fn run_interactive(store: &TemplateStore) -> Result<()> {
    print!("Enter source URL: ");
    io::stdout().flush().context("flush prompt")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("read source URL")?;
    let source_url = line.trim();

    match expand(source_url, store.templates(), PLACEHOLDER) {
        Ok(results) => {
            print!("{}", report::build(source_url, &results));
            if clipboard::copy(&report::clipboard_block(&results)) {
                println!("All URLs copied to clipboard.");
            }
        }
        Err(ExpandError::EmptySourceUrl) => eprintln!("Error: no source URL provided"),
    }
    Ok(())
}
