//! CLI for the qurl URL template generator.

mod clipboard;
mod commands;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};
use qurl_core::store::TemplateStore;

use commands::{run_add, run_generate, run_interactive, run_list, run_remove};

/// Top-level CLI for the qurl URL template generator.
#[derive(Debug, Parser)]
#[command(name = "qurl")]
#[command(about = "qurl: expand a base URL into derived test endpoints", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Source URL substituted into every template. Omit to be prompted.
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List all stored templates.
    List,

    /// Add a template (or overwrite one with the same name) and persist.
    Add {
        /// Template name (unique key).
        name: String,
        /// Pattern containing the [url] placeholder.
        template: String,
    },

    /// Remove a template by name and persist.
    Remove {
        /// Template name.
        name: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let path = TemplateStore::default_path()?;
        let (mut store, outcome) = TemplateStore::open(path);
        tracing::debug!("template store opened: {:?}", outcome);

        match (cli.url, cli.command) {
            (Some(url), _) => run_generate(&store, &url)?,
            (None, Some(CliCommand::List)) => run_list(&store),
            (None, Some(CliCommand::Add { name, template })) => {
                run_add(&mut store, &name, &template)?
            }
            (None, Some(CliCommand::Remove { name })) => run_remove(&mut store, &name)?,
            (None, None) => run_interactive(&store)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
