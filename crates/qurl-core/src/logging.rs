//! Logging init: file under the XDG state dir, or fallback to stderr.

use std::fs;
use std::io;
use std::sync::Mutex;

use anyhow::Result;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,qurl=debug"))
}

fn open_state_log() -> Result<fs::File> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("qurl")?;
    let log_dir = xdg_dirs.get_state_home().join("qurl");
    fs::create_dir_all(&log_dir)?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("qurl.log"))?;
    Ok(file)
}

/// Initialize structured logging to `~/.local/state/qurl/qurl.log`. When the
/// state dir is unwritable, logs go to stderr instead so the CLI still runs;
/// stdout stays reserved for command output either way.
pub fn init() {
    let writer = match open_state_log() {
        Ok(file) => BoxMakeWriter::new(Mutex::new(file)),
        Err(_) => BoxMakeWriter::new(io::stderr),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .init();

    tracing::debug!("qurl logging initialized");
}
