//! Best-effort system clipboard write via whichever helper binary exists.

use std::io::Write;
use std::process::{Command, Stdio};

/// Candidate clipboard writers, tried in order: macOS, Wayland, then X11.
const WRITERS: &[&[&str]] = &[
    &["pbcopy"],
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
];

/// Pipes `text` to the first clipboard helper that accepts it. Returns
/// whether a copy succeeded; absence of every helper is not an error.
pub fn copy(text: &str) -> bool {
    for argv in WRITERS {
        if pipe_to(argv, text) {
            tracing::debug!("copied {} bytes via {}", text.len(), argv[0]);
            return true;
        }
    }
    tracing::debug!("no clipboard helper available");
    false
}

fn pipe_to(argv: &[&str], text: &str) -> bool {
    let mut child = match Command::new(argv[0])
        .args(&argv[1..])
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(c) => c,
        Err(_) => return false,
    };

    if let Some(stdin) = child.stdin.as_mut() {
        if stdin.write_all(text.as_bytes()).is_err() {
            let _ = child.kill();
            let _ = child.wait();
            return false;
        }
    }
    drop(child.stdin.take());

    matches!(child.wait(), Ok(status) if status.success())
}
