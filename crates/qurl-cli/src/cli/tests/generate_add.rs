//! Tests for the bare-URL generate form and the add subcommand.

use super::parse;
use crate::cli::CliCommand;

#[test]
fn cli_parse_bare_url_generates() {
    let cli = parse(&["qurl", "https://abc.trycloudflare.com"]);
    assert_eq!(cli.url.as_deref(), Some("https://abc.trycloudflare.com"));
    assert!(cli.command.is_none());
}

#[test]
fn cli_parse_no_args_is_interactive() {
    let cli = parse(&["qurl"]);
    assert!(cli.url.is_none());
    assert!(cli.command.is_none());
}

#[test]
fn cli_parse_add() {
    let cli = parse(&["qurl", "add", "Ping", "[url]/ping"]);
    assert!(cli.url.is_none());
    match cli.command {
        Some(CliCommand::Add { name, template }) => {
            assert_eq!(name, "Ping");
            assert_eq!(template, "[url]/ping");
        }
        other => panic!("expected Add, got {other:?}"),
    }
}

#[test]
fn cli_parse_add_requires_both_arguments() {
    use clap::Parser;
    assert!(crate::cli::Cli::try_parse_from(["qurl", "add", "Ping"]).is_err());
}
