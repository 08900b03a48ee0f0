//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;
use clap_complete::Shell;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_credit() {
    match parse(&[
        "cwa",
        "credit",
        "https://commons.wikimedia.org/wiki/File:Example.jpg",
    ]) {
        CliCommand::Credit { url, plain } => {
            assert_eq!(url, "https://commons.wikimedia.org/wiki/File:Example.jpg");
            assert!(!plain);
        }
        _ => panic!("expected Credit"),
    }
}

#[test]
fn cli_parse_credit_plain() {
    match parse(&[
        "cwa",
        "credit",
        "https://commons.wikimedia.org/wiki/File:Example.jpg",
        "--plain",
    ]) {
        CliCommand::Credit { plain, .. } => assert!(plain),
        _ => panic!("expected Credit with --plain"),
    }
}

#[test]
fn cli_parse_inspect() {
    match parse(&[
        "cwa",
        "inspect",
        "https://commons.wikimedia.org/wiki/File:Example.jpg",
    ]) {
        CliCommand::Inspect { url, plain } => {
            assert_eq!(url, "https://commons.wikimedia.org/wiki/File:Example.jpg");
            assert!(!plain);
        }
        _ => panic!("expected Inspect"),
    }
}

#[test]
fn cli_parse_locate() {
    match parse(&["cwa", "locate", "https://commons.wikimedia.org/wiki/File:X.jpg"]) {
        CliCommand::Locate { url } => {
            assert_eq!(url, "https://commons.wikimedia.org/wiki/File:X.jpg");
        }
        _ => panic!("expected Locate"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["cwa", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_rejects_missing_url() {
    assert!(Cli::try_parse_from(["cwa", "credit"]).is_err());
    assert!(Cli::try_parse_from(["cwa", "locate"]).is_err());
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["cwa", "download", "x"]).is_err());
}
