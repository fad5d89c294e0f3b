//! Tests for resolve and batch subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_resolve() {
    match parse(&["dlroute", "resolve", "https://imgur.com/abc"]) {
        CliCommand::Resolve { urls, json, strict } => {
            assert_eq!(urls, ["https://imgur.com/abc"]);
            assert!(!json);
            assert!(!strict);
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_resolve_many_with_flags() {
    match parse(&[
        "dlroute",
        "resolve",
        "https://imgur.com/abc",
        "v.redd.it/abcd",
        "--json",
        "--strict",
    ]) {
        CliCommand::Resolve { urls, json, strict } => {
            assert_eq!(urls, ["https://imgur.com/abc", "v.redd.it/abcd"]);
            assert!(json);
            assert!(strict);
        }
        _ => panic!("expected Resolve with flags"),
    }
}

#[test]
fn cli_parse_resolve_requires_a_url() {
    assert!(Cli::try_parse_from(["dlroute", "resolve"]).is_err());
}

#[test]
fn cli_parse_batch_defaults() {
    match parse(&["dlroute", "batch", "links.txt"]) {
        CliCommand::Batch {
            path,
            jobs,
            json,
            strict,
        } => {
            assert_eq!(path, "links.txt");
            assert!(jobs.is_none());
            assert!(!json);
            assert!(!strict);
        }
        _ => panic!("expected Batch"),
    }
}

#[test]
fn cli_parse_batch_stdin_with_jobs() {
    match parse(&["dlroute", "batch", "-", "--jobs", "4", "--json"]) {
        CliCommand::Batch {
            path, jobs, json, ..
        } => {
            assert_eq!(path, "-");
            assert_eq!(jobs, Some(4));
            assert!(json);
        }
        _ => panic!("expected Batch with --jobs"),
    }
}

#[test]
fn cli_parse_batch_rejects_bad_jobs() {
    assert!(Cli::try_parse_from(["dlroute", "batch", "x.txt", "--jobs", "many"]).is_err());
}
