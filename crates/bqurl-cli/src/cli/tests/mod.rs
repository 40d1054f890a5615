//! CLI parse tests.

use super::{exit_code, Cli, CliCommand, FormatArg, EXIT_NOT_IMPLEMENTED};
use anyhow::Context;
use bqurl_core::TranslateError;
use clap::Parser;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_parse() {
    match parse(&["bqurl", "parse", "bigquery://proj/ds"]) {
        CliCommand::Parse {
            url,
            project,
            format,
        } => {
            assert_eq!(url, "bigquery://proj/ds");
            assert!(project.is_none());
            assert!(format.is_none());
        }
        _ => panic!("expected Parse"),
    }
}

#[test]
fn cli_parse_parse_with_options() {
    match parse(&[
        "bqurl",
        "parse",
        "bigquery:///ds?dry_run=true",
        "--project",
        "fallback",
        "--format",
        "text",
    ]) {
        CliCommand::Parse {
            url,
            project,
            format,
        } => {
            assert_eq!(url, "bigquery:///ds?dry_run=true");
            assert_eq!(project.as_deref(), Some("fallback"));
            assert_eq!(format, Some(FormatArg::Text));
        }
        _ => panic!("expected Parse with options"),
    }
}

#[test]
fn cli_parse_params() {
    match parse(&["bqurl", "params"]) {
        CliCommand::Params => {}
        _ => panic!("expected Params"),
    }
}

#[test]
fn cli_parse_rejects_bad_format() {
    assert!(Cli::try_parse_from(["bqurl", "parse", "bigquery://", "--format", "yaml"]).is_err());
}

#[test]
fn cli_parse_requires_url() {
    assert!(Cli::try_parse_from(["bqurl", "parse"]).is_err());
}

#[test]
fn exit_code_not_implemented() {
    let err = anyhow::Error::from(TranslateError::NotImplemented {
        param: "udf_resources",
    });
    assert_eq!(exit_code(&err), EXIT_NOT_IMPLEMENTED);
    assert_eq!(EXIT_NOT_IMPLEMENTED, 3);
}

#[test]
fn exit_code_not_implemented_through_context() {
    let res: Result<(), TranslateError> = Err(TranslateError::NotImplemented {
        param: "time_partitioning",
    });
    let err = res.context("translate bigquery:///ds").unwrap_err();
    assert_eq!(exit_code(&err), EXIT_NOT_IMPLEMENTED);
}

#[test]
fn exit_code_other_errors() {
    let disallowed = anyhow::Error::from(TranslateError::Disallowed {
        param: "use_legacy_sql",
    });
    assert_eq!(exit_code(&disallowed), 1);
    let bad_value = anyhow::Error::from(
        bqurl_core::translate_str("bigquery:///?dry_run=maybe").unwrap_err(),
    );
    assert_eq!(exit_code(&bad_value), 1);
    assert_eq!(exit_code(&anyhow::anyhow!("config unreadable")), 1);
}
