//! Focused unit tests covering compute configuration and pipeline wiring.

use super::helpers::{StubProviderBuilder, Workspace, with_keys, without_keys};
use super::*;
use crate::compute::{
    ComputeArgs, ComputeConfig, ComputeSummary, resolve_with_logging, run_compute_with,
};
use camino::Utf8PathBuf;
use depot_core::RouteError;
use depot_core::test_support::StubRouteProvider;
use depot_data::{CredentialsError, ProviderKind, WorkbookError};
use rstest::rstest;
use std::time::Duration;

#[rstest]
fn converting_compute_without_workbook_errors() {
    let err = ComputeConfig::try_from(ComputeArgs::default()).expect_err("missing workbook");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_WORKBOOK);
            assert_eq!(env, ENV_WORKBOOK);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn compute_config_applies_defaults() {
    let args = ComputeArgs {
        workbook: Some(Utf8PathBuf::from("depots.xlsx")),
        ..ComputeArgs::default()
    };

    let config = ComputeConfig::try_from(args).expect("config should build");

    assert_eq!(config.provider, ProviderKind::Google);
    assert_eq!(config.delay, Duration::from_millis(200));
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.log_file, Utf8PathBuf::from("depot_distances.log"));
    assert_eq!(config.limit, None);
    assert_eq!(config.layout.input_sheet, "Depots");
}

#[rstest]
fn cli_flags_reach_compute_args() {
    let cli = Cli::try_parse_from([
        "depot-matrix",
        "compute",
        "book.xlsx",
        "--provider",
        "mapquest",
        "--limit",
        "3",
        "--delay-ms",
        "0",
        "--timeout-secs",
        "5",
    ])
    .expect("arguments should parse");

    let Command::Compute(args) = cli.command;
    let config = ComputeConfig::try_from(args).expect("config should build");
    assert_eq!(config.workbook, Utf8PathBuf::from("book.xlsx"));
    assert_eq!(config.provider, ProviderKind::MapQuest);
    assert_eq!(config.limit, Some(3));
    assert_eq!(config.delay, Duration::ZERO);
    assert_eq!(config.timeout, Duration::from_secs(5));
}

#[rstest]
fn unknown_provider_is_rejected_by_clap() {
    let err = Cli::try_parse_from(["depot-matrix", "compute", "book.xlsx", "--provider", "osrm"])
        .expect_err("osrm is not a provider");
    assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
}

#[rstest]
fn validate_sources_reports_missing_workbook() {
    let workspace = Workspace::new();

    let err = workspace.config().validate_sources().expect_err("no workbook yet");

    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_WORKBOOK),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file() {
    let workspace = Workspace::new();
    std::fs::create_dir(&workspace.workbook).expect("workbook directory");

    let err = workspace.config().validate_sources().expect_err("directory");

    match err {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_WORKBOOK),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn computes_and_writes_every_pair() {
    let workspace = Workspace::new();
    workspace.write_three_depots();
    let builder = StubProviderBuilder::answering();

    let summary =
        run_compute_with(&workspace.config(), &with_keys, &builder).expect("run should succeed");

    assert_eq!(
        summary,
        ComputeSummary {
            locations: 3,
            attempted: 6,
            written: 6,
            failed: 0,
        }
    );
    let rows = workspace.output_rows();
    assert_eq!(rows.len(), 7);
    assert_eq!(
        rows.get(1).map(|row| row.iter().take(4).cloned().collect::<Vec<_>>()),
        Some(vec![
            "A".to_owned(),
            "1 Main St".to_owned(),
            "B".to_owned(),
            "2 Oak Ave".to_owned(),
        ])
    );
}

#[rstest]
fn limit_caps_provider_calls() {
    let workspace = Workspace::new();
    workspace.write_three_depots();
    let builder = StubProviderBuilder::answering();
    let config = ComputeConfig {
        limit: Some(2),
        ..workspace.config()
    };

    let summary = run_compute_with(&config, &with_keys, &builder).expect("run should succeed");

    assert_eq!(summary.attempted, 2);
    assert_eq!(builder.stub.call_count(), 2);
    assert_eq!(workspace.output_rows().len(), 3);
}

#[rstest]
fn failed_pair_is_counted_and_omitted() {
    let workspace = Workspace::new();
    workspace.write_three_depots();
    let builder = StubProviderBuilder {
        stub: StubRouteProvider::with_minutes_and_miles(5.0, 2.0).failing_on(
            "1 Main St",
            "2 Oak Ave",
            RouteError::ServiceError {
                code: "NOT_FOUND".to_owned(),
                message: String::new(),
            },
        ),
    };

    let summary =
        run_compute_with(&workspace.config(), &with_keys, &builder).expect("run should succeed");

    assert_eq!(summary.written, 5);
    assert_eq!(summary.failed, 1);
}

#[rstest]
fn missing_column_fails_before_any_provider_call() {
    let workspace = Workspace::new();
    workspace.write_depots_without_address();
    let builder = StubProviderBuilder::answering();

    let err = run_compute_with(&workspace.config(), &with_keys, &builder)
        .expect_err("missing column is fatal");

    match err {
        CliError::ReadWorkbook(WorkbookError::MissingColumns { columns, .. }) => {
            assert_eq!(columns, ["Depot Address".to_owned()]);
        }
        other => panic!("expected MissingColumns, found {other:?}"),
    }
    assert_eq!(builder.stub.call_count(), 0);
    assert!(workspace.output_rows().is_empty());
}

#[rstest]
fn missing_credentials_fail_before_any_provider_call() {
    let workspace = Workspace::new();
    workspace.write_three_depots();
    let builder = StubProviderBuilder::answering();

    let err = run_compute_with(&workspace.config(), &without_keys, &builder)
        .expect_err("credentials are required");

    match err {
        CliError::Credentials(CredentialsError::MissingKey { variable }) => {
            assert_eq!(variable, "MAPQUEST_API_KEY");
        }
        other => panic!("expected MissingKey, found {other:?}"),
    }
    assert_eq!(builder.stub.call_count(), 0);
}

#[rstest]
fn single_depot_writes_header_only() {
    let workspace = Workspace::new();
    workspace.write_depots(&[["A", "1 Main St"]]);
    let builder = StubProviderBuilder::answering();

    let summary =
        run_compute_with(&workspace.config(), &with_keys, &builder).expect("run should succeed");

    assert_eq!(summary.attempted, 0);
    assert_eq!(workspace.output_rows().len(), 1);
}

#[rstest]
fn setup_failure_is_written_to_the_fallback_log() {
    let workspace = Workspace::new();
    let log_file = workspace.root.join("fallback.log");

    let err = resolve_with_logging(ComputeArgs::default(), &log_file)
        .expect_err("missing workbook");
    report(&err);

    assert!(logging::is_active(), "fallback logger should be installed");
    let contents = std::fs::read_to_string(&log_file).expect("log file should exist");
    assert!(
        contents.contains(ENV_WORKBOOK),
        "log should record the missing argument, found {contents:?}"
    );
}
