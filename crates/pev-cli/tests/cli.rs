//! Integration tests for argument parsing and the end-to-end pipeline.

use std::fs;
use std::path::Path;

use clap::Parser;
use clap::error::ErrorKind;

use pev_cli::cli::{Cli, Mode, normalize_legacy_args};
use pev_cli::commands::{StageOutput, run_pipeline, run_validate};
use pev_cli::summary::{analysis_table, column_table, load_summary_table};
use pev_model::Layout;

const DEMO: &str = "\
patient_id|birth_date|gender
1|1970-03-01|F
2|1985-07-15|M
";

const EVENTS: &str = "\
patient_id|date|icd_version|icd_code
1|2015-01-01|9|250.00
1|2016-06-30|10|E11.9
2|2018-02-02|10|I10
";

fn write_sources(dir: &Path) {
    fs::write(dir.join("demo.psv"), DEMO).unwrap();
    fs::write(dir.join("events.psv"), EVENTS).unwrap();
}

#[test]
fn test_mode_is_required() {
    let err = Cli::try_parse_from(["patient-events", "--load"]).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_modes_are_exclusive() {
    let err = Cli::try_parse_from(["patient-events", "--run-json", "--run-analysis"])
        .err()
        .unwrap();
    assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
}

#[test]
fn test_underscore_aliases() {
    let cli = Cli::try_parse_from(["patient-events", "--load", "--run_json"]).unwrap();
    assert!(cli.load);
    assert_eq!(cli.mode(), Mode::Json);

    let cli = Cli::try_parse_from(["patient-events", "--run_analysis"]).unwrap();
    assert!(!cli.load);
    assert_eq!(cli.mode(), Mode::Analysis);
}

#[test]
fn test_single_dash_load() {
    let cli = Cli::try_parse_from(normalize_legacy_args([
        "patient-events",
        "-load",
        "--run_json",
    ]))
    .unwrap();
    assert!(cli.load);
    assert_eq!(cli.mode(), Mode::Json);

    let err = Cli::try_parse_from(["patient-events", "-load", "--run_json"])
        .err()
        .unwrap();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}

#[test]
fn test_workdir_defaults_to_current_directory() {
    let cli = Cli::try_parse_from(["patient-events", "--run-json"]).unwrap();
    assert_eq!(cli.workdir, Path::new("."));
}

#[test]
fn test_load_then_export() {
    let dir = tempfile::tempdir().unwrap();
    write_sources(dir.path());
    let layout = Layout::rooted(dir.path());

    let result = run_pipeline(&layout, true, Mode::Json).unwrap();

    assert!(!result.has_errors());
    let load = result.load.as_ref().unwrap();
    assert_eq!(*load.patient_events.as_ref().unwrap(), 3);
    let rendered = load_summary_table(load).to_string();
    assert!(rendered.contains("demo"));
    assert!(rendered.contains("events"));

    let StageOutput::Export(Ok(summary)) = &result.output else {
        panic!("expected export summary");
    };
    assert_eq!(summary.written.len(), 2);
    assert!(layout.document_dir().join("1.json").is_file());
    assert!(layout.document_dir().join("2.json").is_file());
}

#[test]
fn test_analysis_after_separate_load() {
    let dir = tempfile::tempdir().unwrap();
    write_sources(dir.path());
    let layout = Layout::rooted(dir.path());
    run_pipeline(&layout, true, Mode::Analysis).unwrap();

    let result = run_pipeline(&layout, false, Mode::Analysis).unwrap();

    assert!(result.load.is_none());
    assert!(!result.has_errors());
    let StageOutput::Analysis(report) = &result.output else {
        panic!("expected analysis report");
    };
    assert_eq!(*report.valid_patients.as_ref().unwrap(), 2);
    let rendered = analysis_table(report).to_string();
    assert!(rendered.contains("Gender F"));
    assert!(rendered.contains("Gender M"));
}

#[test]
fn test_export_without_load_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let layout = Layout::rooted(dir.path());

    let result = run_pipeline(&layout, false, Mode::Json).unwrap();

    assert!(result.has_errors());
    assert!(matches!(result.output, StageOutput::Export(Err(_))));
    assert!(!layout.document_dir().exists());
}

#[test]
fn test_missing_sources_fail_load() {
    let dir = tempfile::tempdir().unwrap();
    let layout = Layout::rooted(dir.path());

    let result = run_pipeline(&layout, true, Mode::Analysis).unwrap();

    assert!(result.has_errors());
    let load = result.load.as_ref().unwrap();
    assert!(load.tables.iter().all(|t| t.result.is_err()));
}

#[test]
fn test_validate_sources() {
    let dir = tempfile::tempdir().unwrap();
    write_sources(dir.path());

    let outcomes = run_validate(&Layout::rooted(dir.path()));

    assert_eq!(outcomes.len(), 2);
    let demo = outcomes[0].result.as_ref().unwrap();
    assert_eq!(demo.distinct_patients, 2);
    assert_eq!(demo.malformed_count(), 0);
    let events = outcomes[1].result.as_ref().unwrap();
    assert_eq!(events.coded_patients, Some(2));

    let rendered = column_table(events).to_string();
    assert!(rendered.contains("icd_version"));
}
