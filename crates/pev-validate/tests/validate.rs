//! Integration tests for source file validation.

use std::fs;
use std::path::PathBuf;

use pev_model::SourceTable;
use pev_validate::{ValidateError, validate_source, validate_sources};
use tempfile::TempDir;

const DEMO: &str = "\
patient_id|birth_date|gender
1|1970-03-01|F
2|1985/07/15|M
3||F
4|2020-13-40|
";

const EVENTS: &str = "\
patient_id|date|icd_version|icd_code
1|2015-01-01|9|250.00
1|2016-06-30|10|
2|2018-02-02|10|I10
2|20180303|10|I10
3|2019-03-03|10|
";

fn write_file(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn test_demographics_report() {
    let (_dir, path) = write_file("demo.psv", DEMO);
    let report = validate_source(SourceTable::Demographics, &path).unwrap();

    assert_eq!(report.rows, 4);
    assert_eq!(report.distinct_patients, 4);
    assert_eq!(report.coded_patients, None);

    let names: Vec<&str> = report.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["patient_id", "birth_date", "gender"]);

    let birth = &report.columns[1];
    assert_eq!((birth.non_null, birth.nulls), (3, 1));
    let gender = &report.columns[2];
    assert_eq!((gender.non_null, gender.nulls), (3, 1));

    // Slash-separated and empty dates fail; an impossible calendar date passes.
    assert_eq!(report.malformed_count(), 2);
}

#[test]
fn test_events_report_counts_coded_patients() {
    let (_dir, path) = write_file("events.psv", EVENTS);
    let report = validate_source(SourceTable::Events, &path).unwrap();

    assert_eq!(report.rows, 5);
    assert_eq!(report.distinct_patients, 3);
    assert_eq!(report.coded_patients, Some(2));
    assert_eq!(report.malformed_count(), 1);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = validate_source(SourceTable::Events, &dir.path().join("events.psv"));
    assert!(matches!(result, Err(ValidateError::FileNotFound { .. })));
}

#[test]
fn test_missing_date_column() {
    let (_dir, path) = write_file("events.psv", "patient_id|icd_code\n1|I10\n");
    let result = validate_source(SourceTable::Events, &path);
    assert!(matches!(result, Err(ValidateError::MissingColumn { column }) if column == "date"));
}

#[test]
fn test_one_failing_source_does_not_stop_the_other() {
    let (dir, demo) = write_file("demo.psv", DEMO);
    let sources = vec![
        (SourceTable::Demographics, demo),
        (SourceTable::Events, dir.path().join("events.psv")),
    ];
    let outcomes = validate_sources(&sources);
    assert_eq!(outcomes.len(), 2);
    assert!(outcomes[0].result.is_ok());
    assert!(outcomes[1].result.is_err());
}

#[test]
fn test_codes_turning_alphanumeric_late_in_file() {
    let mut events = String::from("patient_id|date|icd_version|icd_code\n");
    for i in 0..150 {
        events.push_str(&format!("{i}|2020-01-01|9|250.{:02}\n", i % 100));
    }
    events.push_str("7|2020-01-01|9|V70.0\n");
    let (_dir, path) = write_file("events.psv", &events);

    let report = validate_source(SourceTable::Events, &path).unwrap();

    assert_eq!(report.rows, 151);
    assert_eq!(report.distinct_patients, 150);
    assert_eq!(report.coded_patients, Some(150));
    assert_eq!(report.malformed_count(), 0);
    let code = report.columns.iter().find(|c| c.name == "icd_code").unwrap();
    assert_eq!((code.non_null, code.nulls), (151, 0));
}
