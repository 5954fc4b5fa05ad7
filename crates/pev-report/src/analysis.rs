//! Runs the analysis queries.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use pev_store::{PatientStore, Result};

use crate::queries::{AGE_SPREAD, GENDER_COUNTS, TIMELINE_SPREAD, VALID_PATIENTS};
use crate::stats::{GenderCounts, SpreadStats};

/// Results of every analysis query.
///
/// Each query succeeds or fails on its own. Spreads are `None` when no
/// patient has a usable value.
#[derive(Debug)]
pub struct AnalysisReport {
    pub valid_patients: Result<u64>,
    pub timeline_days: Result<Option<SpreadStats>>,
    pub gender_counts: Result<GenderCounts>,
    pub age_years: Result<Option<SpreadStats>>,
}

impl AnalysisReport {
    pub fn has_errors(&self) -> bool {
        self.valid_patients.is_err()
            || self.timeline_days.is_err()
            || self.gender_counts.is_err()
            || self.age_years.is_err()
    }
}

/// Runs all four queries against the joined view.
pub fn run_analysis(store: &PatientStore) -> AnalysisReport {
    let report = AnalysisReport {
        valid_patients: logged("valid_patients", valid_patient_count(store)),
        timeline_days: logged("timeline_days", timeline_stats(store)),
        gender_counts: logged("gender_counts", gender_counts(store)),
        age_years: logged("age_years", age_stats(store)),
    };
    debug!(?report, "analysis complete");
    report
}

fn logged<T>(query: &'static str, result: Result<T>) -> Result<T> {
    if let Err(error) = &result {
        warn!(query, kind = error.kind(), %error, "analysis query failed");
    }
    result
}

/// Distinct patients in the joined view.
pub fn valid_patient_count(store: &PatientStore) -> Result<u64> {
    let count: i64 = store
        .connection()
        .query_row(VALID_PATIENTS, [], |row| row.get(0))?;
    Ok(count.max(0) as u64)
}

/// Spread of days between each patient's first and last event.
pub fn timeline_stats(store: &PatientStore) -> Result<Option<SpreadStats>> {
    spread(store, TIMELINE_SPREAD)
}

/// Spread of whole-year ages at each patient's last event.
pub fn age_stats(store: &PatientStore) -> Result<Option<SpreadStats>> {
    spread(store, AGE_SPREAD)
}

/// Distinct patients per gender label.
pub fn gender_counts(store: &PatientStore) -> Result<GenderCounts> {
    let mut stmt = store.connection().prepare(GENDER_COUNTS)?;
    let counts = stmt
        .query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?.max(0) as u64))
        })?
        .collect::<rusqlite::Result<BTreeMap<_, _>>>()?;
    Ok(GenderCounts(counts))
}

fn spread(store: &PatientStore, sql: &str) -> Result<Option<SpreadStats>> {
    let row: (Option<i64>, Option<i64>, Option<i64>) = store
        .connection()
        .query_row(sql, [], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?;
    Ok(match row {
        (Some(max), Some(min), Some(median)) => Some(SpreadStats { max, min, median }),
        _ => None,
    })
}
