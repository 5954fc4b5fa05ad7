//! Per-file validation reports.

use std::path::{Path, PathBuf};

use polars::prelude::DataFrame;

use pev_model::{PATIENT_ID_COLUMN, SourceTable};

use crate::checks::{distinct_count, distinct_where_present, malformed_dates};
use crate::error::Result;
use crate::frame::read_source_frame;
use crate::summary::{ColumnSummary, column_summary};

/// Column whose presence marks an event as coded.
pub const CODE_COLUMN: &str = "icd_code";

/// Validation findings for one source file.
#[derive(Debug, Clone)]
pub struct SourceReport {
    pub table: SourceTable,
    pub path: PathBuf,
    pub rows: usize,
    pub columns: Vec<ColumnSummary>,
    /// Rows whose date column is null or not `YYYY-MM-DD` shaped.
    pub malformed_dates: DataFrame,
    pub distinct_patients: usize,
    /// Distinct patients with at least one non-null code. Events only.
    pub coded_patients: Option<usize>,
}

impl SourceReport {
    pub fn malformed_count(&self) -> usize {
        self.malformed_dates.height()
    }
}

/// Validates one source file.
pub fn validate_source(table: SourceTable, path: &Path) -> Result<SourceReport> {
    let span = tracing::info_span!("validate", table = %table, path = %path.display());
    let _guard = span.enter();

    let df = read_source_frame(path)?;
    let columns = column_summary(&df);
    let malformed = malformed_dates(&df, table.date_column())?;
    let distinct_patients = distinct_count(&df, PATIENT_ID_COLUMN)?;
    let coded_patients = match table {
        SourceTable::Demographics => None,
        SourceTable::Events => Some(distinct_where_present(&df, PATIENT_ID_COLUMN, CODE_COLUMN)?),
    };

    if malformed.height() > 0 {
        tracing::warn!(
            column = table.date_column(),
            rows = malformed.height(),
            "dates without YYYY-MM-DD shape"
        );
    }
    tracing::info!(rows = df.height(), distinct_patients, "validated");

    Ok(SourceReport {
        table,
        path: path.to_path_buf(),
        rows: df.height(),
        columns,
        malformed_dates: malformed,
        distinct_patients,
        coded_patients,
    })
}

/// Outcome of validating one source file.
#[derive(Debug)]
pub struct SourceOutcome {
    pub table: SourceTable,
    pub path: PathBuf,
    pub result: Result<SourceReport>,
}

/// Validates every source independently; one failing file does not stop the rest.
pub fn validate_sources(sources: &[(SourceTable, PathBuf)]) -> Vec<SourceOutcome> {
    sources
        .iter()
        .map(|(table, path)| {
            let result = validate_source(*table, path);
            if let Err(error) = &result {
                tracing::error!(table = %table, error = %error, "validation failed");
            }
            SourceOutcome {
                table: *table,
                path: path.clone(),
                result,
            }
        })
        .collect()
}
