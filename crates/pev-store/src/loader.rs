//! Loads source files into their tables and rebuilds the joined view.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rusqlite::{ErrorCode, params_from_iter};
use tracing::{info, info_span, warn};

use pev_ingest::read_delimited;
use pev_model::SourceTable;

use crate::error::Result;
use crate::identifier::parse_columns;
use crate::schema::{ensure_table, insert_sql};
use crate::store::PatientStore;
use crate::view::rebuild_patient_events;

/// Why a source row was not inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Field count differs from the header.
    Arity { expected: usize, found: usize },
    /// The row violates a table constraint (for example a duplicate primary key).
    Constraint { message: String },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arity { expected, found } => {
                write!(f, "expected {expected} fields, found {found}")
            }
            Self::Constraint { message } => write!(f, "constraint violation: {message}"),
        }
    }
}

/// A source row that was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowRejection {
    pub line: u64,
    pub reason: RejectReason,
}

/// Outcome of loading one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLoad {
    pub table: SourceTable,
    pub columns: usize,
    pub inserted: usize,
    pub rejected: Vec<RowRejection>,
}

/// One table's load attempt.
#[derive(Debug)]
pub struct TableOutcome {
    pub table: SourceTable,
    pub path: PathBuf,
    pub result: Result<TableLoad>,
}

/// Everything a load run did.
#[derive(Debug)]
pub struct LoadSummary {
    pub tables: Vec<TableOutcome>,
    /// Row count of the rebuilt `patient_events` table.
    pub patient_events: Result<usize>,
}

impl LoadSummary {
    /// True when a table or the joined view failed outright.
    ///
    /// Rejected rows alone do not count.
    pub fn has_errors(&self) -> bool {
        self.tables.iter().any(|t| t.result.is_err()) || self.patient_events.is_err()
    }

    /// Total rejected rows across all tables.
    pub fn rejected_rows(&self) -> usize {
        self.tables
            .iter()
            .filter_map(|t| t.result.as_ref().ok())
            .map(|load| load.rejected.len())
            .sum()
    }
}

/// Loads every source in order, then rebuilds `patient_events`.
///
/// A failing table is recorded and the remaining tables still load; the view
/// is rebuilt from whatever the base tables hold afterwards.
pub fn load_sources(store: &mut PatientStore, sources: &[(SourceTable, PathBuf)]) -> LoadSummary {
    let mut tables = Vec::with_capacity(sources.len());
    for (table, path) in sources {
        let span = info_span!("load_table", table = %table, path = %path.display());
        let result = span.in_scope(|| load_table(store, *table, path));
        if let Err(error) = &result {
            warn!(table = %table, kind = error.kind(), %error, "table load failed");
        }
        tables.push(TableOutcome {
            table: *table,
            path: path.clone(),
            result,
        });
    }

    let patient_events = rebuild_patient_events(store);
    if let Err(error) = &patient_events {
        warn!(kind = error.kind(), %error, "patient_events rebuild failed");
    }
    LoadSummary {
        tables,
        patient_events,
    }
}

/// Creates `table` if needed and inserts every row of the file at `path`.
///
/// Accepted rows commit together; rejected rows are reported, not fatal.
pub fn load_table(store: &mut PatientStore, table: SourceTable, path: &Path) -> Result<TableLoad> {
    let start = Instant::now();
    let source = read_delimited(path)?;
    let columns = parse_columns(&source.headers)?;
    ensure_table(store, table, &columns)?;

    let width = columns.len();
    let mut inserted = 0usize;
    let mut rejected = Vec::new();

    let tx = store.connection_mut().transaction()?;
    {
        let mut stmt = tx.prepare(&insert_sql(table, &columns))?;
        for row in &source.rows {
            if row.fields.len() != width {
                rejected.push(RowRejection {
                    line: row.line,
                    reason: RejectReason::Arity {
                        expected: width,
                        found: row.fields.len(),
                    },
                });
                continue;
            }
            match stmt.execute(params_from_iter(row.fields.iter())) {
                Ok(_) => inserted += 1,
                Err(rusqlite::Error::SqliteFailure(err, message))
                    if err.code == ErrorCode::ConstraintViolation =>
                {
                    rejected.push(RowRejection {
                        line: row.line,
                        reason: RejectReason::Constraint {
                            message: message.unwrap_or_else(|| err.to_string()),
                        },
                    });
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
    tx.commit()?;

    if !rejected.is_empty() {
        warn!(
            table = %table,
            rejected = rejected.len(),
            first_line = rejected[0].line,
            reason = %rejected[0].reason,
            "rows rejected"
        );
    }
    info!(
        table = %table,
        inserted,
        rejected = rejected.len(),
        duration_ms = start.elapsed().as_millis(),
        "table loaded"
    );
    Ok(TableLoad {
        table,
        columns: width,
        inserted,
        rejected,
    })
}
