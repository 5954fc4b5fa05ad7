//! Error types for store operations.

use std::path::PathBuf;

use pev_ingest::IngestError;
use thiserror::Error;

/// Errors that can occur while loading or querying the store.
#[derive(Debug, Error)]
pub enum StoreError {
    // === Connection Errors ===
    /// Failed to open the database file.
    #[error("failed to open store {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    // === Schema Errors ===
    /// A column name from a source header is not a plain SQL identifier.
    #[error("column name '{name}' is not a valid identifier")]
    InvalidIdentifier { name: String },

    /// A column the schema depends on is missing from the source header.
    #[error("table {table} has no '{column}' column")]
    MissingColumn { table: String, column: String },

    /// Existing table columns differ from the source header.
    #[error("table {table} exists with columns [{found}], source has [{expected}]")]
    SchemaMismatch {
        table: String,
        expected: String,
        found: String,
    },

    // === Source Errors ===
    /// The source file could not be read.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    // === SQLite Errors ===
    /// Any other SQLite failure.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

impl StoreError {
    /// Short category name used in log output.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Open { .. } => "open",
            Self::InvalidIdentifier { .. } => "invalid_identifier",
            Self::MissingColumn { .. } => "missing_column",
            Self::SchemaMismatch { .. } => "schema_mismatch",
            Self::Ingest(err) => err.kind(),
            Self::Sqlite(rusqlite::Error::SqliteFailure(err, _))
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                "constraint_violation"
            }
            Self::Sqlite(_) => "sqlite",
        }
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
