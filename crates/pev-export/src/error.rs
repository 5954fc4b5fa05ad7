//! Error types for document export.

use std::path::PathBuf;

use pev_store::StoreError;
use thiserror::Error;

/// Errors that can occur while exporting patient documents.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Querying the joined view failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The patient identifier cannot be used as a file name.
    #[error("patient id '{patient_id}' is not a safe file name")]
    UnsafeFileName { patient_id: String },

    /// The output directory could not be created.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a document file failed.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing a document failed.
    #[error("failed to serialize document for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ExportError {
    /// Short category name used in log output.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Store(err) => err.kind(),
            Self::UnsafeFileName { .. } => "unsafe_file_name",
            Self::CreateDir { .. } => "create_dir",
            Self::Write { .. } => "write",
            Self::Serialize { .. } => "serialize",
        }
    }
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
