//! Error types for source file ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a source file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Source file not found.
    #[error("source file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File has no header line.
    #[error("source file is empty: {path}")]
    EmptyFile { path: PathBuf },

    /// Header line has no usable column names.
    #[error("no column names in header of {path}")]
    NoHeader { path: PathBuf },

    /// Header contains an empty column name.
    #[error("empty column name at position {position} in {path}")]
    EmptyColumnName { path: PathBuf, position: usize },

    /// Delimited parsing failed (for example invalid UTF-8).
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl IngestError {
    /// Short category name used in log output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } => "file_not_found",
            Self::FileRead { .. } => "file_read",
            Self::EmptyFile { .. } => "empty_file",
            Self::NoHeader { .. } => "no_header",
            Self::EmptyColumnName { .. } => "empty_column_name",
            Self::Parse { .. } => "parse",
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/demo.psv"),
        };
        assert_eq!(err.to_string(), "source file not found: /path/to/demo.psv");
        assert_eq!(err.kind(), "file_not_found");
    }
}
