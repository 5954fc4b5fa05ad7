//! Loads a source file into a DataFrame.

use std::path::Path;

use polars::prelude::{CsvParseOptions, CsvReadOptions, DataFrame, SerReader};

use pev_ingest::DELIMITER;

use crate::error::{Result, ValidateError};

/// Reads a pipe-delimited source file with inferred column types.
///
/// Types are inferred from every row, so a code column that turns
/// alphanumeric late in the file still loads. Empty fields become nulls.
pub fn read_source_frame(path: &Path) -> Result<DataFrame> {
    if !path.is_file() {
        return Err(ValidateError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let parse_options = CsvParseOptions::default()
        .with_separator(DELIMITER)
        .with_quote_char(None)
        .with_missing_is_null(true);

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .with_parse_options(parse_options)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| ValidateError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| ValidateError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded source frame"
    );
    Ok(df)
}
