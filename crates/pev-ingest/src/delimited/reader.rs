//! Source file reading with a fixed single-character delimiter.

use std::fs::File;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};

use crate::error::{IngestError, Result};

use super::header::normalize_header;

/// Field delimiter of every source file.
pub const DELIMITER: u8 = b'|';

/// One data line of a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRow {
    /// 1-based line number in the source file.
    pub line: u64,
    /// Field values exactly as written between delimiters.
    pub fields: Vec<String>,
}

/// Header and data rows of a source file.
///
/// Rows are not padded or truncated to the header width; callers decide what
/// to do with rows of the wrong arity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimitedTable {
    pub headers: Vec<String>,
    pub rows: Vec<SourceRow>,
}

impl DelimitedTable {
    /// Number of columns named by the header.
    pub fn width(&self) -> usize {
        self.headers.len()
    }
}

fn open_reader(path: &Path) -> Result<Reader<File>> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    Ok(ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(file))
}

fn next_record(
    records: &mut impl Iterator<Item = csv::Result<StringRecord>>,
    path: &Path,
) -> Result<Option<StringRecord>> {
    records
        .next()
        .transpose()
        .map_err(|e| IngestError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
}

fn parse_header(record: &StringRecord, path: &Path) -> Result<Vec<String>> {
    let headers: Vec<String> = record.iter().map(normalize_header).collect();
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::NoHeader {
            path: path.to_path_buf(),
        });
    }
    if let Some(position) = headers.iter().position(String::is_empty) {
        return Err(IngestError::EmptyColumnName {
            path: path.to_path_buf(),
            position,
        });
    }
    Ok(headers)
}

/// Reads a whole source file: header line, then one row per remaining line.
///
/// Blank lines are skipped.
pub fn read_delimited(path: &Path) -> Result<DelimitedTable> {
    let mut reader = open_reader(path)?;
    let mut records = reader.records();
    let Some(header) = next_record(&mut records, path)? else {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    };
    let headers = parse_header(&header, path)?;

    let mut rows = Vec::new();
    while let Some(record) = next_record(&mut records, path)? {
        let line = record.position().map_or(0, csv::Position::line);
        rows.push(SourceRow {
            line,
            fields: record.iter().map(str::to_string).collect(),
        });
    }

    tracing::debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "read source file"
    );
    Ok(DelimitedTable { headers, rows })
}
