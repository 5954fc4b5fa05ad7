//! Source file ingestion for the patient events pipeline.
//!
//! Source files are plain pipe-delimited text: the first line names the
//! columns, every following line is one record. There is no quoting, so a
//! line is split on every `|` it contains.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use pev_ingest::read_delimited;
//!
//! let table = read_delimited(Path::new("demo.psv"))?;
//! println!("{} columns, {} rows", table.headers.len(), table.rows.len());
//! ```

mod delimited;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === Delimited Reading ===
pub use delimited::{DELIMITER, DelimitedTable, SourceRow, read_delimited};
