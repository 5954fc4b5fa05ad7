//! Standalone checks over the raw source files.
//!
//! Reads each pipe-delimited file into a DataFrame and reports column
//! null counts, rows with malformed dates and distinct patient counts.
//! Date checks are shape-only.

pub mod checks;
pub mod error;
pub mod frame;
pub mod report;
pub mod summary;

pub use checks::{distinct_count, distinct_where_present, has_date_shape, malformed_dates};
pub use error::{Result, ValidateError};
pub use frame::read_source_frame;
pub use report::{CODE_COLUMN, SourceOutcome, SourceReport, validate_source, validate_sources};
pub use summary::{ColumnSummary, column_summary};
