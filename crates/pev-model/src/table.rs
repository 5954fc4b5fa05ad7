//! Source tables loaded from delimited files.

use std::fmt;

/// Column joining events to demographics.
pub const PATIENT_ID_COLUMN: &str = "patient_id";

/// A table backed by a source file.
///
/// Table names are fixed here and never taken from input, so they can be
/// placed into SQL text directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SourceTable {
    /// One row per patient: `patient_id`, `birth_date`, `gender`.
    Demographics,
    /// Zero or more rows per patient: `patient_id`, `date`, `icd_version`, `icd_code`.
    Events,
}

impl SourceTable {
    /// Load order: demographics before the events that reference them.
    pub const ALL: [SourceTable; 2] = [SourceTable::Demographics, SourceTable::Events];

    /// SQL table name.
    #[must_use]
    pub const fn table_name(&self) -> &'static str {
        match self {
            Self::Demographics => "demo",
            Self::Events => "events",
        }
    }

    /// Conventional source file name.
    #[must_use]
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Demographics => "demo.psv",
            Self::Events => "events.psv",
        }
    }

    /// Column holding the date checked by input validation.
    #[must_use]
    pub const fn date_column(&self) -> &'static str {
        match self {
            Self::Demographics => "birth_date",
            Self::Events => "date",
        }
    }
}

impl fmt::Display for SourceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}
