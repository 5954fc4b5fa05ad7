//! Conventional file locations.

use std::path::{Path, PathBuf};

use crate::table::SourceTable;

/// Store file name.
pub const DATABASE_FILE: &str = "patient.db";

/// Directory receiving exported patient documents.
pub const DOCUMENT_DIR: &str = "patient_json_files";

/// File locations for one pipeline run.
///
/// Every name is fixed; only the root they resolve against can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
}

impl Default for Layout {
    fn default() -> Self {
        Self::rooted(".")
    }
}

impl Layout {
    /// Resolve the conventional names against `root`.
    pub fn rooted(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the source file for `table`.
    #[must_use]
    pub fn source_file(&self, table: SourceTable) -> PathBuf {
        self.root.join(table.file_name())
    }

    /// All source files in load order.
    #[must_use]
    pub fn sources(&self) -> Vec<(SourceTable, PathBuf)> {
        SourceTable::ALL
            .iter()
            .map(|&table| (table, self.source_file(table)))
            .collect()
    }

    #[must_use]
    pub fn database(&self) -> PathBuf {
        self.root.join(DATABASE_FILE)
    }

    #[must_use]
    pub fn document_dir(&self) -> PathBuf {
        self.root.join(DOCUMENT_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_uses_working_directory() {
        let layout = Layout::default();
        assert_eq!(layout.database(), Path::new(".").join("patient.db"));
        assert_eq!(
            layout.source_file(SourceTable::Events),
            Path::new(".").join("events.psv")
        );
    }

    #[test]
    fn test_sources_in_load_order() {
        let layout = Layout::rooted("/data");
        let sources = layout.sources();
        assert_eq!(sources[0].0, SourceTable::Demographics);
        assert_eq!(sources[0].1, PathBuf::from("/data/demo.psv"));
        assert_eq!(sources[1].0, SourceTable::Events);
        assert_eq!(layout.document_dir(), PathBuf::from("/data/patient_json_files"));
    }
}
