//! Document file writing.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use pev_model::PatientDocument;

use crate::error::{ExportError, Result};

const INDENT: &[u8] = b"    ";

/// File name for a patient's document: `<patient_id>.json`.
///
/// Rejects identifiers that would escape the output directory.
pub fn document_file_name(patient_id: &str) -> Result<String> {
    let unsafe_name = patient_id.is_empty()
        || patient_id == "."
        || patient_id == ".."
        || patient_id.contains(['/', '\\', '\0']);
    if unsafe_name {
        return Err(ExportError::UnsafeFileName {
            patient_id: patient_id.to_string(),
        });
    }
    Ok(format!("{patient_id}.json"))
}

/// Serializes a document as JSON indented by four spaces.
pub fn to_pretty_json(document: &PatientDocument) -> serde_json::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    document.serialize(&mut serializer)?;
    Ok(buffer)
}

/// Writes `document` to `<dir>/<patient_id>.json`, replacing any existing file.
pub fn write_document(dir: &Path, patient_id: &str, document: &PatientDocument) -> Result<PathBuf> {
    let path = dir.join(document_file_name(patient_id)?);
    let json = to_pretty_json(document).map_err(|source| ExportError::Serialize {
        path: path.clone(),
        source,
    })?;
    fs::write(&path, json).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Creates the output directory if it does not exist.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}
