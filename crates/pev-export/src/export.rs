//! Whole-view export.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{info, warn};

use pev_store::PatientStore;

use crate::document::patient_document;
use crate::error::{ExportError, Result};
use crate::writer::{ensure_output_dir, write_document};

/// A patient whose document could not be written.
#[derive(Debug)]
pub struct PatientFailure {
    pub patient_id: String,
    pub error: ExportError,
}

/// Result of exporting every patient in the joined view.
#[derive(Debug)]
pub struct ExportSummary {
    pub output_dir: PathBuf,
    pub written: Vec<PathBuf>,
    pub failures: Vec<PatientFailure>,
}

impl ExportSummary {
    pub fn has_errors(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Writes one document per distinct patient in `patient_events` into `output_dir`.
///
/// A patient that fails is recorded and the rest are still exported. Fails
/// outright only when the patient list cannot be read or the directory cannot
/// be created.
pub fn export_documents(store: &PatientStore, output_dir: &Path) -> Result<ExportSummary> {
    let start = Instant::now();
    let patients = store.patients()?;
    ensure_output_dir(output_dir)?;

    let mut written = Vec::with_capacity(patients.len());
    let mut failures = Vec::new();
    for patient in &patients {
        let result = patient_document(store, patient)
            .and_then(|document| write_document(output_dir, &patient.patient_id, &document));
        match result {
            Ok(path) => written.push(path),
            Err(error) => {
                warn!(kind = error.kind(), "patient document not written");
                failures.push(PatientFailure {
                    patient_id: patient.patient_id.clone(),
                    error,
                });
            }
        }
    }

    info!(
        output_dir = %output_dir.display(),
        patients = patients.len(),
        written = written.len(),
        failed = failures.len(),
        duration_ms = start.elapsed().as_millis(),
        "export complete"
    );
    Ok(ExportSummary {
        output_dir: output_dir.to_path_buf(),
        written,
        failures,
    })
}
