//! Per-patient JSON document export.
//!
//! Each distinct patient in `patient_events` becomes `<patient_id>.json`:
//! birth date, gender, and the patient's coded events with their FHIR
//! coding system.

mod document;
mod error;
mod export;
mod writer;

pub use document::patient_document;
pub use error::{ExportError, Result};
pub use export::{ExportSummary, PatientFailure, export_documents};
pub use writer::{document_file_name, to_pretty_json, write_document};
