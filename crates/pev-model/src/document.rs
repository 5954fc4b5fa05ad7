//! Per-patient export documents.

use serde::{Deserialize, Serialize};

use crate::coding::CodingSystem;

/// Demographic attributes of one patient in the joined event view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    pub patient_id: String,
    pub birth_date: String,
    pub gender: String,
}

/// One coded event in a patient document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEvent {
    pub date: String,
    /// `None` when the source `icd_version` is not recognized; serialized as `null`.
    pub system: Option<CodingSystem>,
    pub code: String,
}

/// JSON document written for each patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientDocument {
    pub birth_date: String,
    pub gender: String,
    pub event: Vec<DocumentEvent>,
}

impl PatientDocument {
    /// Start an empty document for a patient.
    #[must_use]
    pub fn for_patient(patient: &Patient) -> Self {
        Self {
            birth_date: patient.birth_date.clone(),
            gender: patient.gender.clone(),
            event: Vec::new(),
        }
    }
}
