//! Builds patient documents from the joined view.

use pev_model::{CodingSystem, DocumentEvent, Patient, PatientDocument};
use pev_store::{EventRow, PatientStore};

use crate::error::Result;

/// Builds the document for one patient from their rows in `patient_events`.
///
/// A patient without rows gets an empty event list.
pub fn patient_document(store: &PatientStore, patient: &Patient) -> Result<PatientDocument> {
    let mut document = PatientDocument::for_patient(patient);
    document.event = store
        .patient_events(&patient.patient_id)?
        .into_iter()
        .map(document_event)
        .collect();
    Ok(document)
}

fn document_event(row: EventRow) -> DocumentEvent {
    DocumentEvent {
        system: CodingSystem::from_version(&row.icd_version),
        date: row.date,
        code: row.icd_code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_version_has_no_system() {
        let event = document_event(EventRow {
            date: "2020-01-01".to_string(),
            icd_version: "11".to_string(),
            icd_code: "5A11".to_string(),
        });
        assert_eq!(event.system, None);
        assert_eq!(event.code, "5A11");
    }

    #[test]
    fn test_patient_without_events() {
        let store = PatientStore::open_in_memory().unwrap();
        store
            .connection()
            .execute_batch(
                "CREATE TABLE patient_events (patient_id, birth_date, gender, date, icd_version, icd_code)",
            )
            .unwrap();
        let patient = Patient {
            patient_id: "7".to_string(),
            birth_date: "2001-09-09".to_string(),
            gender: "F".to_string(),
        };

        let document = patient_document(&store, &patient).unwrap();

        assert!(document.event.is_empty());
        assert_eq!(document.birth_date, "2001-09-09");
    }
}
