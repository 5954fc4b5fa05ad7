//! Domain types for the patient events pipeline.
//!
//! The pipeline reads two pipe-delimited source files (demographics and
//! clinical events), loads them into a SQLite store, derives a joined
//! per-patient event view, and from that view exports one JSON document per
//! patient and a handful of descriptive statistics.

pub mod coding;
pub mod document;
pub mod layout;
pub mod table;

pub use coding::CodingSystem;
pub use document::{DocumentEvent, Patient, PatientDocument};
pub use layout::Layout;
pub use table::{PATIENT_ID_COLUMN, SourceTable};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_serializes_with_event_key() {
        let document = PatientDocument {
            birth_date: "1980-02-01".to_string(),
            gender: "F".to_string(),
            event: vec![DocumentEvent {
                date: "2019-05-06".to_string(),
                system: CodingSystem::from_version("10"),
                code: "E11.9".to_string(),
            }],
        };
        let json = serde_json::to_value(&document).expect("serialize document");
        assert_eq!(json["event"][0]["system"], "http://hl7.org/fhir/sid/icd-10");
        assert_eq!(json["event"][0]["code"], "E11.9");
        assert_eq!(json["gender"], "F");
    }
}
