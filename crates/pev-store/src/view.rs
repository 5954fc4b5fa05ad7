//! The derived `patient_events` table.

use rusqlite::params;

use pev_model::Patient;

use crate::error::Result;
use crate::store::PatientStore;

const CREATE_PATIENT_EVENTS: &str = "
    DROP TABLE IF EXISTS patient_events;
    CREATE TABLE patient_events (
        patient_id,
        birth_date,
        gender,
        date,
        icd_version,
        icd_code
    );
";

const POPULATE_PATIENT_EVENTS: &str = "
    INSERT INTO patient_events
    SELECT
        A.patient_id,
        A.birth_date,
        A.gender,
        B.date,
        B.icd_version,
        B.icd_code
    FROM demo A
    INNER JOIN events B
        ON A.patient_id = B.patient_id
    WHERE B.icd_code != ''
        AND B.icd_version != ''
        AND B.date != ''
        AND A.birth_date != ''
        AND A.gender != ''
    ORDER BY B.rowid
";

/// One row of a patient's events in the joined view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub date: String,
    pub icd_version: String,
    pub icd_code: String,
}

/// Drops and recreates `patient_events` from `demo` joined with `events`.
///
/// Rows with any empty required field are left out. Returns the new row count.
pub fn rebuild_patient_events(store: &mut PatientStore) -> Result<usize> {
    let tx = store.connection_mut().transaction()?;
    tx.execute_batch(CREATE_PATIENT_EVENTS)?;
    let rows = tx.execute(POPULATE_PATIENT_EVENTS, [])?;
    tx.commit()?;
    tracing::info!(rows, "patient_events rebuilt");
    Ok(rows)
}

impl PatientStore {
    /// Distinct patients present in the joined view, in first-seen order.
    pub fn patients(&self) -> Result<Vec<Patient>> {
        let mut stmt = self.connection().prepare(
            "SELECT patient_id, birth_date, gender FROM patient_events
             GROUP BY patient_id, birth_date, gender
             ORDER BY MIN(rowid)",
        )?;
        let patients = stmt
            .query_map([], |row| {
                Ok(Patient {
                    patient_id: row.get(0)?,
                    birth_date: row.get(1)?,
                    gender: row.get(2)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(patients)
    }

    /// A patient's events in the joined view, in load order.
    pub fn patient_events(&self, patient_id: &str) -> Result<Vec<EventRow>> {
        let mut stmt = self.connection().prepare(
            "SELECT date, icd_version, icd_code FROM patient_events
             WHERE patient_id = ?1
             ORDER BY rowid",
        )?;
        let events = stmt
            .query_map(params![patient_id], |row| {
                Ok(EventRow {
                    date: row.get(0)?,
                    icd_version: row.get(1)?,
                    icd_code: row.get(2)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(events)
    }

    /// Row count of the joined view.
    pub fn patient_event_count(&self) -> Result<u64> {
        let count: i64 =
            self.connection()
                .query_row("SELECT COUNT(*) FROM patient_events", [], |row| row.get(0))?;
        Ok(count.max(0) as u64)
    }
}
