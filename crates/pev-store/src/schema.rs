//! Source table DDL with key annotations.

use pev_model::{PATIENT_ID_COLUMN, SourceTable};

use crate::error::{Result, StoreError};
use crate::identifier::Identifier;
use crate::store::PatientStore;

/// Builds `CREATE TABLE IF NOT EXISTS` for a source table.
///
/// Demographics get `PRIMARY KEY` on `patient_id`; events get a foreign key
/// from `patient_id` to the demographics table. Columns stay untyped, so
/// values are stored as the text read from the file.
pub fn create_table_sql(table: SourceTable, columns: &[Identifier]) -> Result<String> {
    if !columns.iter().any(|c| c.as_str() == PATIENT_ID_COLUMN) {
        return Err(StoreError::MissingColumn {
            table: table.table_name().to_string(),
            column: PATIENT_ID_COLUMN.to_string(),
        });
    }

    let mut definitions: Vec<String> = columns
        .iter()
        .map(|column| match table {
            SourceTable::Demographics if column.as_str() == PATIENT_ID_COLUMN => {
                format!("{} PRIMARY KEY", column.quoted())
            }
            _ => column.quoted(),
        })
        .collect();

    if table == SourceTable::Events {
        definitions.push(format!(
            "FOREIGN KEY (\"{id}\") REFERENCES {demo} (\"{id}\")",
            id = PATIENT_ID_COLUMN,
            demo = SourceTable::Demographics.table_name()
        ));
    }

    Ok(format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        table.table_name(),
        definitions.join(", ")
    ))
}

/// Builds the parameterized INSERT for a source table.
pub fn insert_sql(table: SourceTable, columns: &[Identifier]) -> String {
    let names: Vec<String> = columns.iter().map(Identifier::quoted).collect();
    let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("?{i}")).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table.table_name(),
        names.join(", "),
        placeholders.join(", ")
    )
}

/// Creates the table if absent and checks an existing one has the same columns.
pub fn ensure_table(store: &PatientStore, table: SourceTable, columns: &[Identifier]) -> Result<()> {
    let sql = create_table_sql(table, columns)?;
    store.connection().execute_batch(&sql)?;

    let existing = store.table_columns(table.table_name())?;
    let expected: Vec<&str> = columns.iter().map(Identifier::as_str).collect();
    if existing != expected {
        return Err(StoreError::SchemaMismatch {
            table: table.table_name().to_string(),
            expected: expected.join(", "),
            found: existing.join(", "),
        });
    }
    tracing::debug!(table = %table, columns = columns.len(), "table ready");
    Ok(())
}
