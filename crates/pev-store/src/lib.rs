//! SQLite store for the patient events pipeline.
//!
//! [`PatientStore`] owns the connection for one command. The loader creates
//! `demo` and `events` from their source files and then rebuilds the joined
//! `patient_events` table that export and analysis read from.
//!
//! Table names are fixed by [`pev_model::SourceTable`]; column names come from
//! source headers and must pass the [`Identifier`] allow-list before they are
//! placed into SQL text. Row values are always bound as parameters.

mod error;
mod identifier;
mod loader;
mod schema;
mod store;
mod view;

pub use error::{Result, StoreError};
pub use identifier::{Identifier, is_identifier};
pub use loader::{LoadSummary, RejectReason, RowRejection, TableLoad, TableOutcome, load_sources, load_table};
pub use schema::create_table_sql;
pub use store::PatientStore;
pub use view::{EventRow, rebuild_patient_events};
