//! Descriptive statistics over the joined patient event view.
//!
//! Four independent read-only queries: distinct patient count, spread of
//! per-patient timeline length in days, distinct patients per gender, and
//! spread of age in whole years at the last event.

mod analysis;
mod queries;
mod stats;

pub use analysis::{
    AnalysisReport, age_stats, gender_counts, run_analysis, timeline_stats, valid_patient_count,
};
pub use stats::{GenderCounts, SpreadStats};
