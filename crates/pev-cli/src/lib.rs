//! Command-line layer for the patient events pipeline.
//!
//! Shared by the `patient-events` and `pev-validate` binaries: argument
//! definitions, logging setup, stage orchestration and console output.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
