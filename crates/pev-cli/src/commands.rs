//! Stage orchestration for the binaries.

use anyhow::{Context, Result};

use pev_export::{ExportSummary, export_documents};
use pev_model::Layout;
use pev_report::{AnalysisReport, run_analysis};
use pev_store::{LoadSummary, PatientStore, load_sources};
use pev_validate::{SourceOutcome, validate_sources};

use crate::cli::Mode;

/// Result of the stage selected by [`Mode`].
#[derive(Debug)]
pub enum StageOutput {
    Export(pev_export::Result<ExportSummary>),
    Analysis(AnalysisReport),
}

impl StageOutput {
    pub fn has_errors(&self) -> bool {
        match self {
            Self::Export(Ok(summary)) => summary.has_errors(),
            Self::Export(Err(_)) => true,
            Self::Analysis(report) => report.has_errors(),
        }
    }
}

/// Everything one `patient-events` invocation produced.
#[derive(Debug)]
pub struct PipelineResult {
    pub load: Option<LoadSummary>,
    pub output: StageOutput,
}

impl PipelineResult {
    pub fn has_errors(&self) -> bool {
        self.load.as_ref().is_some_and(LoadSummary::has_errors) || self.output.has_errors()
    }
}

/// Opens the store under `layout`, optionally loads, then runs `mode`.
///
/// Only a store that cannot be opened is fatal; stage failures are carried
/// in the result.
pub fn run_pipeline(layout: &Layout, load: bool, mode: Mode) -> Result<PipelineResult> {
    let database = layout.database();
    let mut store = PatientStore::open(&database)
        .with_context(|| format!("failed to open store {}", database.display()))?;

    let load = load.then(|| run_load(&mut store, layout));
    let output = match mode {
        Mode::Json => StageOutput::Export(run_json(&store, layout)),
        Mode::Analysis => StageOutput::Analysis(run_report(&store)),
    };
    Ok(PipelineResult { load, output })
}

pub fn run_load(store: &mut PatientStore, layout: &Layout) -> LoadSummary {
    let span = tracing::info_span!("load", root = %layout.root().display());
    let _guard = span.enter();
    load_sources(store, &layout.sources())
}

pub fn run_json(store: &PatientStore, layout: &Layout) -> pev_export::Result<ExportSummary> {
    let span = tracing::info_span!("export");
    let _guard = span.enter();
    let result = export_documents(store, &layout.document_dir());
    if let Err(error) = &result {
        tracing::error!(kind = error.kind(), error = %error, "export failed");
    }
    result
}

pub fn run_report(store: &PatientStore) -> AnalysisReport {
    let span = tracing::info_span!("analysis");
    let _guard = span.enter();
    run_analysis(store)
}

/// Validates the source files named by `layout`.
pub fn run_validate(layout: &Layout) -> Vec<SourceOutcome> {
    let span = tracing::info_span!("validate_sources", root = %layout.root().display());
    let _guard = span.enter();
    validate_sources(&layout.sources())
}
