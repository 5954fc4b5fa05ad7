//! CLI argument definitions for the patient events pipeline.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "patient-events",
    version,
    about = "Load patient demographics and events, then export or analyze them",
    long_about = "Load demo.psv and events.psv into patient.db and rebuild the joined\n\
                  patient_events view. Then either write one JSON document per patient\n\
                  into patient_json_files/ or print summary statistics.",
    group(
        ArgGroup::new("mode")
            .required(true)
            .args(["run_json", "run_analysis"])
    )
)]
pub struct Cli {
    /// Load the source files and rebuild the joined view before running.
    ///
    /// The single-dash `-load` spelling is also accepted.
    #[arg(long = "load")]
    pub load: bool,

    /// Write one JSON document per patient.
    #[arg(long = "run-json", alias = "run_json")]
    pub run_json: bool,

    /// Print patient count, timeline, gender and age statistics.
    #[arg(long = "run-analysis", alias = "run_analysis")]
    pub run_analysis: bool,

    /// Directory holding the source files, database and JSON output.
    #[arg(long = "workdir", value_name = "DIR", default_value = ".")]
    pub workdir: PathBuf,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.run_json {
            Mode::Json
        } else {
            Mode::Analysis
        }
    }
}

/// Rewrites the single-dash `-load` spelling to `--load`.
///
/// Clap would otherwise read `-load` as the short flags `-l -o -a -d`.
pub fn normalize_legacy_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| if arg == "-load" { OsString::from("--load") } else { arg })
        .collect()
}

/// The stage that runs after an optional load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Json,
    Analysis,
}

/// Source file diagnostics; reads `demo.psv` and `events.psv` from the
/// current directory.
#[derive(Parser)]
#[command(
    name = "pev-validate",
    version,
    about = "Report nulls, malformed dates and distinct patients in the source files"
)]
pub struct ValidateCli {
    #[command(flatten)]
    pub logging: LoggingArgs,
}

/// Logging flags shared by both binaries.
#[derive(Args)]
pub struct LoggingArgs {
    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Prefix each log line with a timestamp.
    #[arg(long = "log-timestamps")]
    pub log_timestamps: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
