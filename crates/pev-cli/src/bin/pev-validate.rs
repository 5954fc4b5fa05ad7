//! Source file diagnostics for `demo.psv` and `events.psv`.

use clap::Parser;

use pev_cli::cli::ValidateCli;
use pev_cli::commands::run_validate;
use pev_cli::logging::{LogConfig, init_logging};
use pev_cli::summary::print_validation;
use pev_model::Layout;

fn main() {
    let cli = ValidateCli::parse();
    cli.logging.color.write_global();
    if let Err(error) = init_logging(&LogConfig::from_args(&cli.logging)) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let outcomes = run_validate(&Layout::default());
    print_validation(&outcomes);
    let failed = outcomes.iter().any(|outcome| outcome.result.is_err());
    std::process::exit(if failed { 1 } else { 0 });
}
