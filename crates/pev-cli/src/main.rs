//! Patient events pipeline CLI.

use clap::Parser;

use pev_cli::cli::{Cli, normalize_legacy_args};
use pev_cli::commands::run_pipeline;
use pev_cli::logging::{LogConfig, init_logging};
use pev_cli::summary::print_pipeline;
use pev_model::Layout;

fn main() {
    let cli = Cli::parse_from(normalize_legacy_args(std::env::args_os()));
    cli.logging.color.write_global();
    if let Err(error) = init_logging(&LogConfig::from_args(&cli.logging)) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let layout = Layout::rooted(&cli.workdir);
    let exit_code = match run_pipeline(&layout, cli.load, cli.mode()) {
        Ok(result) => {
            print_pipeline(&result);
            if result.has_errors() { 1 } else { 0 }
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}
