//! Chartwire: declarative third-party chart registration for installer render passes.
//!
//! This is the main entry point for the `chartwire` CLI. It initialises
//! logging, parses arguments, dispatches to the command handler, and maps
//! errors to exit codes.

mod charts;
mod cli;
mod commands;
pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod exit_codes;
pub mod helm;
mod logging;
pub mod registry;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse_args();

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
