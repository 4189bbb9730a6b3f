//! ibsub: interactive builder for LSF batch jobs.
//!
//! This is the main entry point for the `ibsub` CLI. It parses arguments,
//! sets up logging, runs the prompt sequence, and maps errors to exit codes.

mod cli;
mod commands;
pub mod completers;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod input;
pub mod orchestrator;
pub mod output;
pub mod prompt;
pub mod shell;
pub mod steps;
pub mod validate;

#[cfg(test)]
mod test_support;

use cli::Cli;
use error::IbsubError;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    match commands::run(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(IbsubError::Interrupted) => {
            // Finish the half-typed prompt line; print nothing else.
            eprintln!();
            ExitCode::from(exit_codes::INTERRUPTED as u8)
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Install the stderr tracing subscriber. `RUST_LOG` overrides `--verbose`.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "ibsub=debug" } else { "ibsub=warn" })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
