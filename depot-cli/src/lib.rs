//! Command-line interface for computing depot driving-time matrices.
#![forbid(unsafe_code)]

mod compute;
mod error;
mod logging;

use clap::{Parser, Subcommand};

pub use error::CliError;

const ARG_WORKBOOK: &str = "workbook";
const ARG_LIMIT: &str = "limit";
const ARG_PROVIDER: &str = "provider";
const ARG_DELAY_MS: &str = "delay-ms";
const ARG_TIMEOUT_SECS: &str = "timeout-secs";
const ARG_LOG_FILE: &str = "log-file";
const ENV_WORKBOOK: &str = "DEPOT_CMDS_COMPUTE_WORKBOOK";

/// Run the CLI with the current process arguments and environment.
///
/// A `.env` file in the working directory, when present, is loaded before
/// anything else so API keys can live there.
///
/// # Errors
///
/// Returns a [`CliError`] for invalid arguments, unresolvable configuration,
/// missing credentials, or a workbook that cannot be read or written.
/// Individual route failures are logged and never surface here.
pub fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Compute(args) => compute::run_compute(args),
    }
}

/// Report a fatal error.
///
/// The error goes through the logger, which writes to stderr and the log
/// file. It is printed to stderr directly only when no logger is active.
#[expect(
    clippy::print_stderr,
    reason = "errors must reach the terminal even before logging is initialised"
)]
pub fn report(err: &CliError) {
    if logging::is_active() {
        log::error!("{err}");
    } else {
        eprintln!("depot-matrix: {err}");
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "depot-matrix",
    about = "Pairwise driving times and distances between depots",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Query every directional depot pair and write the matrix back.
    Compute(compute::ComputeArgs),
}

#[cfg(test)]
mod tests;
