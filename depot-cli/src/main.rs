//! Entry point for the `depot-matrix` command.
#![forbid(unsafe_code)]

use depot_cli::CliError;

fn main() {
    match depot_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            depot_cli::report(&err);
            std::process::exit(1);
        }
    }
}
