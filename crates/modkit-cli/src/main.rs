use modkit_core::logging;

mod cli;
mod units;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible; prefer the state-dir log
    // file and fall back to stderr when it is unavailable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("modkit error: {:#}", err);
        std::process::exit(1);
    }
}
