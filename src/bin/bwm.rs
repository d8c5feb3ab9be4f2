//! Reads BWM requests as JSON from stdin and writes one JSON response per
//! request to stdout. Logging goes to stderr, filtered by `RUST_LOG`.

use std::{io, process::ExitCode};

use bwm_solver::wire;
use env_logger::Env;
use log::error;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    match wire::serve(stdin.lock(), stdout.lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("i/o error: {}", e);
            ExitCode::from(2)
        }
    }
}
