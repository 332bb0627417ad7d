//! Binary entrypoint for the `hooksend` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Recording/replay wiring is handled in commands::dispatch via
    // HOOKSEND_RECORD=<dir> and HOOKSEND_REPLAY=<dir>.
    match hooksend::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
