//! Binary entrypoint for the `repoprobe` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    repoprobe::logging::init();

    // Recording is handled in commands::dispatch via REPOPROBE_RECORD=<dir>.
    match repoprobe::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
