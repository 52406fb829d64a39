//! The csv-split command-line executable.

mod app;

use std::process::ExitCode;

fn main() -> ExitCode {
    match app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(app::EXIT_SPLIT_FAILURE)
        }
    }
}
