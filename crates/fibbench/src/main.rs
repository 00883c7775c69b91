//! fibbench — interactive Fibonacci sequence benchmark.

use std::process::ExitCode;

use fibbench_lib::{app, config, errors, logging};

fn main() -> ExitCode {
    logging::init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(errors::exit_code_for(&err))
        }
    }
}
