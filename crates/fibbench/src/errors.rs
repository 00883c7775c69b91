//! Error handling and exit codes.

use fibbench_core::constants::exit_codes;
use fibbench_core::error::BenchError;

/// Map a benchmark error to its exit code.
pub fn handle_error(err: &BenchError) -> i32 {
    match err {
        BenchError::Overflow { .. } => exit_codes::ERROR_OVERFLOW,
        BenchError::Config(_) => exit_codes::ERROR_CONFIG,
        BenchError::Io(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for any application error.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    let code = err
        .downcast_ref::<BenchError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error);
    u8::try_from(code).unwrap_or(1)
}
