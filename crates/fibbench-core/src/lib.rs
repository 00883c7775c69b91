//! # fibbench-core
//!
//! Core library for fibbench: a Fibonacci sequence printer, the timed
//! benchmark loop that repeats it, and the interactive session around both.

pub mod benchmark;
pub mod constants;
pub mod error;
pub mod interfaces;
pub mod sequence;
pub mod session;

// Re-exports
pub use benchmark::{Benchmark, BenchmarkReport};
pub use constants::{exit_codes, DEFAULT_EXECUTIONS, DEFAULT_SEQUENCE_LENGTH, EXIT_SENTINEL};
pub use error::BenchError;
pub use interfaces::{NullPresenter, ReportPresenter};
pub use sequence::{generate, write_sequence, write_sequence_as, SequenceState, Term, Width};
pub use session::{
    is_exit_response, run_benchmark_session, EofPolicy, SessionConfig, SessionState,
    SessionSummary,
};

/// Render F(0)..F(`length`) as a `", "`-separated string using `u64` terms.
///
/// # Example
/// ```
/// assert_eq!(fibbench_core::fibonacci_sequence(4).unwrap(), "0, 1, 1, 2, 3");
/// assert_eq!(fibbench_core::fibonacci_sequence(0).unwrap(), "0");
/// ```
pub fn fibonacci_sequence(length: u64) -> Result<String, BenchError> {
    sequence::sequence_string(Width::U64, length)
}
