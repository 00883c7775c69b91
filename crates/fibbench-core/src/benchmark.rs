//! Timed benchmark loop.

use std::io::Write;
use std::time::{Duration, Instant};

use crate::error::BenchError;
use crate::sequence::{write_sequence_as, Width};

/// Outcome of one timed benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkReport {
    pub sequence_length: u64,
    pub executions: u64,
    pub width: Width,
    /// Wall-clock time for all executions.
    pub elapsed: Duration,
}

impl BenchmarkReport {
    /// Elapsed whole milliseconds (truncated).
    #[must_use]
    pub fn elapsed_millis(&self) -> u128 {
        self.elapsed.as_millis()
    }

    /// Mean time per sequence generation.
    #[must_use]
    pub fn average_per_execution(&self) -> Duration {
        match u32::try_from(self.executions) {
            Ok(n) if n > 0 => self.elapsed / n,
            Ok(_) => Duration::ZERO,
            #[allow(clippy::cast_precision_loss)]
            Err(_) => Duration::from_secs_f64(self.elapsed.as_secs_f64() / self.executions as f64),
        }
    }
}

/// A validated benchmark configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Benchmark {
    sequence_length: u64,
    executions: u64,
    width: Width,
}

impl Benchmark {
    /// Validate and build a benchmark.
    pub fn new(sequence_length: u64, executions: u64, width: Width) -> Result<Self, BenchError> {
        if executions == 0 {
            return Err(BenchError::Config("executions must be at least 1".into()));
        }
        width.check_length(sequence_length)?;
        Ok(Self {
            sequence_length,
            executions,
            width,
        })
    }

    #[must_use]
    pub fn sequence_length(&self) -> u64 {
        self.sequence_length
    }

    #[must_use]
    pub fn executions(&self) -> u64 {
        self.executions
    }

    #[must_use]
    pub fn width(&self) -> Width {
        self.width
    }

    /// Print the sequence `executions` times and time the whole batch.
    pub fn run<W: Write + ?Sized>(&self, out: &mut W) -> Result<BenchmarkReport, BenchError> {
        tracing::debug!(
            length = self.sequence_length,
            executions = self.executions,
            width = %self.width,
            "starting benchmark run"
        );

        let start = Instant::now();
        for _ in 0..self.executions {
            write_sequence_as(out, self.width, self.sequence_length)?;
        }
        let elapsed = start.elapsed();

        tracing::debug!(elapsed_ms = elapsed.as_millis(), "benchmark run finished");

        Ok(BenchmarkReport {
            sequence_length: self.sequence_length,
            executions: self.executions,
            width: self.width,
            elapsed,
        })
    }
}
