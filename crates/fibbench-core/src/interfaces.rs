//! Presentation interfaces used by the session loop.

use std::io::{self, Write};

use crate::benchmark::BenchmarkReport;

/// Trait for presenting benchmark results to the user.
pub trait ReportPresenter: Send + Sync {
    /// Present the outcome of one benchmark run.
    fn present_report(&self, out: &mut dyn Write, report: &BenchmarkReport) -> io::Result<()>;

    /// Ask whether to run again.
    fn present_prompt(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Null presenter (writes nothing).
pub struct NullPresenter;

impl ReportPresenter for NullPresenter {
    fn present_report(&self, _out: &mut dyn Write, _report: &BenchmarkReport) -> io::Result<()> {
        Ok(())
    }

    fn present_prompt(&self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }
}
