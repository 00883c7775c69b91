//! CLI report presenters.

use std::io::{self, Write};

use fibbench_core::benchmark::BenchmarkReport;
use fibbench_core::interfaces::ReportPresenter;

use crate::output::{format_duration, format_summary, ReportRecord, PROMPT};

/// How reports are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary and prompt.
    #[default]
    Text,
    /// One JSON object per run, no prompt.
    Json,
}

impl OutputFormat {
    /// Build the presenter for this format.
    #[must_use]
    pub fn presenter(self, verbose: bool) -> Box<dyn ReportPresenter> {
        match self {
            OutputFormat::Text => Box::new(TextPresenter::new(verbose)),
            OutputFormat::Json => Box::new(JsonPresenter),
        }
    }
}

/// Plain-text presenter.
pub struct TextPresenter {
    verbose: bool,
}

impl TextPresenter {
    #[must_use]
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl ReportPresenter for TextPresenter {
    fn present_report(&self, out: &mut dyn Write, report: &BenchmarkReport) -> io::Result<()> {
        writeln!(out, "\n\n{}", format_summary(report))?;
        if self.verbose {
            writeln!(
                out,
                "Average per execution: {} ({} terms, {} width)",
                format_duration(report.average_per_execution()),
                report.sequence_length + 1,
                report.width
            )?;
        }
        Ok(())
    }

    fn present_prompt(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "\n{PROMPT}")
    }
}

/// JSON presenter: one object per line after the sequence text.
pub struct JsonPresenter;

impl ReportPresenter for JsonPresenter {
    fn present_report(&self, out: &mut dyn Write, report: &BenchmarkReport) -> io::Result<()> {
        let line = serde_json::to_string(&ReportRecord::from(report)).map_err(io::Error::other)?;
        writeln!(out, "\n{line}")
    }

    fn present_prompt(&self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }
}
