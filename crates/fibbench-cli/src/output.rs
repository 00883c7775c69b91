//! CLI output formatting and report export.

use std::io;
use std::path::Path;
use std::time::Duration;

use serde::Serialize;

use fibbench_core::benchmark::BenchmarkReport;
use fibbench_core::session::SessionSummary;

/// Prompt shown between runs.
pub const PROMPT: &str = "Hit enter to run away or N to exit.";

/// Summary line for one benchmark run.
#[must_use]
pub fn format_summary(report: &BenchmarkReport) -> String {
    format!(
        "Total Time elapsed for {} executions: {} milliseconds.",
        report.executions,
        report.elapsed_millis()
    )
}

/// Format a duration for display, picking the unit from ns up to minutes.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    if d < Duration::from_micros(1) {
        return format!("{}ns", d.as_nanos());
    }
    let secs = d.as_secs_f64();
    match secs {
        s if s < 1e-3 => format!("{:.2}µs", s * 1e6),
        s if s < 1.0 => format!("{:.2}ms", s * 1e3),
        s if s < 60.0 => format!("{s:.3}s"),
        s => {
            let mins = (s / 60.0).floor() as u64;
            format!("{mins}m{:.1}s", s - 60.0 * mins as f64)
        }
    }
}

/// Serializable view of a benchmark report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRecord {
    pub sequence_length: u64,
    pub executions: u64,
    pub width: String,
    pub elapsed_ms: u64,
    pub elapsed_ns: u64,
    /// Human-readable elapsed time.
    pub elapsed: String,
    /// Human-readable mean time per execution.
    pub average: String,
}

impl From<&BenchmarkReport> for ReportRecord {
    fn from(report: &BenchmarkReport) -> Self {
        Self {
            sequence_length: report.sequence_length,
            executions: report.executions,
            width: report.width.to_string(),
            elapsed_ms: u64::try_from(report.elapsed.as_millis()).unwrap_or(u64::MAX),
            elapsed_ns: u64::try_from(report.elapsed.as_nanos()).unwrap_or(u64::MAX),
            elapsed: format_duration(report.elapsed),
            average: format_duration(report.average_per_execution()),
        }
    }
}

#[derive(Serialize)]
struct History {
    runs: usize,
    total_elapsed_ms: u64,
    reports: Vec<ReportRecord>,
}

/// Write every report of a session to `path` as pretty JSON.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_history(path: &Path, summary: &SessionSummary) -> io::Result<()> {
    let history = History {
        runs: summary.runs(),
        total_elapsed_ms: u64::try_from(summary.total_elapsed().as_millis()).unwrap_or(u64::MAX),
        reports: summary.reports.iter().map(ReportRecord::from).collect(),
    };
    let content = serde_json::to_string_pretty(&history).map_err(io::Error::other)?;
    std::fs::write(path, content)?;
    tracing::info!(path = %path.display(), runs = history.runs, "wrote report history");
    Ok(())
}
