//! Interactive session loop.
//!
//! Runs the benchmark, presents the report, and asks whether to go again.
//! Input and output are injected so the loop can be driven from tests.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use crate::benchmark::{Benchmark, BenchmarkReport};
use crate::constants::EXIT_SENTINEL;
use crate::error::BenchError;
use crate::interfaces::ReportPresenter;

/// Session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Exit,
}

/// What to do when the input stream is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EofPolicy {
    /// End the session.
    #[default]
    Exit,
    /// Treat end of input like any non-exit answer and keep running.
    Continue,
}

/// Session parameters.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub benchmark: Benchmark,
    pub eof_policy: EofPolicy,
    /// Stop after this many runs without prompting again.
    pub max_runs: Option<u64>,
    /// Write sequence text to the output; otherwise it is discarded.
    pub echo_sequence: bool,
}

impl SessionConfig {
    #[must_use]
    pub fn new(benchmark: Benchmark) -> Self {
        Self {
            benchmark,
            eof_policy: EofPolicy::default(),
            max_runs: None,
            echo_sequence: true,
        }
    }
}

/// Reports collected over one session.
#[derive(Debug, Clone, Default)]
pub struct SessionSummary {
    pub reports: Vec<BenchmarkReport>,
}

impl SessionSummary {
    #[must_use]
    pub fn runs(&self) -> usize {
        self.reports.len()
    }

    #[must_use]
    pub fn total_elapsed(&self) -> Duration {
        self.reports.iter().map(|r| r.elapsed).sum()
    }
}

/// Whether a response line asks to end the session.
#[must_use]
pub fn is_exit_response(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(EXIT_SENTINEL)
}

/// Transition after a prompt. `None` means end of input.
#[must_use]
pub fn next_state(response: Option<&str>, eof_policy: EofPolicy) -> SessionState {
    match response {
        Some(line) if is_exit_response(line) => SessionState::Exit,
        Some(_) => SessionState::Running,
        None => match eof_policy {
            EofPolicy::Exit => SessionState::Exit,
            EofPolicy::Continue => SessionState::Running,
        },
    }
}

/// Run benchmarks until the user answers with the exit sentinel.
pub fn run_benchmark_session<R, W>(
    input: &mut R,
    output: &mut W,
    config: &SessionConfig,
    presenter: &dyn ReportPresenter,
) -> Result<SessionSummary, BenchError>
where
    R: BufRead,
    W: Write,
{
    let out: &mut dyn Write = output;
    let mut summary = SessionSummary::default();
    let mut state = SessionState::Running;
    let mut line = Vec::new();

    while state == SessionState::Running {
        let report = if config.echo_sequence {
            config.benchmark.run(&mut *out)?
        } else {
            config.benchmark.run(&mut io::sink())?
        };
        presenter.present_report(out, &report)?;
        summary.reports.push(report);

        if config
            .max_runs
            .is_some_and(|max| summary.runs() as u64 >= max)
        {
            out.flush()?;
            break;
        }

        presenter.present_prompt(out)?;
        out.flush()?;

        line.clear();
        // Undecodable bytes are replaced rather than rejected; they still
        // count as an answer other than the exit sentinel.
        let response = match input.read_until(b'\n', &mut line)? {
            0 => {
                match config.eof_policy {
                    EofPolicy::Exit => tracing::warn!("end of input reached, ending session"),
                    EofPolicy::Continue => tracing::debug!("end of input reached, continuing"),
                }
                None
            }
            _ => Some(String::from_utf8_lossy(&line)),
        };
        state = next_state(response.as_deref(), config.eof_policy);
    }

    tracing::info!(
        runs = summary.runs(),
        total_ms = summary.total_elapsed().as_millis(),
        "session finished"
    );
    Ok(summary)
}
