//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use fibbench_cli::OutputFormat;
use fibbench_core::benchmark::Benchmark;
use fibbench_core::constants::{DEFAULT_EXECUTIONS, DEFAULT_SEQUENCE_LENGTH};
use fibbench_core::error::BenchError;
use fibbench_core::sequence::Width;
use fibbench_core::session::{EofPolicy, SessionConfig};

/// fibbench — times repeated Fibonacci sequence printing.
#[derive(Parser, Debug)]
#[command(name = "fibbench", version, about)]
pub struct AppConfig {
    /// Sequence length N: print F(0) through F(N).
    #[arg(short = 'n', long, default_value_t = DEFAULT_SEQUENCE_LENGTH, env = "FIBBENCH_LENGTH")]
    pub length: u64,

    /// Sequence generations per timed run.
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_EXECUTIONS,
        env = "FIBBENCH_EXECUTIONS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub executions: u64,

    /// Integer width used for terms.
    #[arg(short, long, value_enum, default_value_t = WidthArg::U64)]
    pub width: WidthArg,

    /// Do not print sequence text, only the timing reports.
    #[arg(short, long)]
    pub quiet: bool,

    /// Add the average time per execution to each report.
    #[arg(short, long)]
    pub verbose: bool,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Run a single benchmark without prompting.
    #[arg(long, conflicts_with = "max_runs")]
    pub once: bool,

    /// Stop after this many benchmark runs.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_runs: Option<u64>,

    /// Keep running when standard input is closed instead of exiting.
    #[arg(long)]
    pub loop_on_eof: bool,

    /// Write all run reports to this file as JSON when the session ends.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// Term width as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum WidthArg {
    U32,
    U64,
    U128,
    Big,
}

impl From<WidthArg> for Width {
    fn from(arg: WidthArg) -> Self {
        match arg {
            WidthArg::U32 => Width::U32,
            WidthArg::U64 => Width::U64,
            WidthArg::U128 => Width::U128,
            WidthArg::Big => Width::Big,
        }
    }
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validated benchmark parameters.
    pub fn benchmark(&self) -> Result<Benchmark, BenchError> {
        Benchmark::new(self.length, self.executions, self.width.into())
    }

    /// Session parameters derived from the flags.
    pub fn session_config(&self) -> Result<SessionConfig, BenchError> {
        let mut session = SessionConfig::new(self.benchmark()?);
        session.echo_sequence = !self.quiet;
        session.max_runs = if self.once { Some(1) } else { self.max_runs };
        session.eof_policy = if self.loop_on_eof {
            EofPolicy::Continue
        } else {
            EofPolicy::Exit
        };
        Ok(session)
    }
}
