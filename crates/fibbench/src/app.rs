//! Application entry point and dispatch.

use std::io::{self, BufRead, BufWriter, Write};

use anyhow::{Context, Result};

use fibbench_cli::output::write_history;
use fibbench_core::session::{run_benchmark_session, SessionSummary};

use crate::config::AppConfig;

/// Run the application against the process's standard streams.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fibbench_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = BufWriter::new(io::stdout().lock());
    let summary = run_with_io(config, &mut input, &mut output)?;
    output.flush()?;

    if let Some(ref path) = config.output {
        write_history(path, &summary)
            .with_context(|| format!("writing report history to {}", path.display()))?;
    }

    Ok(())
}

/// Run a benchmark session on the given streams.
pub fn run_with_io<R, W>(config: &AppConfig, input: &mut R, output: &mut W) -> Result<SessionSummary>
where
    R: BufRead,
    W: Write,
{
    let session = config.session_config()?;
    let presenter = config.format.presenter(config.verbose);

    tracing::debug!(
        length = config.length,
        executions = config.executions,
        width = ?config.width,
        "session configured"
    );

    let summary = run_benchmark_session(input, output, &session, presenter.as_ref())?;
    Ok(summary)
}
