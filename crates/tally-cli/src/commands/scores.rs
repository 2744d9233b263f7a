//! Score analyzer command.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tally_core::{JsonFormat, LineReader, ScoreCollector, SessionConfig, SessionOutcome};
use tracing::debug;

use crate::cli::OutputFormat;

/// Run one interactive score session on stdout
pub fn run(config: SessionConfig, input: Option<&Path>, format: OutputFormat) -> Result<()> {
    super::print_banner("Score mode");

    let reader = crate::cli_utils::open_input(input)?;
    let mut source = LineReader::new(reader);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let outcome = collect(config, format, &mut source, &mut out)?;
    debug!(
        "Session ended by {} ({} rejected entries)",
        outcome.termination, outcome.rejected
    );
    Ok(())
}

fn collect<S, W>(
    config: SessionConfig,
    format: OutputFormat,
    source: &mut S,
    out: &mut W,
) -> Result<SessionOutcome>
where
    S: tally_core::LineSource,
    W: io::Write,
{
    let precision = config.precision;
    let mut collector = ScoreCollector::new(config);
    if format == OutputFormat::Json {
        collector = collector.with_format(Box::new(JsonFormat::new(precision)));
    }

    collector
        .collect_and_summarize(source, out)
        .context("Score session failed")
}
