//! Menu calculator command.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tally_core::{LineReader, MenuCalculator};
use tracing::debug;

pub fn run(input: Option<&Path>) -> Result<()> {
    super::print_banner("Calculator mode");

    let reader = crate::cli_utils::open_input(input)?;
    let mut source = LineReader::new(reader);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let report = MenuCalculator::new()
        .run(&mut source, &mut out)
        .context("Calculator session failed")?;
    debug!(
        "Calculator ended by {}: {} rounds, {} invalid choices",
        report.termination, report.rounds, report.invalid_choices
    );
    Ok(())
}
