//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod calc;
pub mod scores;

use std::io::{self, IsTerminal};

use owo_colors::OwoColorize;

/// Print the mode banner on an interactive stderr
fn print_banner(mode: &str) {
    if io::stderr().is_terminal() {
        eprintln!(
            "{} {} - {}",
            "Tally".bold(),
            env!("CARGO_PKG_VERSION").dimmed(),
            mode.cyan()
        );
    }
}
