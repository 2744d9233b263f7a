mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command, OutputFormat};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only the session
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(args.verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli_utils::load_config(args.config.as_deref());

    match args.command {
        Some(Command::Scores { input, format }) => {
            commands::scores::run(config.session, input.as_deref(), format)
        }
        Some(Command::Calc { input }) => commands::calc::run(input.as_deref()),
        None => commands::scores::run(config.session, None, OutputFormat::Text),
    }
}

fn default_directives(verbose: u8) -> &'static str {
    match verbose {
        0 => "tally=warn,tally_core=warn",
        1 => "tally=info,tally_core=info",
        _ => "tally=debug,tally_core=debug",
    }
}
