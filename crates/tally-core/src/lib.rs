//! # tally-core
//!
//! Core library for the Tally score analyzer.
//!
//! This crate provides:
//! - Line sources for console and scripted input
//! - Score entry parsing and session summaries
//! - The interactive score collection loop
//! - A small menu-driven integer calculator
//! - Text and JSON summary formats
//! - TOML configuration for session texts

pub mod calculator;
pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod score;
pub mod session;

pub use calculator::{CalculatorReport, MenuCalculator, MenuChoice};
pub use config::{Config, SessionConfig};
pub use error::{Error, Result};
pub use export::{JsonFormat, SummaryFormat, TextFormat};
pub use input::{LineReader, LineSource, ScriptedLines};
pub use score::{Entry, EntryError, ScoreList, SessionSummary, format_float, parse_entry};
pub use session::{ScoreCollector, SessionOutcome, SessionResult, SessionState, Termination};
