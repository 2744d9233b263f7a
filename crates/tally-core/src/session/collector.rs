use std::io::Write;

use tracing::{debug, info, warn};

use crate::config::{SessionConfig, messages};
use crate::error::Result;
use crate::export::{SummaryFormat, TextFormat};
use crate::input::LineSource;
use crate::score::{Entry, ScoreList, SessionSummary, parse_entry};
use crate::session::{SessionState, Termination};

/// Final result of a collection session
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionResult {
    Summary(SessionSummary),
    /// The session ended before any valid score was entered
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionOutcome {
    pub result: SessionResult,
    /// Number of entries refused as not a number
    pub rejected: usize,
    pub termination: Termination,
}

impl SessionOutcome {
    pub fn summary(&self) -> Option<&SessionSummary> {
        match &self.result {
            SessionResult::Summary(summary) => Some(summary),
            SessionResult::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.result, SessionResult::Empty)
    }
}

/// Prompts for scores until the sentinel and reports their statistics
pub struct ScoreCollector {
    config: SessionConfig,
    format: Box<dyn SummaryFormat>,
}

impl ScoreCollector {
    pub fn new(config: SessionConfig) -> Self {
        let format = Box::new(TextFormat::new(config.precision));
        Self { config, format }
    }

    /// Replace the format used for the closing report
    pub fn with_format(mut self, format: Box<dyn SummaryFormat>) -> Self {
        self.format = format;
        self
    }

    /// Run one session: read entries from `source` and write prompts,
    /// notices and the closing report to `out`.
    pub fn collect_and_summarize<S, W>(&self, source: &mut S, out: &mut W) -> Result<SessionOutcome>
    where
        S: LineSource + ?Sized,
        W: Write + ?Sized,
    {
        let sentinel = self.config.sentinel.as_str();
        let mut scores = ScoreList::new();
        let mut state = SessionState::Collecting;
        let mut termination = Termination::Sentinel;
        let mut rejected = 0usize;

        writeln!(out, "{}", messages::intro(sentinel))?;

        while !state.is_done() {
            write!(out, "{}", self.config.prompt)?;
            out.flush()?;

            let Some(line) = source.read_line()? else {
                warn!("Input closed before '{}', ending session", sentinel);
                // Terminate the dangling prompt line
                writeln!(out)?;
                termination = Termination::EndOfInput;
                state = state.on_end_of_input();
                continue;
            };

            match parse_entry(&line, sentinel) {
                Ok(entry) => {
                    if let Entry::Score(value) = entry {
                        scores.push(value);
                        debug!("Accepted score {} (#{})", value, scores.len());
                    }
                    state = state.on_entry(&entry);
                }
                Err(e) => {
                    rejected += 1;
                    debug!("Rejected entry: {}", e);
                    writeln!(out, "{}", messages::NOT_A_NUMBER)?;
                }
            }
        }

        let result = match scores.summary() {
            Some(summary) => {
                info!(
                    "Session finished: {} scores, total {}, average {}",
                    summary.count, summary.total, summary.average
                );
                writeln!(out)?;
                writeln!(out, "{}", self.format.format_summary(&summary))?;
                SessionResult::Summary(summary)
            }
            None => {
                info!("Session finished without scores");
                writeln!(out, "{}", self.format.format_empty())?;
                SessionResult::Empty
            }
        };
        out.flush()?;

        Ok(SessionOutcome {
            result,
            rejected,
            termination,
        })
    }
}

impl Default for ScoreCollector {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
