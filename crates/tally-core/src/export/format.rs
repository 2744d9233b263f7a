//! SummaryFormat trait definition

use crate::score::SessionSummary;

/// Trait for summary format implementations
///
/// Provides a common interface for rendering the end of a session
/// (console text, JSON, etc.)
pub trait SummaryFormat {
    /// Render statistics for a session with at least one score
    fn format_summary(&self, summary: &SessionSummary) -> String;

    /// Render the outcome of a session without scores
    fn format_empty(&self) -> String;

    /// Render either outcome
    fn format_outcome(&self, summary: Option<&SessionSummary>) -> String {
        match summary {
            Some(summary) => self.format_summary(summary),
            None => self.format_empty(),
        }
    }
}
