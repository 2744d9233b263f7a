//! Console text format implementation

use crate::config::messages;
use crate::score::{DEFAULT_PRECISION, SessionSummary};

use super::format::SummaryFormat;

/// Plain text summary (`Count: 3, Total: 60.0, Average: 20.00`)
#[derive(Debug, Clone, Copy)]
pub struct TextFormat {
    pub precision: usize,
}

impl TextFormat {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }
}

impl Default for TextFormat {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}

impl SummaryFormat for TextFormat {
    fn format_summary(&self, summary: &SessionSummary) -> String {
        summary.line(self.precision)
    }

    fn format_empty(&self) -> String {
        messages::NO_SCORES.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_outcome() {
        let format = TextFormat::default();
        let summary = SessionSummary {
            count: 2,
            total: 4.0,
            average: 2.0,
        };
        assert_eq!(
            format.format_outcome(Some(&summary)),
            "Count: 2, Total: 4.0, Average: 2.00"
        );
        assert_eq!(format.format_outcome(None), "No scores entered.");
    }

    #[test]
    fn test_text_precision() {
        let format = TextFormat::new(1);
        let summary = SessionSummary {
            count: 1,
            total: 5.0,
            average: 5.0,
        };
        assert_eq!(
            format.format_summary(&summary),
            "Count: 1, Total: 5.0, Average: 5.0"
        );
    }
}
