//! JSON format implementation

use chrono::Local;
use serde_json::{Value as JsonValue, json};

use crate::score::{DEFAULT_PRECISION, SessionSummary};

use super::format::SummaryFormat;

/// JSON summary (one compact object per session)
#[derive(Debug, Clone, Copy)]
pub struct JsonFormat {
    pub precision: usize,
}

impl JsonFormat {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }
}

impl Default for JsonFormat {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}

impl SummaryFormat for JsonFormat {
    fn format_summary(&self, summary: &SessionSummary) -> String {
        format_json_summary(summary, self.precision).to_string()
    }

    fn format_empty(&self) -> String {
        json!({
            "timestamp": Local::now().to_rfc3339(),
            "count": 0,
        })
        .to_string()
    }
}

/// Generate the JSON object for a non-empty session
pub fn format_json_summary(summary: &SessionSummary, precision: usize) -> JsonValue {
    let mut value = json!(summary);
    value["timestamp"] = json!(Local::now().to_rfc3339());
    value["average_display"] = json!(summary.average_display(precision));
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_summary_fields() {
        let summary = SessionSummary {
            count: 3,
            total: 60.0,
            average: 20.0,
        };
        let value: JsonValue =
            serde_json::from_str(&JsonFormat::default().format_summary(&summary)).unwrap();

        assert_eq!(value["count"], 3);
        assert_eq!(value["total"], 60.0);
        assert_eq!(value["average"], 20.0);
        assert_eq!(value["average_display"], "20.00");
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn test_json_empty() {
        let value: JsonValue =
            serde_json::from_str(&JsonFormat::default().format_empty()).unwrap();
        assert_eq!(value["count"], 0);
        assert!(value.get("average").is_none());
    }
}
