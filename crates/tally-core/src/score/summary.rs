use std::fmt;

use serde::Serialize;

/// Number of fractional digits shown for the average
pub const DEFAULT_PRECISION: usize = 2;

/// Statistics for a session with at least one score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SessionSummary {
    pub count: usize,
    pub total: f64,
    pub average: f64,
}

impl SessionSummary {
    /// Average rounded to `precision` fractional digits
    pub fn average_display(&self, precision: usize) -> String {
        format!("{:.*}", precision, self.average)
    }

    /// Render the summary line, e.g. `Count: 3, Total: 60.0, Average: 20.00`
    pub fn line(&self, precision: usize) -> String {
        format!(
            "Count: {}, Total: {}, Average: {}",
            self.count,
            format_float(self.total),
            self.average_display(precision)
        )
    }
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line(DEFAULT_PRECISION))
    }
}

/// Render a float the way an interactive interpreter echoes it.
///
/// Integral values keep a trailing `.0` (`60.0`), other values use the
/// shortest round-trip digits, and very large or very small magnitudes switch
/// to exponent notation with a signed two-digit exponent (`1e+16`, `1.5e-05`).
pub fn format_float(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let raw = format!("{:e}", value);
        return match raw.split_once('e') {
            Some((mantissa, exponent)) => {
                let exponent: i32 = exponent.parse().unwrap_or(0);
                let sign = if exponent < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exponent.abs())
            }
            None => raw,
        };
    }

    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
