use crate::score::SessionSummary;

/// Scores collected during one session, in entry order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreList {
    scores: Vec<f64>,
}

impl ScoreList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a score. Non-finite values are refused and `false` is returned.
    pub fn push(&mut self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        self.scores.push(value);
        true
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.scores
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.scores.iter()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Sum of all scores. Starts from `+0.0`, so `-0` entries total `0.0`.
    pub fn total(&self) -> f64 {
        self.scores.iter().fold(0.0, |acc, v| acc + v)
    }

    /// Compute the session summary, or `None` when no scores were entered
    pub fn summary(&self) -> Option<SessionSummary> {
        if self.scores.is_empty() {
            return None;
        }

        let count = self.scores.len();
        let total = self.total();
        Some(SessionSummary {
            count,
            total,
            average: total / count as f64,
        })
    }
}
