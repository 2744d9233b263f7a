//! Scripted line source for testing
//!
//! Replays a fixed list of lines instead of reading a real console,
//! allowing interactive loops to be tested deterministically.

use std::collections::VecDeque;

use crate::error::Result;
use crate::input::LineSource;

/// Scripted line source
///
/// Yields the configured lines in order, then reports end of input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedLines {
    lines: VecDeque<String>,
}

impl ScriptedLines {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of lines not yet consumed
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl LineSource for ScriptedLines {
    fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_in_order() {
        let mut source = ScriptedLines::new(["a", "b"]);
        assert_eq!(source.remaining(), 2);
        assert_eq!(source.read_line().unwrap().as_deref(), Some("a"));
        assert_eq!(source.read_line().unwrap().as_deref(), Some("b"));
        assert!(source.is_empty());
        assert_eq!(source.read_line().unwrap(), None);
    }

    #[test]
    fn test_empty_source() {
        let mut source = ScriptedLines::default();
        assert_eq!(source.read_line().unwrap(), None);
    }
}
