use strum::{Display, IntoStaticStr};

use crate::score::Entry;

/// Collection session state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IntoStaticStr, Display)]
pub enum SessionState {
    #[default]
    #[strum(serialize = "collecting")]
    Collecting,
    #[strum(serialize = "done")]
    Done,
}

impl SessionState {
    /// Advance on a classified entry. Only the sentinel leaves `Collecting`.
    pub fn on_entry(self, entry: &Entry) -> Self {
        match (self, entry) {
            (Self::Collecting, Entry::Sentinel) => Self::Done,
            (state, _) => state,
        }
    }

    /// Advance when the input stream is exhausted
    pub fn on_end_of_input(self) -> Self {
        Self::Done
    }

    pub fn is_done(&self) -> bool {
        *self == Self::Done
    }
}

/// How a session reached `Done`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
pub enum Termination {
    #[strum(serialize = "sentinel")]
    Sentinel,
    #[strum(serialize = "end of input")]
    EndOfInput,
}
