//! Line-oriented input sources.
//!
//! Interactive loops read one line per request through the [`LineSource`]
//! trait, so the console and test fixtures are interchangeable:
//!
//! - [`LineReader`]: wraps any `BufRead` (stdin, files)
//! - [`ScriptedLines`]: replays a fixed sequence of lines

mod reader;
mod scripted;

pub use reader::*;
pub use scripted::*;

use crate::error::Result;

/// Source of textual entries, one line per request.
pub trait LineSource {
    /// Read the next line without its line terminator.
    ///
    /// Returns `Ok(None)` once the underlying stream is exhausted.
    fn read_line(&mut self) -> Result<Option<String>>;
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    fn read_line(&mut self) -> Result<Option<String>> {
        (**self).read_line()
    }
}
