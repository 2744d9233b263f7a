//! Score entries and session statistics.
//!
//! - **Entry parsing**: classify a raw line as the sentinel or a score
//! - **Score list**: ordered, finite-only storage for one session
//! - **Summary**: count, total and average derived from a non-empty list

mod entry;
mod list;
mod summary;

pub use entry::*;
pub use list::*;
pub use summary::*;
