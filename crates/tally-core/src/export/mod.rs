//! Summary output formats.
//!
//! - **Text**: the console summary line
//! - **JSON**: one object per session for scripting

mod format;
mod json;
mod text;

pub use format::SummaryFormat;
pub use json::*;
pub use text::*;
