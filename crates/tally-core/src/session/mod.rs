//! Interactive score collection.
//!
//! A session prompts for one score per line until the sentinel token is
//! entered, then reports count, total and average:
//!
//! - **State**: `Collecting` until the sentinel, then `Done`
//! - **Collector**: the prompt/read/validate loop and final report
//!
//! Lines that are not numbers are reported and skipped; they never end the
//! session. End of input is treated like the sentinel.

mod collector;
mod state;

pub use collector::*;
pub use state::*;
