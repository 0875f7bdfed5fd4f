//! Single-line terminal spinner with a success/fail status line.
//!
//! ```no_run
//! # async fn demo() {
//! let spinner = spinline::Spinner::new("Loading").run();
//! // ... do the work ...
//! spinner.success().await;
//! # }
//! ```

pub mod config;
pub mod cursor;
pub mod logging;
pub mod spinner;
pub mod style;

#[cfg(test)]
pub mod test_utils;

pub use config::Config;
pub use cursor::{AnsiCursor, CursorControl, NoCursor};
pub use spinner::{Outcome, RunningSpinner, Spinner, TICK};
pub use style::Style;
