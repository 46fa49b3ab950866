//! Terminal output for check runs.
//!
//! This module provides:
//! - [`Reporter`] trait, notified as checks finish (possibly from worker threads)
//! - [`TerminalReporter`] for coloured terminal output
//! - [`MockReporter`] for capturing output in tests
//! - [`status_line`] and [`render_summary`] for the text itself
//!
//! # Example
//!
//! ```
//! use check_deps::ui::MockReporter;
//!
//! let reporter = MockReporter::new();
//! assert!(reporter.lines().is_empty());
//! ```

pub mod mock;
pub mod output;
pub mod report;
pub mod terminal;
pub mod theme;

pub use mock::MockReporter;
pub use output::{Output, OutputMode};
pub use report::{render_summary, status_line};
pub use terminal::TerminalReporter;
pub use theme::{should_use_colors, CheckTheme};

use crate::requirements::Outcome;
use crate::runner::RunSummary;

/// Receives results as a run progresses.
///
/// `check_finished` is called exactly once for every check a run reaches,
/// from whichever thread reached it.
pub trait Reporter: Send + Sync {
    fn check_finished(&self, outcome: &Outcome);

    /// Called once after all requested checks have settled.
    fn run_finished(&self, _summary: &RunSummary) {}
}

/// Reporter that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn check_finished(&self, _outcome: &Outcome) {}
}
