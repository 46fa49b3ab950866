//! Mock reporter for testing.
//!
//! `MockReporter` implements [`Reporter`] and records every notification,
//! rendered with the plain theme, for later assertion.
//!
//! # Example
//!
//! ```
//! use check_deps::runner::RunSummary;
//! use check_deps::ui::{MockReporter, Reporter};
//!
//! let reporter = MockReporter::new();
//! reporter.run_finished(&RunSummary::from_outcomes(&[]));
//! assert_eq!(reporter.summaries(), vec!["Success".to_string()]);
//! ```

use std::sync::{Mutex, PoisonError};

use crate::requirements::Outcome;
use crate::runner::RunSummary;

use super::{render_summary, status_line, CheckTheme, Reporter};

#[derive(Debug, Default)]
struct Captured {
    finished: Vec<String>,
    lines: Vec<String>,
    summaries: Vec<String>,
}

/// Reporter that captures output instead of printing it.
#[derive(Debug, Default)]
pub struct MockReporter {
    captured: Mutex<Captured>,
}

impl MockReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of finished checks, in notification order.
    pub fn finished(&self) -> Vec<String> {
        self.with(|c| c.finished.clone())
    }

    /// Rendered status lines, in notification order.
    pub fn lines(&self) -> Vec<String> {
        self.with(|c| c.lines.clone())
    }

    /// Rendered summaries.
    pub fn summaries(&self) -> Vec<String> {
        self.with(|c| c.summaries.clone())
    }

    fn with<T>(&self, f: impl FnOnce(&mut Captured) -> T) -> T {
        let mut captured = self.captured.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut captured)
    }
}

impl Reporter for MockReporter {
    fn check_finished(&self, outcome: &Outcome) {
        let line = status_line(outcome, &CheckTheme::plain());
        self.with(|c| {
            c.finished.push(outcome.name().to_string());
            c.lines.push(line);
        });
    }

    fn run_finished(&self, summary: &RunSummary) {
        let text = render_summary(summary, &CheckTheme::plain());
        self.with(|c| c.summaries.push(text));
    }
}
