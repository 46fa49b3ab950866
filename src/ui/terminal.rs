//! Terminal reporter.

use console::Term;

use crate::requirements::Outcome;
use crate::runner::RunSummary;

use super::{render_summary, status_line, CheckTheme, OutputMode, Reporter};

/// Prints a status line per check and the summary to stdout.
pub struct TerminalReporter {
    term: Term,
    theme: CheckTheme,
    mode: OutputMode,
}

impl TerminalReporter {
    pub fn new(mode: OutputMode, no_color: bool) -> Self {
        Self {
            term: Term::stdout(),
            theme: CheckTheme::detect(no_color),
            mode,
        }
    }
}

impl Reporter for TerminalReporter {
    fn check_finished(&self, outcome: &Outcome) {
        if self.mode.shows_progress() {
            // One call per line keeps lines from different threads whole.
            self.term.write_line(&status_line(outcome, &self.theme)).ok();
        }
    }

    fn run_finished(&self, summary: &RunSummary) {
        if self.mode.shows_status() {
            self.term
                .write_line(&render_summary(summary, &self.theme))
                .ok();
        }
    }
}
