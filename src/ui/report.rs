//! Text rendering for status lines and the final summary.

use crate::requirements::{CheckStatus, Outcome};
use crate::runner::RunSummary;

use super::CheckTheme;

const LABEL_WIDTH: usize = 25;
const VERSION_WIDTH: usize = 10;
const GUTTER: &str = "  |  ";

/// One line for a settled check, e.g. `python >=3.8             : 3.11.2     Ok`.
pub fn status_line(outcome: &Outcome, theme: &CheckTheme) -> String {
    let label = format!("{} {}", outcome.name(), outcome.check.requirement);
    let result = match &outcome.status {
        CheckStatus::Satisfied { version } => format!(
            "{} {}",
            theme.version.apply_to(format!("{:<VERSION_WIDTH$}", version.to_string())),
            theme.success.apply_to("Ok")
        ),
        CheckStatus::Unsatisfied { version } => format!(
            "{} {}",
            theme.version.apply_to(format!("{:<VERSION_WIDTH$}", version.to_string())),
            theme.error.apply_to("Fail")
        ),
        CheckStatus::CommandFailed { .. } => theme.error.apply_to("not found").to_string(),
        CheckStatus::UnreadableVersion { .. } => {
            theme.error.apply_to("unreadable version").to_string()
        }
        CheckStatus::FailedDependency { .. } => {
            theme.skipped.apply_to("skipped (needs dep)").to_string()
        }
        CheckStatus::CircularDependency { .. } => {
            theme.skipped.apply_to("circular dependency").to_string()
        }
        CheckStatus::Aborted { .. } => theme.error.apply_to("aborted").to_string(),
    };
    format!("{:<LABEL_WIDTH$}: {}", label, result)
}

/// `Success`, or `Failure` followed by one block per failed check.
pub fn render_summary(summary: &RunSummary, theme: &CheckTheme) -> String {
    if summary.success {
        return theme.success.apply_to("Success").to_string();
    }

    let gutter = theme.dim.apply_to(GUTTER);
    let mut lines = vec![theme.error.apply_to("Failure").to_string()];
    for failure in &summary.failures {
        lines.push(format!("{}{}: {}", gutter, failure.name, failure.failure_text));
        if let Some(found) = &failure.found_version {
            lines.push(format!(
                "{}    found version {}",
                gutter,
                theme.version.apply_to(found)
            ));
        }
        if let Some(text) = &failure.suggestion_text {
            lines.push(format!("{}    hint: {}", gutter, theme.hint.apply_to(text)));
        }
        if let Some(command) = &failure.suggestion {
            lines.push(format!("{}    try: {}", gutter, theme.command.apply_to(command)));
        }
    }
    lines.join("\n")
}
