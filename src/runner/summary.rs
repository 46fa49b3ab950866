//! Aggregated result of a run.

use std::sync::Arc;

use serde::Serialize;

use crate::requirements::Outcome;

/// One failed check, reduced to what the report shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub name: String,
    pub failure_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Failure {
    fn from_outcome(outcome: &Outcome) -> Option<Self> {
        let failure_text = outcome.failure_text()?;
        Some(Self {
            name: outcome.name().to_string(),
            failure_text,
            found_version: outcome.found_version().map(ToString::to_string),
            suggestion_text: outcome.check.suggestion_text.clone(),
            suggestion: outcome.check.rendered_suggestion(),
        })
    }
}

/// Overall success plus the failures, in the order checks were requested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub success: bool,
    pub failures: Vec<Failure>,
}

impl RunSummary {
    pub fn from_outcomes(outcomes: &[Arc<Outcome>]) -> Self {
        let failures: Vec<Failure> = outcomes
            .iter()
            .filter_map(|outcome| Failure::from_outcome(outcome))
            .collect();

        Self {
            success: failures.is_empty(),
            failures,
        }
    }

    /// Process exit code for this run.
    pub fn exit_code(&self) -> i32 {
        if self.success {
            0
        } else {
            1
        }
    }
}
