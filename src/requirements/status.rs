//! Outcome types for evaluated checks.
//!
//! Every check produces exactly one [`Outcome`], shared by reference with all
//! checks that asked for it.

use std::sync::Arc;

use serde::Serialize;

use super::check::CheckSpec;
use crate::version::Version;

/// Why a check ended the way it did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// The tool reported a version that meets the constraint.
    Satisfied { version: Version },

    /// The tool reported a version outside the constraint.
    Unsatisfied { version: Version },

    /// The version command exited non-zero (or could not be started).
    CommandFailed { stderr: String },

    /// The command's output did not yield a version.
    UnreadableVersion { message: String },

    /// A dependency failed or is not configured; the command never ran.
    FailedDependency { name: String },

    /// The check lies on a dependency cycle; the command never ran.
    CircularDependency { cycle: Vec<String> },

    /// Evaluation was interrupted before producing a result.
    Aborted { message: String },
}

/// The cached result of evaluating one check.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub check: Arc<CheckSpec>,
    pub status: CheckStatus,
}

impl Outcome {
    pub fn new(check: Arc<CheckSpec>, status: CheckStatus) -> Self {
        Self { check, status }
    }

    /// Name of the check this outcome belongs to.
    pub fn name(&self) -> &str {
        &self.check.name
    }

    pub fn succeeded(&self) -> bool {
        matches!(self.status, CheckStatus::Satisfied { .. })
    }

    /// Diagnostic text for a failed check.
    pub fn failure_text(&self) -> Option<String> {
        match &self.status {
            CheckStatus::Satisfied { .. } => None,
            CheckStatus::Unsatisfied { .. } => Some("Too old.".to_string()),
            CheckStatus::CommandFailed { stderr } => Some(stderr.trim().to_string()),
            CheckStatus::UnreadableVersion { message } | CheckStatus::Aborted { message } => {
                Some(message.clone())
            }
            CheckStatus::FailedDependency { name } => Some(format!("Failed dependency: {}", name)),
            CheckStatus::CircularDependency { cycle } => {
                Some(format!("Circular dependency: {}", cycle.join(" -> ")))
            }
        }
    }

    /// The version found, only when it was found but did not satisfy the constraint.
    pub fn found_version(&self) -> Option<&Version> {
        match &self.status {
            CheckStatus::Unsatisfied { version } => Some(version),
            _ => None,
        }
    }

    /// The version the tool reported, whether or not it was acceptable.
    pub fn detected_version(&self) -> Option<&Version> {
        match &self.status {
            CheckStatus::Satisfied { version } | CheckStatus::Unsatisfied { version } => {
                Some(version)
            }
            _ => None,
        }
    }
}

impl Serialize for Outcome {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Repr<'a> {
            name: &'a str,
            require: String,
            succeeded: bool,
            #[serde(skip_serializing_if = "Option::is_none")]
            version: Option<&'a Version>,
            #[serde(skip_serializing_if = "Option::is_none")]
            failure_text: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            found_version: Option<&'a Version>,
        }

        Repr {
            name: self.name(),
            require: self.check.requirement.to_string(),
            succeeded: self.succeeded(),
            version: self.detected_version(),
            failure_text: self.failure_text(),
            found_version: self.found_version(),
        }
        .serialize(serializer)
    }
}
