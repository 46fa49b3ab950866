//! Error types for check-deps operations.
//!
//! This module defines [`CheckDepsError`], the error type returned by
//! configuration loading and command dispatch, and a [`Result`] alias.
//!
//! # Error Handling Strategy
//!
//! - Configuration problems are `CheckDepsError` values and abort the run
//!   before any check executes
//! - Problems with a single check (bad tool output, non-zero exit, failed
//!   dependency) are never errors; they become that check's failed
//!   [`Outcome`](crate::requirements::Outcome)
//! - Use `anyhow::Error` (via `CheckDepsError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

use crate::version::ParseError;

/// Core error type for check-deps operations.
#[derive(Debug, Error)]
pub enum CheckDepsError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Referenced template does not exist.
    #[error("Unknown template: {name}")]
    UnknownTemplate { name: String },

    /// A requested check is not configured.
    #[error("Unknown dependency: {name}")]
    UnknownDependency { name: String },

    /// A constraint string in the configuration is malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Shell command could not be run at all.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CheckDepsError {
    /// Whether this error stems from the configuration rather than the system.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. }
                | Self::ConfigParseError { .. }
                | Self::ConfigValidationError { .. }
                | Self::UnknownTemplate { .. }
                | Self::UnknownDependency { .. }
                | Self::Parse(_)
        )
    }
}

/// Result type alias for check-deps operations.
pub type Result<T> = std::result::Result<T, CheckDepsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = CheckDepsError::ConfigNotFound {
            path: PathBuf::from("/foo/dependencies.yml"),
        };
        assert!(err.to_string().contains("/foo/dependencies.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = CheckDepsError::ConfigParseError {
            path: PathBuf::from("/dependencies.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/dependencies.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn unknown_dependency_displays_name() {
        let err = CheckDepsError::UnknownDependency {
            name: "pyhton".into(),
        };
        assert_eq!(err.to_string(), "Unknown dependency: pyhton");
    }

    #[test]
    fn parse_error_is_transparent() {
        let err: CheckDepsError = ParseError::new("Not a comparison operator: ~1.0").into();
        assert_eq!(err.to_string(), "Not a comparison operator: ~1.0");
    }

    #[test]
    fn configuration_errors_are_classified() {
        assert!(CheckDepsError::UnknownTemplate { name: "x".into() }.is_configuration_error());
        assert!(CheckDepsError::ConfigValidationError {
            message: "missing".into()
        }
        .is_configuration_error());
        assert!(!CheckDepsError::CommandFailed {
            command: "sh".into(),
            code: None
        }
        .is_configuration_error());
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: CheckDepsError = io_err.into();
        assert!(matches!(err, CheckDepsError::Io(_)));
    }
}
