//! check-deps - Verify that the tools a project needs are installed.
//!
//! Each configured dependency names a shell command that prints a version,
//! an optional regex that extracts it, and a constraint such as `>=3.8`.
//! Checks may depend on each other; a check whose dependency fails is never
//! run. Independent checks are evaluated concurrently and every check runs
//! at most once, however many others depend on it.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Loading `dependencies.yml` and building checks
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - Check definitions, outcomes and memoized evaluation
//! - [`runner`] - Concurrent evaluation, cycle detection and run summaries
//! - [`shell`] - Shell command execution
//! - [`ui`] - Status lines, summaries and terminal output
//! - [`version`] - Version and constraint parsing
//!
//! # Example
//!
//! ```
//! use check_deps::version::{parse_constraint, parse_version};
//!
//! let (require, _) = parse_constraint(">=3.8").unwrap();
//! let (found, _) = parse_version("3.11.4").unwrap();
//! assert!(require.is_satisfied_by(&found));
//! ```
//!
//! For file-based runs, see the integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod requirements;
pub mod runner;
pub mod shell;
pub mod ui;
pub mod version;

pub use error::{CheckDepsError, Result};
