//! Version checks for external tools.
//!
//! # Modules
//!
//! - [`check`] - Immutable check definitions and version extraction
//! - [`checker`] - Memoized, dependency-aware evaluation of one check
//! - [`command`] - The subprocess seam used to run version commands
//! - [`status`] - Outcome types for evaluated checks

pub mod check;
pub mod checker;
pub mod command;
pub mod status;

pub use check::{CheckSpec, ExtractPattern};
pub use checker::{CheckContext, CheckNode};
pub use command::{ShellCommand, VersionCommand};
pub use status::{CheckStatus, Outcome};
