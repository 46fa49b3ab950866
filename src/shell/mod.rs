//! Shell command execution.

pub mod command;

pub use command::{execute, CommandOptions, CommandResult};
