//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`]. Running the binary without a subcommand is the
//! same as `check-deps check`.

pub mod check;
pub mod dispatcher;
pub mod list;

pub use check::CheckCommand;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use list::ListCommand;
