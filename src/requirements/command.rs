//! The subprocess seam used by version checks.

use std::time::Duration;

use crate::error::Result;
use crate::shell::{self, CommandOptions, CommandResult};

/// Runs a version command and captures its output.
///
/// Implementations are shared between worker threads.
pub trait VersionCommand: Send + Sync {
    fn run(&self, command: &str) -> Result<CommandResult>;
}

/// Runs version commands through the system shell.
#[derive(Debug, Clone, Default)]
pub struct ShellCommand {
    options: CommandOptions,
}

impl ShellCommand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kill version commands that take longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = Some(timeout);
        self
    }
}

impl VersionCommand for ShellCommand {
    fn run(&self, command: &str) -> Result<CommandResult> {
        shell::execute(command, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_command_captures_stdout() {
        let result = ShellCommand::new().run("echo 'Python 3.9.1'").unwrap();
        assert!(result.success);
        assert_eq!(result.stdout.trim(), "Python 3.9.1");
    }

    #[cfg(unix)]
    #[test]
    fn shell_command_applies_timeout() {
        let runner = ShellCommand::new().with_timeout(Duration::from_millis(100));
        let result = runner.run("sleep 3").unwrap();
        assert!(!result.success);
        assert!(result.stderr.starts_with("timed out"));
    }
}
