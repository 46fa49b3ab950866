//! Shell command execution.

use crate::error::{CheckDepsError, Result};
use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// How often a child with a deadline is polled for completion.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal or timed out).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Kill the command after this long (None = no timeout).
    pub timeout: Option<Duration>,
}

/// Execute a shell command, capturing stdout and stderr.
///
/// A non-zero exit is reported through [`CommandResult::success`]; only a
/// failure to start the shell is an error.
pub fn execute(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(shell());
    cmd.arg(shell_flag());
    cmd.arg(command);

    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let mut child = cmd.spawn().map_err(|e| {
        tracing::warn!("Failed to spawn shell for `{}`: {}", command, e);
        spawn_error(command)
    })?;

    // Both pipes are drained while the child runs.
    let mut stdout_pipe = child.stdout.take();
    let mut stderr_pipe = child.stderr.take();
    let stdout_handle = thread::spawn(move || read_pipe(stdout_pipe.as_mut()));
    let stderr_handle = thread::spawn(move || read_pipe(stderr_pipe.as_mut()));

    let status = match options.timeout {
        Some(limit) => wait_with_deadline(&mut child, start + limit),
        None => child.wait().map(Some),
    }
    .map_err(|_| spawn_error(command))?;

    let Some(status) = status else {
        // Background processes started by the command may still hold the
        // pipes open, so the reader threads are left to finish on their own.
        let duration = start.elapsed();
        let limit = options.timeout.unwrap_or_default();
        tracing::debug!("`{}` timed out after {:?}", command, limit);
        return Ok(CommandResult::failure(
            None,
            String::new(),
            format!("timed out after {}s", limit.as_secs()),
            duration,
        ));
    };

    let stdout = stdout_handle.join().unwrap_or_default();
    let stderr = stderr_handle.join().unwrap_or_default();
    let duration = start.elapsed();

    if status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(
            status.code(),
            stdout,
            stderr,
            duration,
        ))
    }
}

/// Wait for `child`, killing it once `deadline` passes.
///
/// Returns `None` if the child was killed.
fn wait_with_deadline(child: &mut Child, deadline: Instant) -> std::io::Result<Option<ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

fn read_pipe<R: Read>(pipe: Option<&mut R>) -> String {
    let mut bytes = Vec::new();
    if let Some(pipe) = pipe {
        let _ = pipe.read_to_end(&mut bytes);
    }
    String::from_utf8_lossy(&bytes).into_owned()
}

fn spawn_error(command: &str) -> CheckDepsError {
    CheckDepsError::CommandFailed {
        command: command.to_string(),
        code: None,
    }
}

/// The shell used to run commands.
///
/// Always the POSIX shell, never `$SHELL`.
fn shell() -> &'static str {
    if cfg!(target_os = "windows") {
        "cmd.exe"
    } else {
        "/bin/sh"
    }
}

/// Get the flag to pass commands to the shell.
fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-c"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execute_successful_command() {
        let result = execute("echo hello", &CommandOptions::default()).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[test]
    fn execute_failing_command() {
        let result = execute("exit 1", &CommandOptions::default()).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(1));
    }

    #[cfg(unix)]
    #[test]
    fn execute_captures_stderr() {
        let result = execute("echo 'not found' >&2; exit 127", &CommandOptions::default()).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(127));
        assert_eq!(result.stderr.trim(), "not found");
    }

    #[cfg(unix)]
    #[test]
    fn execute_inherits_environment() {
        let result = execute("echo \"$PATH\"", &CommandOptions::default()).unwrap();

        assert!(result.success);
        assert!(!result.stdout.trim().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn execute_kills_command_after_timeout() {
        let options = CommandOptions {
            timeout: Some(Duration::from_millis(200)),
            ..Default::default()
        };

        let result = execute("sleep 5", &options).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, None);
        assert!(result.stderr.contains("timed out after"));
        assert!(result.duration < Duration::from_secs(5));
    }

    #[test]
    fn execute_within_timeout_succeeds() {
        let options = CommandOptions {
            timeout: Some(Duration::from_secs(10)),
            ..Default::default()
        };

        let result = execute("echo fast", &options).unwrap();

        assert!(result.success);
        assert!(result.stdout.contains("fast"));
    }

    #[test]
    fn command_result_tracks_duration() {
        let result = execute("echo fast", &CommandOptions::default()).unwrap();

        assert!(result.duration.as_millis() < 5000);
    }
}
