//! Check command implementation.
//!
//! The `check-deps check` command evaluates the requested checks (or all of
//! them), prints a status line as each one settles, then the summary.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tracing::debug;

use crate::cli::args::CheckArgs;
use crate::config::load_checks;
use crate::error::Result;
use crate::requirements::{Outcome, ShellCommand, VersionCommand};
use crate::runner::{Resolver, RunSummary};
use crate::ui::{Output, OutputMode, Reporter, TerminalReporter};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    config_path: PathBuf,
    args: CheckArgs,
}

impl CheckCommand {
    pub fn new(config_path: &Path, args: CheckArgs) -> Self {
        Self {
            config_path: config_path.to_path_buf(),
            args,
        }
    }

    fn version_command(&self) -> ShellCommand {
        match self.args.timeout {
            Some(secs) => ShellCommand::new().with_timeout(Duration::from_secs(secs)),
            None => ShellCommand::new(),
        }
    }

    /// Evaluate the requested checks against `command`, reporting to `reporter`.
    pub fn run_checks(
        &self,
        command: &dyn VersionCommand,
        reporter: &dyn Reporter,
    ) -> Result<(Vec<Arc<Outcome>>, RunSummary)> {
        let checks = load_checks(&self.config_path)?;
        let resolver = Resolver::new(checks, command, reporter);

        let outcomes = if self.args.names.is_empty() {
            resolver.run_all()
        } else {
            resolver.run(&self.args.names)?
        };

        let summary = RunSummary::from_outcomes(&outcomes);
        debug!(
            success = summary.success,
            failures = summary.failures.len(),
            "Run finished"
        );
        reporter.run_finished(&summary);
        Ok((outcomes, summary))
    }
}

impl Command for CheckCommand {
    fn execute(&self, output: &Output) -> Result<CommandResult> {
        let mode = if self.args.json {
            OutputMode::Silent
        } else {
            output.mode()
        };
        let reporter = TerminalReporter::new(mode, output.no_color());
        let command = self.version_command();

        let (outcomes, summary) = self.run_checks(&command, &reporter)?;

        if self.args.json {
            let checks: Vec<&Outcome> = outcomes.iter().map(Arc::as_ref).collect();
            let report = json!({
                "success": summary.success,
                "checks": checks,
                "failures": summary.failures,
            });
            let text = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            println!("{}", text);
        }

        Ok(if summary.success {
            CommandResult::success()
        } else {
            CommandResult::failure(summary.exit_code())
        })
    }
}
