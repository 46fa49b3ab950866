//! List command implementation.
//!
//! The `check-deps list` command shows every configured check without
//! running anything.

use std::path::{Path, PathBuf};

use crate::config::load_checks;
use crate::error::Result;
use crate::requirements::CheckSpec;
use crate::ui::{CheckTheme, Output};

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    config_path: PathBuf,
}

impl ListCommand {
    pub fn new(config_path: &Path) -> Self {
        Self {
            config_path: config_path.to_path_buf(),
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, output: &Output) -> Result<CommandResult> {
        let checks = load_checks(&self.config_path)?;
        for line in list_lines(&checks, output.theme()) {
            output.println(&line);
        }
        Ok(CommandResult::success())
    }
}

/// Two or three lines per check: name and constraint, command, dependencies.
pub fn list_lines(checks: &[CheckSpec], theme: &CheckTheme) -> Vec<String> {
    let mut lines = Vec::new();
    for check in checks {
        lines.push(format!(
            "{} {}",
            theme.version.apply_to(&check.name),
            check.requirement
        ));
        lines.push(format!(
            "    {} {}",
            theme.dim.apply_to("command:"),
            theme.command.apply_to(&check.version_command)
        ));
        if !check.depends_on.is_empty() {
            lines.push(format!(
                "    {} {}",
                theme.dim.apply_to("depends on:"),
                check.depends_on.join(", ")
            ));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::parse_constraint;

    #[test]
    fn lists_checks_with_dependencies() {
        let (python_req, _) = parse_constraint(">=3.8").unwrap();
        let (pip_req, _) = parse_constraint(">=22").unwrap();
        let checks = vec![
            CheckSpec::new("python", python_req, "python3 --version"),
            CheckSpec::new("pip", pip_req, "pip --version")
                .with_dependencies(vec!["python".into()]),
        ];

        let lines = list_lines(&checks, &CheckTheme::plain());

        assert_eq!(
            lines,
            vec![
                "python >=3.8",
                "    command: python3 --version",
                "pip >=22",
                "    command: pip --version",
                "    depends on: python",
            ]
        );
    }
}
