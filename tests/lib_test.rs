//! Library integration tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use check_deps::config::{build_checks, parse_config};
use check_deps::requirements::{ShellCommand, VersionCommand};
use check_deps::runner::{Resolver, RunSummary};
use check_deps::shell::CommandResult;
use check_deps::ui::{MockReporter, NullReporter};
use check_deps::version::{parse_version, Relation, Version, VersionConstraint};
use check_deps::CheckDepsError;

/// Answers every command with `1.0` after a short pause and counts calls.
#[derive(Default)]
struct CountingCommand {
    calls: Mutex<HashMap<String, usize>>,
    total: AtomicUsize,
}

impl CountingCommand {
    fn calls(&self, command: &str) -> usize {
        self.calls.lock().unwrap().get(command).copied().unwrap_or(0)
    }
}

impl VersionCommand for CountingCommand {
    fn run(&self, command: &str) -> check_deps::Result<CommandResult> {
        *self
            .calls
            .lock()
            .unwrap()
            .entry(command.to_string())
            .or_default() += 1;
        self.total.fetch_add(1, Ordering::SeqCst);
        thread::sleep(Duration::from_millis(20));
        Ok(CommandResult::success(
            "1.0\n".into(),
            String::new(),
            Duration::ZERO,
        ))
    }
}

fn checks(yaml: &str) -> Vec<check_deps::requirements::CheckSpec> {
    build_checks(&parse_config(yaml, std::path::Path::new("dependencies.yml")).unwrap()).unwrap()
}

#[test]
fn error_types_are_public() {
    let err = CheckDepsError::UnknownTemplate {
        name: "test".into(),
    };
    assert!(err.to_string().contains("test"));
    assert!(err.is_configuration_error());
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> check_deps::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use check_deps::cli::{Cli, Commands};
    use clap::Parser;

    let cli = Cli::parse_from(["check-deps", "check", "--json"]);
    if let Some(Commands::Check(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Check command");
    }
}

#[test]
fn version_ordering_is_numeric() {
    let v = |n: &[u64]| Version::from_numbers(n);
    assert_eq!(v(&[1, 2]).compare(&v(&[1, 10])), std::cmp::Ordering::Less);
    assert_eq!(v(&[2, 0]).compare(&v(&[1, 9, 9])), std::cmp::Ordering::Greater);
}

#[test]
fn canonical_versions_round_trip() {
    for s in ["3.8.10", "1", "10.15.7", "0.0.1"] {
        assert_eq!(parse_version(s).unwrap().0.to_string(), s);
    }
}

#[test]
fn constraint_evaluation() {
    let c = VersionConstraint::new(Version::from_numbers(&[3, 8]), Relation::GE);
    assert!(c.is_satisfied_by(&Version::from_numbers(&[3, 9])));
    assert!(!c.is_satisfied_by(&Version::from_numbers(&[3, 7])));
}

#[test]
fn diamond_graph_runs_each_command_once() {
    let command = CountingCommand::default();
    let reporter = MockReporter::new();
    let resolver = Resolver::new(
        checks(
            r#"
dependencies:
  root:
    require: ">=1"
    get_version: root
  left:
    require: ">=1"
    get_version: left
    depends: root
  right:
    require: ">=1"
    get_version: right
    depends: root
  top:
    require: ">=1"
    get_version: top
    depends: left, right
"#,
        ),
        &command,
        &reporter,
    );

    let outcomes = resolver.run(&["top", "left", "right", "root"]).unwrap();

    assert_eq!(outcomes.len(), 4);
    assert!(outcomes.iter().all(|o| o.succeeded()));
    for name in ["root", "left", "right", "top"] {
        assert_eq!(command.calls(name), 1, "{name} ran more than once");
    }
    assert_eq!(command.total.load(Ordering::SeqCst), 4);

    let mut finished = reporter.finished();
    finished.sort();
    assert_eq!(finished, vec!["left", "right", "root", "top"]);
}

#[test]
fn dependency_on_cycle_fails_without_running() {
    let command = CountingCommand::default();
    let resolver = Resolver::new(
        checks(
            r#"
dependencies:
  a:
    require: ">=1"
    get_version: a
    depends: c
  b:
    require: ">=1"
    get_version: b
    depends: a
  c:
    require: ">=1"
    get_version: c
    depends: b
  d:
    require: ">=1"
    get_version: d
    depends: b
"#,
        ),
        &command,
        &NullReporter,
    );

    let outcomes = resolver.run_all();
    let summary = RunSummary::from_outcomes(&outcomes);

    assert!(!summary.success);
    assert_eq!(
        outcomes[0].failure_text().as_deref(),
        Some("Circular dependency: a -> c -> b -> a")
    );
    assert_eq!(
        outcomes[3].failure_text().as_deref(),
        Some("Failed dependency: b")
    );
    assert_eq!(command.total.load(Ordering::SeqCst), 0);
}

#[test]
fn shell_command_end_to_end() {
    let resolver_checks = checks(
        r#"
dependencies:
  python:
    require: ">=3.8"
    get_version: "echo 'Python 3.9.1'"
    pattern: "Python (.*)"
  newer:
    require: ">=3.10"
    get_version: "echo 'Python 3.9.1'"
    pattern: "Python (.*)"
  missing:
    require: ">=1"
    get_version: "echo 'not found' >&2; exit 3"
"#,
    );
    let command = ShellCommand::new();
    let resolver = Resolver::new(resolver_checks, &command, &NullReporter);

    let outcomes = resolver.run_all();

    assert!(outcomes[0].succeeded());
    assert!(outcomes[0].found_version().is_none());

    assert!(!outcomes[1].succeeded());
    assert_eq!(outcomes[1].failure_text().as_deref(), Some("Too old."));
    assert_eq!(
        outcomes[1].found_version(),
        Some(&Version::from_numbers(&[3, 9, 1]))
    );

    assert!(!outcomes[2].succeeded());
    assert_eq!(outcomes[2].failure_text().as_deref(), Some("not found"));
}
