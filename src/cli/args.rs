//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// check-deps - Verify that the tools a project needs are installed.
#[derive(Debug, Parser)]
#[command(name = "check-deps")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the dependencies file (default: dependencies.yml)
    #[arg(short, long, global = true, env = "CHECK_DEPS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Only print the summary
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check configured dependencies (default if no command specified)
    Check(CheckArgs),

    /// List configured dependencies
    List,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Dependencies to check (default: all)
    pub names: Vec<String>,

    /// Print results as JSON instead of status lines
    #[arg(long)]
    pub json: bool,

    /// Kill a version command after this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_none() {
        let cli = Cli::try_parse_from(["check-deps"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.quiet);
    }

    #[test]
    fn check_takes_names_and_flags() {
        let cli = Cli::try_parse_from([
            "check-deps",
            "check",
            "python",
            "pip",
            "--json",
            "--timeout",
            "5",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Check(args)) => {
                assert_eq!(args.names, vec!["python", "pip"]);
                assert!(args.json);
                assert_eq!(args.timeout, Some(5));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["check-deps", "list", "--config", "deps.yml", "--no-color"])
                .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("deps.yml")));
        assert!(cli.no_color);
        assert!(matches!(cli.command, Some(Commands::List)));
    }

    #[test]
    fn rejects_non_numeric_timeout() {
        assert!(Cli::try_parse_from(["check-deps", "check", "--timeout", "soon"]).is_err());
    }
}
