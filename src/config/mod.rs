//! Configuration loading and check construction.
//!
//! This module handles:
//! - Schema definitions in [`schema`]
//! - File loading in [`loader`]
//! - Template expansion in [`template`]
//! - Building [`CheckSpec`]s in [`builder`]
//!
//! # Example
//!
//! ```
//! use check_deps::config::load_checks;
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("dependencies.yml");
//! fs::write(
//!     &path,
//!     "dependencies:\n  sh:\n    require: '>=0'\n    get_version: echo 1.0\n",
//! )
//! .unwrap();
//!
//! let checks = load_checks(&path).unwrap();
//! assert_eq!(checks[0].name, "sh");
//! ```

pub mod builder;
pub mod loader;
pub mod schema;
pub mod template;

pub use builder::{build_check, build_checks};
pub use loader::{load_config_file, parse_config, DEFAULT_CONFIG_FILE};
pub use schema::{DependencyEntry, DependencyFile, DependsOn};
pub use template::{apply_template, expand_name};

use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::requirements::CheckSpec;

/// Load a dependencies file and build its checks.
pub fn load_checks(path: &Path) -> Result<Vec<CheckSpec>> {
    let file = load_config_file(path)?;
    let checks = build_checks(&file)?;
    debug!(path = %path.display(), checks = checks.len(), "Loaded configuration");
    Ok(checks)
}
