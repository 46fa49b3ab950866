//! Configuration file loading.

use std::fs;
use std::path::Path;

use crate::config::schema::DependencyFile;
use crate::error::{CheckDepsError, Result};

/// File read when `--config` is not given, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "dependencies.yml";

/// Load a single config file and parse it into a [`DependencyFile`].
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<DependencyFile> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CheckDepsError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CheckDepsError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`DependencyFile`].
///
/// `source_path` is only used for error reporting. An empty document is an
/// empty configuration.
pub fn parse_config(content: &str, source_path: &Path) -> Result<DependencyFile> {
    if content.trim().is_empty() {
        return Ok(DependencyFile::default());
    }
    serde_yaml::from_str(content).map_err(|e| CheckDepsError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_config_file_reads_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_CONFIG_FILE);
        fs::write(
            &path,
            "dependencies:\n  git:\n    require: '>=2'\n    get_version: git --version\n",
        )
        .unwrap();

        let file = load_config_file(&path).unwrap();
        assert!(file.dependencies.contains_key("git"));
    }

    #[test]
    fn load_config_file_missing_is_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.yml");

        let err = load_config_file(&path).unwrap_err();
        assert!(matches!(err, CheckDepsError::ConfigNotFound { .. }));
    }

    #[test]
    fn parse_config_reports_path_on_error() {
        let err = parse_config("dependencies: [", Path::new("deps.yml")).unwrap_err();
        match err {
            CheckDepsError::ConfigParseError { path, .. } => {
                assert_eq!(path, Path::new("deps.yml"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_config_accepts_empty_content() {
        let file = parse_config("\n", Path::new("deps.yml")).unwrap();
        assert!(file.dependencies.is_empty());
    }
}
