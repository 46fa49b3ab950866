//! Configuration schema definitions.
//!
//! These structs map to the YAML `dependencies.yml` format:
//!
//! ```yaml
//! templates:
//!   pip-package:
//!     get_version: "python3 -m pip show {name}"
//!     pattern: "(?s).*Version: (\\S+)"
//!     depends: pip
//!
//! dependencies:
//!   python:
//!     require: ">=3.8"
//!     get_version: "python3 --version"
//!     pattern: "Python (.*)"
//!   pip:
//!     require: ">=22"
//!     get_version: "python3 -m pip --version"
//!     pattern: "pip (\\S+)"
//!     depends: python
//!   requests:
//!     template: pip-package
//!     require: ">=2.28"
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Root of a dependencies file. Both maps keep file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DependencyFile {
    /// Reusable entry defaults, referenced by `template:`
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub templates: IndexMap<String, DependencyEntry>,

    /// The checks themselves
    pub dependencies: IndexMap<String, DependencyEntry>,
}

/// One entry under `dependencies:` or `templates:`.
///
/// Every field is optional here; required fields are enforced once any
/// template has been applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DependencyEntry {
    /// Version constraint, e.g. `>=3.8`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require: Option<String>,

    /// Shell command that prints the version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get_version: Option<String>,

    /// Regex whose first group captures the version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub depends: Option<DependsOn>,

    /// Name of a template under `templates:`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

/// `depends:` as either `"a, b"` or a YAML list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DependsOn {
    List(Vec<String>),
    Csv(String),
}

impl DependsOn {
    /// Trimmed dependency names, blanks dropped.
    pub fn names(&self) -> Vec<String> {
        let items: Vec<&str> = match self {
            Self::List(items) => items.iter().map(String::as_str).collect(),
            Self::Csv(csv) => csv.split(',').collect(),
        };
        items
            .into_iter()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_file() {
        let yaml = r#"
dependencies:
  python:
    require: ">=3.8"
    get_version: python3 --version
"#;
        let file: DependencyFile = serde_yaml::from_str(yaml).unwrap();
        assert!(file.templates.is_empty());
        let python = &file.dependencies["python"];
        assert_eq!(python.require.as_deref(), Some(">=3.8"));
        assert_eq!(python.get_version.as_deref(), Some("python3 --version"));
        assert!(python.depends.is_none());
    }

    #[test]
    fn keeps_declaration_order() {
        let yaml = r#"
dependencies:
  zsh: {}
  bash: {}
  make: {}
"#;
        let file: DependencyFile = serde_yaml::from_str(yaml).unwrap();
        let names: Vec<_> = file.dependencies.keys().cloned().collect();
        assert_eq!(names, vec!["zsh", "bash", "make"]);
    }

    #[test]
    fn depends_accepts_comma_string() {
        let depends: DependsOn = serde_yaml::from_str("\"python, pip,, \"").unwrap();
        assert_eq!(depends.names(), vec!["python", "pip"]);
    }

    #[test]
    fn depends_accepts_list() {
        let depends: DependsOn = serde_yaml::from_str("[python, ' pip ']").unwrap();
        assert_eq!(depends.names(), vec!["python", "pip"]);
    }

    #[test]
    fn rejects_unknown_fields() {
        let yaml = r#"
dependencies:
  python:
    requires: ">=3.8"
"#;
        assert!(serde_yaml::from_str::<DependencyFile>(yaml).is_err());
    }

    #[test]
    fn empty_document_is_empty_file() {
        let file: DependencyFile = serde_yaml::from_str("{}").unwrap();
        assert_eq!(file, DependencyFile::default());
    }
}
