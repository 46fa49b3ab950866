//! Immutable description of one configured version check.

use std::fmt;

use regex::Regex;

use crate::version::{ParseError, VersionConstraint};

/// Regex that picks the version out of a command's output.
///
/// Matching is anchored at the start of the output and the first capture
/// group holds the version text.
#[derive(Debug, Clone)]
pub struct ExtractPattern {
    source: String,
    regex: Regex,
}

impl ExtractPattern {
    /// Compile `source`, which must contain at least one capture group.
    pub fn new(source: &str) -> std::result::Result<Self, String> {
        let regex = Regex::new(&format!(r"\A(?:{})", source)).map_err(|e| e.to_string())?;
        if regex.captures_len() < 2 {
            return Err(format!("pattern `{}` has no capture group", source));
        }
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// The pattern as written in the configuration.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Return the trimmed first capture group.
    pub fn extract<'a>(&self, output: &'a str) -> Result<&'a str, ParseError> {
        self.regex
            .captures(output)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .ok_or_else(|| {
                let first_line = output.lines().next().unwrap_or("").trim();
                ParseError::new(format!(
                    "Pattern `{}` did not match output: {}",
                    self.source, first_line
                ))
            })
    }
}

impl fmt::Display for ExtractPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// One named check: the command to run and the constraint its result must meet.
#[derive(Debug, Clone)]
pub struct CheckSpec {
    pub name: String,
    pub requirement: VersionConstraint,
    /// Shell command that prints the tool's version.
    pub version_command: String,
    pub extract_pattern: Option<ExtractPattern>,
    /// Human-readable advice shown when the check fails.
    pub suggestion_text: Option<String>,
    /// Command that would fix a failing check.
    pub suggestion: Option<String>,
    /// Names of checks that must succeed first.
    pub depends_on: Vec<String>,
}

impl CheckSpec {
    /// Create a check with no pattern, suggestions or dependencies.
    pub fn new(
        name: impl Into<String>,
        requirement: VersionConstraint,
        version_command: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            requirement,
            version_command: version_command.into(),
            extract_pattern: None,
            suggestion_text: None,
            suggestion: None,
            depends_on: Vec::new(),
        }
    }

    pub fn with_pattern(mut self, pattern: ExtractPattern) -> Self {
        self.extract_pattern = Some(pattern);
        self
    }

    pub fn with_dependencies(mut self, depends_on: Vec<String>) -> Self {
        self.depends_on = depends_on;
        self
    }

    /// Select the version text from the command's stdout.
    pub fn version_text<'a>(&self, stdout: &'a str) -> Result<&'a str, ParseError> {
        match &self.extract_pattern {
            Some(pattern) => pattern.extract(stdout),
            None => Ok(stdout.trim()),
        }
    }

    /// `suggestion` with `{name}` and `{require}` filled in.
    pub fn rendered_suggestion(&self) -> Option<String> {
        self.suggestion.as_ref().map(|s| {
            s.replace("{name}", &self.name)
                .replace("{require}", &self.requirement.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::parse_constraint;

    fn spec() -> CheckSpec {
        let (require, _) = parse_constraint(">=3.8").unwrap();
        CheckSpec::new("python", require, "python3 --version")
    }

    #[test]
    fn pattern_requires_capture_group() {
        assert!(ExtractPattern::new("Python .*").is_err());
        assert!(ExtractPattern::new("Python (.*)").is_ok());
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        assert!(ExtractPattern::new("Python (").is_err());
    }

    #[test]
    fn pattern_extracts_first_group() {
        let pattern = ExtractPattern::new("Python (.*)").unwrap();
        assert_eq!(pattern.extract("Python 3.9.1\n").unwrap(), "3.9.1");
    }

    #[test]
    fn pattern_is_anchored_at_start() {
        let pattern = ExtractPattern::new("Python (.*)").unwrap();
        let err = pattern.extract("CPython 3.9.1").unwrap_err();
        assert!(err.message().contains("did not match"));
        assert!(err.message().contains("CPython 3.9.1"));
    }

    #[test]
    fn pattern_need_not_match_whole_output() {
        let pattern = ExtractPattern::new(r"git version (\S+)").unwrap();
        assert_eq!(
            pattern.extract("git version 2.43.0 (Apple Git-115)").unwrap(),
            "2.43.0"
        );
    }

    #[test]
    fn version_text_defaults_to_trimmed_stdout() {
        assert_eq!(spec().version_text("  3.10.2 \n").unwrap(), "3.10.2");
    }

    #[test]
    fn version_text_uses_pattern() {
        let spec = spec().with_pattern(ExtractPattern::new("Python (.*)").unwrap());
        assert_eq!(spec.version_text("Python 3.11.4").unwrap(), "3.11.4");
    }

    #[test]
    fn suggestion_is_rendered() {
        let mut spec = spec();
        spec.suggestion = Some("mise install {name}@'{require}'".into());
        assert_eq!(
            spec.rendered_suggestion().unwrap(),
            "mise install python@'>=3.8'"
        );
    }
}
