//! Turning parsed configuration into checks.

use crate::config::schema::{DependencyEntry, DependencyFile};
use crate::config::template::apply_template;
use crate::error::{CheckDepsError, Result};
use crate::requirements::{CheckSpec, ExtractPattern};
use crate::version::parse_constraint;

/// Build every configured check, in declaration order.
///
/// Fails on the first invalid entry; no check is built from a partially
/// valid file.
pub fn build_checks(file: &DependencyFile) -> Result<Vec<CheckSpec>> {
    file.dependencies
        .iter()
        .map(|(name, entry)| {
            let entry = apply_template(name, entry, &file.templates)?;
            build_check(name, &entry)
        })
        .collect()
}

/// Build one check from an already expanded entry.
pub fn build_check(name: &str, entry: &DependencyEntry) -> Result<CheckSpec> {
    let require = entry
        .require
        .as_deref()
        .ok_or_else(|| missing_field(name, "require"))?;
    let get_version = entry
        .get_version
        .as_deref()
        .ok_or_else(|| missing_field(name, "get_version"))?;

    let (requirement, _) = parse_constraint(require)?;

    let mut check = CheckSpec::new(name, requirement, get_version);
    if let Some(source) = &entry.pattern {
        let pattern = ExtractPattern::new(source).map_err(|reason| {
            CheckDepsError::ConfigValidationError {
                message: format!("`{}` has an invalid pattern: {}", name, reason),
            }
        })?;
        check = check.with_pattern(pattern);
    }
    if let Some(depends) = &entry.depends {
        check = check.with_dependencies(depends.names());
    }
    check.suggestion_text = entry.suggestion_text.clone();
    check.suggestion = entry.suggestion.clone();

    Ok(check)
}

fn missing_field(name: &str, field: &str) -> CheckDepsError {
    CheckDepsError::ConfigValidationError {
        message: format!("`{}` needs a `{}` field", name, field),
    }
}
