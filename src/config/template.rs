//! Template expansion.
//!
//! A template's string fields become defaults for every entry that names
//! it, with `{name}` replaced by the entry's name. `{require}` is kept for
//! the suggestion renderer. `{{` and `}}` are literal braces.

use indexmap::IndexMap;

use crate::config::schema::{DependencyEntry, DependsOn};
use crate::error::{CheckDepsError, Result};

/// Replace `{name}` in `input`, leaving `{require}` in place.
///
/// # Errors
///
/// Any other placeholder, or an unbalanced brace, is a
/// `ConfigValidationError`.
pub fn expand_name(input: &str, name: &str) -> Result<String> {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '{' => {
                let mut placeholder = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    placeholder.push(c);
                }
                if !closed {
                    return Err(invalid(input, "unclosed `{`"));
                }
                match placeholder.as_str() {
                    "name" => out.push_str(name),
                    "require" => out.push_str("{require}"),
                    _ => {
                        return Err(invalid(
                            input,
                            &format!("unknown placeholder `{{{}}}`", placeholder),
                        ))
                    }
                }
            }
            '}' => return Err(invalid(input, "unmatched `}`")),
            c => out.push(c),
        }
    }

    Ok(out)
}

fn invalid(input: &str, reason: &str) -> CheckDepsError {
    CheckDepsError::ConfigValidationError {
        message: format!("template value `{}`: {}", input, reason),
    }
}

/// Return `entry` with its template's defaults filled in.
///
/// Entries without `template:` are returned unchanged.
pub fn apply_template(
    name: &str,
    entry: &DependencyEntry,
    templates: &IndexMap<String, DependencyEntry>,
) -> Result<DependencyEntry> {
    let Some(template_name) = &entry.template else {
        return Ok(entry.clone());
    };

    let template = templates
        .get(template_name)
        .ok_or_else(|| CheckDepsError::UnknownTemplate {
            name: template_name.clone(),
        })?;

    if template.template.is_some() {
        return Err(CheckDepsError::ConfigValidationError {
            message: format!("template `{}` cannot itself use a template", template_name),
        });
    }

    let expand = |value: &Option<String>| -> Result<Option<String>> {
        value.as_deref().map(|v| expand_name(v, name)).transpose()
    };

    let depends = match &template.depends {
        Some(DependsOn::Csv(csv)) => Some(DependsOn::Csv(expand_name(csv, name)?)),
        Some(DependsOn::List(items)) => Some(DependsOn::List(
            items
                .iter()
                .map(|item| expand_name(item, name))
                .collect::<Result<_>>()?,
        )),
        None => None,
    };

    let defaults = DependencyEntry {
        require: expand(&template.require)?,
        get_version: expand(&template.get_version)?,
        pattern: expand(&template.pattern)?,
        suggestion_text: expand(&template.suggestion_text)?,
        suggestion: expand(&template.suggestion)?,
        depends,
        template: None,
    };

    Ok(DependencyEntry {
        require: entry.require.clone().or(defaults.require),
        get_version: entry.get_version.clone().or(defaults.get_version),
        pattern: entry.pattern.clone().or(defaults.pattern),
        suggestion_text: entry.suggestion_text.clone().or(defaults.suggestion_text),
        suggestion: entry.suggestion.clone().or(defaults.suggestion),
        depends: entry.depends.clone().or(defaults.depends),
        template: entry.template.clone(),
    })
}
