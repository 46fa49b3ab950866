//! Parsers for version strings and constraints.
//!
//! Each parser consumes a prefix of its input and returns the parsed value
//! together with the unconsumed remainder.
//!
//! # Grammar
//!
//! ```text
//! constraint := relation version
//! relation   := "<=" | ">=" | "<" | ">" | "==" | "!="
//! version    := digits ("." digits)* ["."] extra?
//! ```
//!
//! Everything after the last numeric component becomes the version's
//! `extra` suffix, so `3.8-beta.2` parses as `(3, 8)` with suffix `-beta.2`.

use thiserror::Error;

use super::model::{Relation, Version, VersionConstraint};

/// A version string or comparison operator could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Parse a version from the start of `input`.
///
/// Returns the version and the text that was not consumed as a numeric
/// component (which is also the version's suffix, if non-empty).
///
/// # Errors
///
/// Fails when `input` does not start with a digit, or a component does not
/// fit in a `u64`.
pub fn parse_version(input: &str) -> Result<(Version, &str), ParseError> {
    let mut rest = input;
    let mut number = Vec::new();

    loop {
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            break;
        }
        let component = &rest[..digits];
        let n = component.parse::<u64>().map_err(|_| {
            ParseError::new(format!("Version component out of range: {}", component))
        })?;
        number.push(n);
        rest = &rest[digits..];

        match rest.strip_prefix('.') {
            Some(after_dot) => rest = after_dot,
            None => break,
        }
    }

    let extra = (!rest.is_empty()).then(|| rest.to_string());
    let version = Version::new(number, extra).ok_or_else(|| {
        ParseError::new(format!("A version needs a numeric component, got: {}", input))
    })?;

    Ok((version, rest))
}

/// Parse a comparison operator from the start of `input`.
///
/// Two-character symbols are tried before their one-character prefixes.
pub fn parse_relation(input: &str) -> Result<(Relation, &str), ParseError> {
    Relation::ALL
        .iter()
        .find_map(|relation| {
            input
                .strip_prefix(relation.symbol())
                .map(|rest| (*relation, rest))
        })
        .ok_or_else(|| ParseError::new(format!("Not a comparison operator: {}", input)))
}

/// Parse a constraint such as `>=3.8` from the start of `input`.
///
/// Whitespace between the operator and the version is allowed.
pub fn parse_constraint(input: &str) -> Result<(VersionConstraint, &str), ParseError> {
    let (relation, rest) = parse_relation(input.trim_start())?;
    let (version, rest) = parse_version(rest.trim_start())?;
    Ok((VersionConstraint::new(version, relation), rest))
}
