//! Version model and constraint parsing.
//!
//! - [`model`] - [`Version`], [`Relation`] and [`VersionConstraint`]
//! - [`parser`] - Parsers for versions, comparison operators and constraints
//!
//! # Example
//!
//! ```
//! use check_deps::version::{parse_constraint, parse_version};
//!
//! let (constraint, _) = parse_constraint(">=3.8").unwrap();
//! let (found, _) = parse_version("3.9.1").unwrap();
//! assert!(constraint.is_satisfied_by(&found));
//! ```

pub mod model;
pub mod parser;

pub use model::{Relation, Version, VersionConstraint};
pub use parser::{parse_constraint, parse_relation, parse_version, ParseError};
