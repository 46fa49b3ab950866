//! Check orchestration.

pub mod dependency;
pub mod resolver;
pub mod summary;

pub use dependency::{DependencyGraph, DependencyGraphBuilder};
pub use resolver::Resolver;
pub use summary::{Failure, RunSummary};
