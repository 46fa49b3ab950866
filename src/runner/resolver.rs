//! Concurrent, memoized evaluation of the check graph.
//!
//! The [`Resolver`] owns the table of [`CheckNode`]s and is the
//! [`CheckContext`] every node evaluates against: a node asks the resolver
//! for its dependencies by name, which evaluates them through the same
//! table. Fan-in on a shared dependency therefore converges on one
//! execution.
//!
//! Checks on a dependency cycle are settled as failures when the resolver
//! is built, before any thread can wait on them. What remains is acyclic,
//! so a thread only ever waits on checks strictly downstream of the one it
//! is evaluating.

use std::sync::Arc;
use std::thread;

use indexmap::IndexMap;
use tracing::debug;

use super::dependency::DependencyGraph;
use crate::error::{CheckDepsError, Result};
use crate::requirements::{
    CheckContext, CheckNode, CheckSpec, CheckStatus, Outcome, VersionCommand,
};
use crate::shell::CommandResult;
use crate::ui::Reporter;

/// Drives evaluation of a set of named checks.
pub struct Resolver<'a> {
    nodes: IndexMap<String, CheckNode>,
    command: &'a dyn VersionCommand,
    reporter: &'a dyn Reporter,
}

impl<'a> Resolver<'a> {
    /// Build the node table and settle every check that lies on a cycle.
    pub fn new(
        checks: impl IntoIterator<Item = CheckSpec>,
        command: &'a dyn VersionCommand,
        reporter: &'a dyn Reporter,
    ) -> Self {
        let nodes: IndexMap<String, CheckNode> = checks
            .into_iter()
            .map(|spec| (spec.name.clone(), CheckNode::new(spec)))
            .collect();

        let graph = nodes
            .values()
            .fold(DependencyGraph::builder(), |builder, node| {
                builder.add_check(node.name(), node.spec().depends_on.clone())
            })
            .build();

        for (name, cycle) in graph.cyclic_checks() {
            debug!(check = %name, cycle = %cycle.join(" -> "), "Circular dependency");
            if let Some(node) = nodes.get(&name) {
                node.settle_without_running(CheckStatus::CircularDependency { cycle });
            }
        }

        Self {
            nodes,
            command,
            reporter,
        }
    }

    /// Names of all configured checks, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Evaluate one check (and, first, its dependencies) on this thread.
    ///
    /// Returns `None` if no check has this name.
    pub fn evaluate(&self, name: &str) -> Option<Arc<Outcome>> {
        self.nodes.get(name).map(|node| node.evaluate(self))
    }

    /// Evaluate every requested check concurrently, one thread per name.
    ///
    /// Outcomes are returned in request order. Unknown names are rejected
    /// before anything runs.
    pub fn run<S: AsRef<str>>(&self, requested: &[S]) -> Result<Vec<Arc<Outcome>>> {
        let nodes = requested
            .iter()
            .map(|name| {
                self.nodes
                    .get(name.as_ref())
                    .ok_or_else(|| CheckDepsError::UnknownDependency {
                        name: name.as_ref().to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(count = nodes.len(), "Evaluating checks");
        let outcomes = thread::scope(|scope| {
            let handles: Vec<_> = nodes
                .iter()
                .map(|node| (node, scope.spawn(move || node.evaluate(self))))
                .collect();

            handles
                .into_iter()
                .map(|(node, handle)| {
                    handle
                        .join()
                        .ok()
                        .or_else(|| node.outcome())
                        .unwrap_or_else(|| {
                            Arc::new(Outcome::new(
                                Arc::clone(node.spec()),
                                CheckStatus::Aborted {
                                    message: format!("Evaluation of {} panicked", node.name()),
                                },
                            ))
                        })
                })
                .collect()
        });

        Ok(outcomes)
    }

    /// Evaluate every configured check.
    pub fn run_all(&self) -> Vec<Arc<Outcome>> {
        let names: Vec<&str> = self.names().collect();
        // Every name comes from the table itself.
        self.run(&names).unwrap_or_default()
    }
}

impl CheckContext for Resolver<'_> {
    fn resolve(&self, name: &str) -> Option<Arc<Outcome>> {
        self.evaluate(name)
    }

    fn run_command(&self, command: &str) -> Result<CommandResult> {
        self.command.run(command)
    }

    fn check_finished(&self, outcome: &Outcome) {
        self.reporter.check_finished(outcome);
    }
}
