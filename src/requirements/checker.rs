//! Memoized evaluation of a single check.
//!
//! A [`CheckNode`] wraps a [`CheckSpec`] with a one-shot memo cell. The
//! first caller of [`CheckNode::evaluate`] moves the node from `Pending` to
//! `InProgress` and does the work; every other caller, concurrent or later,
//! waits for `Done` and receives the same [`Outcome`]. The version command
//! therefore runs at most once per node.

use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use super::check::CheckSpec;
use super::status::{CheckStatus, Outcome};
use crate::error::Result;
use crate::shell::CommandResult;
use crate::version::parse_version;

/// What a node needs from its surroundings while it is evaluated.
pub trait CheckContext: Sync {
    /// Evaluate the named check, or return `None` if no such check exists.
    fn resolve(&self, name: &str) -> Option<Arc<Outcome>>;

    /// Run a version command.
    fn run_command(&self, command: &str) -> Result<CommandResult>;

    /// Called once with the outcome of every check that was evaluated.
    fn check_finished(&self, _outcome: &Outcome) {}
}

#[derive(Debug)]
enum NodeState {
    Pending,
    InProgress,
    /// Settled without running and not yet reached by any evaluation.
    Presettled(Arc<Outcome>),
    Done(Arc<Outcome>),
}

enum Claim {
    Owner,
    Cached(Arc<Outcome>),
    FirstReached(Arc<Outcome>),
}

/// A configured check plus its memo cell.
#[derive(Debug)]
pub struct CheckNode {
    spec: Arc<CheckSpec>,
    state: Mutex<NodeState>,
    settled: Condvar,
}

impl CheckNode {
    pub fn new(spec: CheckSpec) -> Self {
        Self {
            spec: Arc::new(spec),
            state: Mutex::new(NodeState::Pending),
            settled: Condvar::new(),
        }
    }

    pub fn spec(&self) -> &Arc<CheckSpec> {
        &self.spec
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    /// The cached outcome, if evaluation has finished.
    pub fn outcome(&self) -> Option<Arc<Outcome>> {
        match &*self.lock() {
            NodeState::Presettled(outcome) | NodeState::Done(outcome) => {
                Some(Arc::clone(outcome))
            }
            _ => None,
        }
    }

    /// Evaluate this check once and return its (possibly cached) outcome.
    ///
    /// Dependencies are resolved through `ctx` before the version command
    /// runs; the first one that fails short-circuits the check. Blocks while
    /// another caller is evaluating the same node. A node settled without
    /// running is reported to `ctx` when an evaluation first reaches it.
    pub fn evaluate(&self, ctx: &dyn CheckContext) -> Arc<Outcome> {
        match self.claim() {
            Claim::Cached(outcome) => {
                debug!(check = %self.name(), "Using cached outcome");
                return outcome;
            }
            Claim::FirstReached(outcome) => {
                ctx.check_finished(&outcome);
                return outcome;
            }
            Claim::Owner => {}
        }

        let mut in_progress = InProgress {
            node: self,
            finished: false,
        };
        let status = self.run_check(ctx);
        let outcome = Arc::new(Outcome::new(Arc::clone(&self.spec), status));
        in_progress.finish(Arc::clone(&outcome));

        ctx.check_finished(&outcome);
        outcome
    }

    /// Settle a node that has not been claimed yet, without running it.
    ///
    /// Returns the stored outcome, or `None` if the node was already claimed.
    pub fn settle_without_running(&self, status: CheckStatus) -> Option<Arc<Outcome>> {
        let mut state = self.lock();
        if !matches!(*state, NodeState::Pending) {
            return None;
        }
        let outcome = Arc::new(Outcome::new(Arc::clone(&self.spec), status));
        *state = NodeState::Presettled(Arc::clone(&outcome));
        self.settled.notify_all();
        Some(outcome)
    }

    fn lock(&self) -> MutexGuard<'_, NodeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn claim(&self) -> Claim {
        let mut state = self.lock();
        loop {
            match &*state {
                NodeState::Done(outcome) => return Claim::Cached(Arc::clone(outcome)),
                NodeState::Presettled(outcome) => {
                    let outcome = Arc::clone(outcome);
                    *state = NodeState::Done(Arc::clone(&outcome));
                    return Claim::FirstReached(outcome);
                }
                NodeState::InProgress => {
                    state = self
                        .settled
                        .wait(state)
                        .unwrap_or_else(PoisonError::into_inner);
                }
                NodeState::Pending => {
                    *state = NodeState::InProgress;
                    return Claim::Owner;
                }
            }
        }
    }

    fn store(&self, outcome: Arc<Outcome>) {
        *self.lock() = NodeState::Done(outcome);
        self.settled.notify_all();
    }

    fn run_check(&self, ctx: &dyn CheckContext) -> CheckStatus {
        for dep in &self.spec.depends_on {
            let satisfied = ctx.resolve(dep).is_some_and(|o| o.succeeded());
            if !satisfied {
                debug!(check = %self.name(), dependency = %dep, "Dependency failed");
                return CheckStatus::FailedDependency { name: dep.clone() };
            }
        }

        debug!(check = %self.name(), command = %self.spec.version_command, "Running version command");
        let result = match ctx.run_command(&self.spec.version_command) {
            Ok(result) => result,
            Err(e) => {
                return CheckStatus::CommandFailed {
                    stderr: e.to_string(),
                }
            }
        };
        debug!(
            check = %self.name(),
            exit_code = ?result.exit_code,
            duration = ?result.duration,
            "Version command finished"
        );

        if !result.success {
            return CheckStatus::CommandFailed {
                stderr: result.stderr,
            };
        }

        let parsed = self
            .spec
            .version_text(&result.stdout)
            .and_then(|text| parse_version(text).map(|(version, _)| version));

        match parsed {
            Ok(version) if self.spec.requirement.is_satisfied_by(&version) => {
                CheckStatus::Satisfied { version }
            }
            Ok(version) => CheckStatus::Unsatisfied { version },
            Err(e) => CheckStatus::UnreadableVersion {
                message: e.to_string(),
            },
        }
    }
}

/// Marks a claimed node; settles it as aborted if evaluation unwinds.
struct InProgress<'a> {
    node: &'a CheckNode,
    finished: bool,
}

impl InProgress<'_> {
    fn finish(&mut self, outcome: Arc<Outcome>) {
        self.node.store(outcome);
        self.finished = true;
    }
}

impl Drop for InProgress<'_> {
    fn drop(&mut self) {
        if !self.finished {
            let status = CheckStatus::Aborted {
                message: format!("Evaluation of {} was interrupted", self.node.name()),
            };
            self.node
                .store(Arc::new(Outcome::new(Arc::clone(&self.node.spec), status)));
        }
    }
}
