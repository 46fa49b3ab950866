//! Dependency graph between checks, used to find cycles before evaluation.

use std::collections::{HashMap, HashSet, VecDeque};

use indexmap::IndexMap;

/// Represents the `depends` relationships between checks.
///
/// Edges to names that are not in the graph are kept out of it; such
/// dependencies fail when the dependent check is evaluated.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    /// Map of check name to its direct dependencies, in declaration order.
    dependencies: IndexMap<String, Vec<String>>,
}

impl DependencyGraph {
    /// Create a new dependency graph builder.
    pub fn builder() -> DependencyGraphBuilder {
        DependencyGraphBuilder::new()
    }

    /// Find the shortest cycle leading from `start` back to itself.
    ///
    /// The returned path begins and ends with `start`, e.g. `[a, b, a]`.
    pub fn cycle_through(&self, start: &str) -> Option<Vec<String>> {
        let deps = self.dependencies.get(start)?;

        let mut parent: HashMap<&str, &str> = HashMap::new();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();

        for dep in deps {
            if dep == start {
                return Some(vec![start.to_string(), start.to_string()]);
            }
            if seen.insert(dep) {
                parent.insert(dep, start);
                queue.push_back(dep);
            }
        }

        while let Some(current) = queue.pop_front() {
            let Some(next) = self.dependencies.get(current) else {
                continue;
            };
            for dep in next {
                if dep == start {
                    // Walk parents back to `start` to rebuild the path
                    let mut path = vec![start.to_string(), current.to_string()];
                    let mut node = current;
                    while let Some(&p) = parent.get(node) {
                        path.push(p.to_string());
                        node = p;
                    }
                    path.reverse();
                    return Some(path);
                }
                if seen.insert(dep) {
                    parent.insert(dep, current);
                    queue.push_back(dep);
                }
            }
        }

        None
    }

    /// Every check that lies on a cycle, in declaration order, with one
    /// cycle through it.
    pub fn cyclic_checks(&self) -> IndexMap<String, Vec<String>> {
        self.dependencies
            .keys()
            .filter_map(|name| self.cycle_through(name).map(|cycle| (name.clone(), cycle)))
            .collect()
    }
}

/// Builder for constructing a DependencyGraph.
#[derive(Debug, Default)]
pub struct DependencyGraphBuilder {
    dependencies: IndexMap<String, Vec<String>>,
}

impl DependencyGraphBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a check with its dependencies.
    pub fn add_check(mut self, name: impl Into<String>, depends_on: Vec<String>) -> Self {
        self.dependencies
            .entry(name.into())
            .or_default()
            .extend(depends_on);
        self
    }

    /// Build the dependency graph, dropping edges to unknown checks.
    pub fn build(self) -> DependencyGraph {
        let known: HashSet<String> = self.dependencies.keys().cloned().collect();

        let dependencies = self
            .dependencies
            .into_iter()
            .map(|(name, deps)| {
                let mut kept: Vec<String> = Vec::with_capacity(deps.len());
                for dep in deps {
                    if known.contains(&dep) && !kept.contains(&dep) {
                        kept.push(dep);
                    }
                }
                (name, kept)
            })
            .collect();

        DependencyGraph { dependencies }
    }
}
