// src/graph/dependency.rs

use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::{debug, warn};

use crate::plan::model::{Status, Task};

/// Snapshot of a single task as tracked by the graph.
///
/// Only the fields the unlock logic needs are kept; the rest of the task
/// payload stays with whoever owns the task list.
#[derive(Debug, Clone)]
struct TaskNode {
    status: Status,
    /// Declared dependency titles in original order (for display).
    declared_deps: Vec<String>,
}

/// Answer to a dependency query for one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyInfo {
    pub is_unlocked: bool,
    /// Declared dependencies that are not yet satisfied, in declared order.
    /// Includes references to tasks absent from the collection.
    pub remaining_dependencies: Vec<String>,
}

/// In-memory dependency graph over a task collection, keyed by task title.
///
/// Owns a snapshot of each task's status and dependency list and maintains
/// the set of *unlocked* tasks: those whose direct dependencies are all
/// `completed` (or which have none). The predicate only ever inspects the
/// recorded status of direct dependencies, never traverses the graph, so
/// cyclic or dangling references cannot cause non-termination; they simply
/// leave the involved tasks locked.
///
/// The graph is a value object. It is built fresh from the current task
/// collection whenever that collection changes structurally; only status
/// changes are applied in place via [`DependencyGraph::update_status`].
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    nodes: HashMap<String, TaskNode>,
    /// Deduplicated dependency sets, keyed by task title.
    dependency_sets: HashMap<String, BTreeSet<String>>,
    /// Titles currently actionable. Grows monotonically for the life of
    /// this graph instance: a task never re-locks, even if a completed
    /// dependency is later reverted.
    unlocked: HashSet<String>,
}

impl DependencyGraph {
    /// Build a graph from a task collection.
    ///
    /// Titles are assumed unique (enforced by plan validation); if a title
    /// repeats, the last occurrence wins. The unlocked set is seeded by
    /// evaluating every task once against the input snapshot, so a task
    /// whose dependency is already `completed` starts unlocked.
    pub fn new(tasks: &[Task]) -> Self {
        let mut nodes: HashMap<String, TaskNode> = HashMap::new();
        let mut dependency_sets: HashMap<String, BTreeSet<String>> = HashMap::new();

        for task in tasks {
            if nodes.contains_key(&task.title) {
                warn!(title = %task.title, "duplicate task title; keeping the last occurrence");
            }
            nodes.insert(
                task.title.clone(),
                TaskNode {
                    status: task.status,
                    declared_deps: task.dependencies.clone(),
                },
            );
            dependency_sets.insert(
                task.title.clone(),
                task.dependencies.iter().cloned().collect(),
            );
        }

        let mut graph = Self {
            nodes,
            dependency_sets,
            unlocked: HashSet::new(),
        };

        for title in graph.nodes.keys().cloned().collect::<Vec<_>>() {
            if graph.can_be_unlocked(&title) {
                graph.unlocked.insert(title);
            }
        }

        debug!(
            tasks = graph.nodes.len(),
            unlocked = graph.unlocked.len(),
            "dependency graph built"
        );

        graph
    }

    /// Whether `title` is currently actionable.
    ///
    /// Unknown titles return `false`.
    pub fn is_unlocked(&self, title: &str) -> bool {
        self.unlocked.contains(title)
    }

    /// Unlock state plus the not-yet-satisfied dependencies for `title`.
    ///
    /// `remaining_dependencies` preserves the order of the task's declared
    /// dependency list and keeps references to absent tasks, so the caller
    /// can render "waiting for: ..." verbatim. Unknown titles yield a
    /// locked, empty answer rather than an error.
    pub fn dependency_info(&self, title: &str) -> DependencyInfo {
        let Some(node) = self.nodes.get(title) else {
            return DependencyInfo {
                is_unlocked: false,
                remaining_dependencies: Vec::new(),
            };
        };

        let remaining_dependencies = node
            .declared_deps
            .iter()
            .filter(|dep| !self.is_completed(dep))
            .cloned()
            .collect();

        DependencyInfo {
            is_unlocked: self.is_unlocked(title),
            remaining_dependencies,
        }
    }

    /// Iterate over all known task titles.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(|s| s.as_str())
    }

    /// Record a status change for `title`.
    ///
    /// Unknown titles are ignored (the graph is advisory; nothing
    /// destructive depends on it). When the new status is `completed`,
    /// every currently-locked task is re-evaluated, and the scan repeats
    /// until a full pass adds nothing, so multi-level chains that become
    /// satisfiable unlock in a single call. Tasks are only ever added to
    /// the unlocked set here, never removed.
    pub fn update_status(&mut self, title: &str, new_status: Status) {
        let Some(node) = self.nodes.get_mut(title) else {
            warn!(title = %title, "status update for unknown task; ignoring");
            return;
        };

        node.status = new_status;
        debug!(title = %title, status = %new_status, "task status recorded");

        if new_status == Status::Completed {
            self.unlock_ready_tasks();
        }
    }

    /// Re-evaluate locked tasks until a fixed point is reached.
    ///
    /// Decide first, then mutate, to avoid borrowing conflicts.
    fn unlock_ready_tasks(&mut self) {
        loop {
            let newly_unlocked: Vec<String> = self
                .nodes
                .keys()
                .filter(|title| !self.unlocked.contains(*title) && self.can_be_unlocked(title))
                .cloned()
                .collect();

            if newly_unlocked.is_empty() {
                break;
            }

            for title in newly_unlocked {
                debug!(title = %title, "dependencies satisfied; unlocking task");
                self.unlocked.insert(title);
            }
        }
    }

    /// True if the task has no dependencies, or every dependency resolves
    /// to a task whose recorded status is `completed`. A dependency on an
    /// absent title never holds.
    fn can_be_unlocked(&self, title: &str) -> bool {
        let Some(deps) = self.dependency_sets.get(title) else {
            return false;
        };
        deps.iter().all(|dep| self.is_completed(dep))
    }

    fn is_completed(&self, title: &str) -> bool {
        self.nodes
            .get(title)
            .is_some_and(|node| node.status == Status::Completed)
    }
}
