// src/graph/board.rs

use tracing::{debug, info};

use crate::errors::{PlanError, Result};
use crate::graph::dependency::{DependencyGraph, DependencyInfo};
use crate::plan::model::{Status, Task};

/// Per-status task counts, for headers and progress affordances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardSummary {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl BoardSummary {
    pub fn total(&self) -> usize {
        self.pending + self.in_progress + self.completed
    }
}

/// The layer that owns a project's task list together with its
/// [`DependencyGraph`].
///
/// Status changes (drops onto another column) go through [`Board::move_task`]
/// which keeps the list and the graph in step. Structural changes
/// ([`Board::add_task`], [`Board::remove_task`]) rebuild the graph wholesale
/// from the updated list; the graph is cheap to construct at board scale.
#[derive(Debug, Clone)]
pub struct Board {
    tasks: Vec<Task>,
    graph: DependencyGraph,
}

impl Board {
    pub fn new(tasks: Vec<Task>) -> Self {
        let graph = DependencyGraph::new(&tasks);
        Self { tasks, graph }
    }

    /// The dependency graph for the current task list.
    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// All tasks, in stored order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Whether the card for `title` is currently draggable.
    pub fn is_unlocked(&self, title: &str) -> bool {
        self.graph.is_unlocked(title)
    }

    /// Outstanding blockers for `title`, for tooltips.
    pub fn dependency_info(&self, title: &str) -> DependencyInfo {
        self.graph.dependency_info(title)
    }

    /// Tasks in the column for `status`, ordered by `position`.
    ///
    /// Unpositioned tasks sort after positioned ones, ties keep list order.
    pub fn column(&self, status: Status) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| t.status == status)
            .collect();
        tasks.sort_by_key(|t| t.position.map_or(u64::from(u32::MAX) + 1, u64::from));
        tasks
    }

    /// Move a task to another column, optionally at a specific position.
    ///
    /// Fails with [`PlanError::TaskNotFound`] for unknown titles and with
    /// [`PlanError::TaskLocked`] when the task's dependencies are not yet
    /// completed. On a positioned drop, tasks already in the target column
    /// at or below the drop position are shifted down by one.
    pub fn move_task(
        &mut self,
        title: &str,
        new_status: Status,
        new_position: Option<u32>,
    ) -> Result<()> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.title == title)
            .ok_or_else(|| PlanError::TaskNotFound(title.to_string()))?;

        if !self.graph.is_unlocked(title) {
            return Err(PlanError::TaskLocked(title.to_string()));
        }

        self.tasks[index].status = new_status;

        if let Some(position) = new_position {
            for task in &mut self.tasks {
                if task.title != title
                    && task.status == new_status
                    && task.position.is_some_and(|p| p >= position)
                {
                    task.position = task.position.map(|p| p + 1);
                }
            }
            self.tasks[index].position = Some(position);
        }

        self.graph.update_status(title, new_status);
        debug!(title = %title, status = %new_status, "task moved");
        Ok(())
    }

    /// Append a task and rebuild the graph from the new list.
    pub fn add_task(&mut self, task: Task) {
        info!(title = %task.title, "task added; rebuilding dependency graph");
        self.tasks.push(task);
        self.graph = DependencyGraph::new(&self.tasks);
    }

    /// Remove a task by title and rebuild the graph from the new list.
    ///
    /// Tasks that depended on it now hold a dangling reference and stay
    /// locked; that is the graph's defined behaviour, not an error.
    pub fn remove_task(&mut self, title: &str) -> Result<()> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.title == title)
            .ok_or_else(|| PlanError::TaskNotFound(title.to_string()))?;

        info!(title = %title, "task removed; rebuilding dependency graph");
        self.tasks.remove(index);
        self.graph = DependencyGraph::new(&self.tasks);
        Ok(())
    }

    /// Per-status counts over the current task list.
    pub fn summary(&self) -> BoardSummary {
        let mut summary = BoardSummary::default();
        for task in &self.tasks {
            match task.status {
                Status::Pending => summary.pending += 1,
                Status::InProgress => summary.in_progress += 1,
                Status::Completed => summary.completed += 1,
            }
        }
        summary
    }
}
