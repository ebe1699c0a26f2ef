// src/plan/model.rs

use serde::{Deserialize, Serialize};

/// Lifecycle state of a task, matching the three Kanban columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Pending,
    InProgress,
    Completed,
}

impl Default for Status {
    fn default() -> Self {
        Status::Pending
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Pending => write!(f, "pending"),
            Status::InProgress => write!(f, "in_progress"),
            Status::Completed => write!(f, "completed"),
        }
    }
}

/// Task priority as produced by the upstream planner.
///
/// Ordered so that `Low < Medium < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
            Priority::Critical => write!(f, "critical"),
        }
    }
}

/// Unit for task duration estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Minutes,
    Hours,
    Days,
    Weeks,
}

/// A duration estimate, e.g. `{ "value": 3, "unit": "days" }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Duration {
    pub value: u32,
    pub unit: DurationUnit,
}

/// Optional breakdown of a task into smaller steps.
///
/// Opaque to the dependency engine; carried through for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subtask {
    pub description: String,
    #[serde(default)]
    pub duration: Option<Duration>,
}

/// A single task from a generated project plan.
///
/// `title` doubles as the task's identifier: dependency lists reference
/// other tasks by title, and the graph keys everything by it. Only `title`
/// is required when deserializing; plans come from an upstream generative
/// call and every other field is treated as optional, partial data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique (within a project) title; also the dependency reference key.
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub duration: Option<Duration>,

    /// Display name of the assignee, if the planner suggested one.
    #[serde(default)]
    pub assigned_to: Option<String>,

    /// Titles of tasks that must be `completed` before this one is
    /// actionable. Order is preserved for display; duplicates tolerated.
    #[serde(default)]
    pub dependencies: Vec<String>,

    #[serde(default)]
    pub priority: Priority,

    #[serde(default)]
    pub status: Status,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub complexity: Option<String>,

    /// Ordering within a Kanban column; `None` sorts after positioned tasks.
    #[serde(default)]
    pub position: Option<u32>,

    #[serde(default)]
    pub subtasks: Vec<Subtask>,
}

/// Overall project state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Completed,
    Archived,
}

impl Default for ProjectStatus {
    fn default() -> Self {
        ProjectStatus::Active
    }
}

/// A project plan: a titled collection of tasks plus a deadline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub tasks: Vec<Task>,

    #[serde(default = "default_deadline_days")]
    pub deadline_days: u32,

    #[serde(default)]
    pub status: ProjectStatus,
}

fn default_deadline_days() -> u32 {
    7
}
