#![allow(dead_code)]

use planboard::plan::model::{
    Duration, DurationUnit, Priority, Project, ProjectStatus, Status, Task,
};

/// Builder for [`Task`] to simplify test setup.
pub struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            task: Task {
                title: title.to_string(),
                description: String::new(),
                duration: None,
                assigned_to: None,
                dependencies: vec![],
                priority: Priority::default(),
                status: Status::default(),
                category: None,
                complexity: None,
                position: None,
                subtasks: vec![],
            },
        }
    }

    pub fn depends_on(mut self, dep: &str) -> Self {
        self.task.dependencies.push(dep.to_string());
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.task.status = status;
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.task.priority = priority;
        self
    }

    pub fn position(mut self, position: u32) -> Self {
        self.task.position = Some(position);
        self
    }

    pub fn duration(mut self, value: u32, unit: DurationUnit) -> Self {
        self.task.duration = Some(Duration { value, unit });
        self
    }

    pub fn assigned_to(mut self, name: &str) -> Self {
        self.task.assigned_to = Some(name.to_string());
        self
    }

    pub fn build(self) -> Task {
        self.task
    }
}

/// Builder for [`Project`].
pub struct ProjectBuilder {
    project: Project,
}

impl ProjectBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            project: Project {
                title: title.to_string(),
                description: String::new(),
                tasks: vec![],
                deadline_days: 7,
                status: ProjectStatus::default(),
            },
        }
    }

    pub fn with_task(mut self, task: Task) -> Self {
        self.project.tasks.push(task);
        self
    }

    pub fn build(self) -> Project {
        self.project
    }
}
