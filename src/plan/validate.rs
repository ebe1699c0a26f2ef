// src/plan/validate.rs

use std::collections::HashSet;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::warn;

use crate::errors::{PlanError, Result};
use crate::plan::model::Project;

/// Run semantic validation against a loaded project plan.
///
/// This checks:
/// - the plan contains at least one task
/// - no task has a blank title
/// - task titles are unique (they are the dependency keys)
/// - no task depends on itself
/// - resolvable dependency references form no cycle
///
/// Dangling dependency references (titles absent from the plan) are **not**
/// errors: the dependency graph treats them as permanently unsatisfied, and
/// that behaviour is surfaced to the user through `remaining_dependencies`.
/// They are logged here so a broken plan is at least visible at load time.
pub fn validate_project(project: &Project) -> Result<()> {
    ensure_has_tasks(project)?;
    validate_titles(project)?;
    validate_dependency_refs(project)?;
    validate_acyclic(project)?;
    Ok(())
}

fn ensure_has_tasks(project: &Project) -> Result<()> {
    if project.tasks.is_empty() {
        return Err(PlanError::Validation(
            "plan must contain at least one task".to_string(),
        ));
    }
    Ok(())
}

fn validate_titles(project: &Project) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();

    for task in &project.tasks {
        let title = task.title.trim();
        if title.is_empty() {
            return Err(PlanError::Validation(
                "plan contains a task with an empty title".to_string(),
            ));
        }
        if !seen.insert(task.title.as_str()) {
            return Err(PlanError::Validation(format!(
                "duplicate task title '{}' (titles are dependency keys and must be unique)",
                task.title
            )));
        }
    }
    Ok(())
}

fn validate_dependency_refs(project: &Project) -> Result<()> {
    let titles: HashSet<&str> = project.tasks.iter().map(|t| t.title.as_str()).collect();

    for task in &project.tasks {
        for dep in &task.dependencies {
            if dep == &task.title {
                return Err(PlanError::Validation(format!(
                    "task '{}' cannot depend on itself",
                    task.title
                )));
            }
            if !titles.contains(dep.as_str()) {
                warn!(
                    task = %task.title,
                    dependency = %dep,
                    "dependency references a task not present in the plan; it will never unlock through it"
                );
            }
        }
    }
    Ok(())
}

fn validate_acyclic(project: &Project) -> Result<()> {
    // Build a petgraph graph from the tasks and their dependencies.
    //
    // Edge direction: dep -> task. Dangling references are skipped; a
    // dependency that resolves to no task cannot participate in a cycle.
    let titles: HashSet<&str> = project.tasks.iter().map(|t| t.title.as_str()).collect();

    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for task in &project.tasks {
        graph.add_node(task.title.as_str());
    }

    for task in &project.tasks {
        for dep in &task.dependencies {
            if titles.contains(dep.as_str()) {
                graph.add_edge(dep.as_str(), task.title.as_str(), ());
            }
        }
    }

    // A topological sort fails iff there is a cycle.
    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => Err(PlanError::DependencyCycle(cycle.node_id().to_string())),
    }
}
