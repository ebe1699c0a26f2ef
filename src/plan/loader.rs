// src/plan/loader.rs

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::errors::Result;
use crate::plan::model::Project;
use crate::plan::validate::validate_project;

/// Load a project plan from a JSON file and return the raw [`Project`].
///
/// This only performs deserialization; it does **not** perform semantic
/// validation (duplicate titles, cycles, etc.). Use [`load_and_validate`]
/// for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Project> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading plan file at {:?}", path))?;
    load_from_str(&contents)
}

/// Deserialize a project plan from a JSON string.
pub fn load_from_str(contents: &str) -> Result<Project> {
    let project: Project = serde_json::from_str(contents)?;
    Ok(project)
}

/// Load a project plan from a path and run semantic validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads JSON (defaults applied by `serde` + `Default` impls).
/// - Checks for empty plans, blank/duplicate titles, self-dependencies
///   and dependency cycles.
/// - Logs (but accepts) dangling dependency references.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<Project> {
    let project = load_from_path(&path)?;
    validate_project(&project)?;
    Ok(project)
}
