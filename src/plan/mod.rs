// src/plan/mod.rs

//! Project plan loading and validation.
//!
//! Responsibilities:
//! - Define the JSON-backed data model for AI-generated plans (`model.rs`).
//! - Load a plan file from disk (`loader.rs`).
//! - Validate basic invariants like title uniqueness and acyclicity
//!   (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, load_from_str};
pub use model::{
    Duration, DurationUnit, Priority, Project, ProjectStatus, Status, Subtask, Task,
};
pub use validate::validate_project;
