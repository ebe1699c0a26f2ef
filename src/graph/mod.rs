// src/graph/mod.rs

//! Dependency tracking and board state.
//!
//! - [`dependency`] holds the title-keyed dependency graph that decides
//!   which tasks are unlocked.
//! - [`board`] owns a task list plus its graph and applies drag-and-drop
//!   style moves to both.

pub mod board;
pub mod dependency;

pub use board::{Board, BoardSummary};
pub use dependency::{DependencyGraph, DependencyInfo};
