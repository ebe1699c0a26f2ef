// src/lib.rs

pub mod cli;
pub mod errors;
pub mod graph;
pub mod logging;
pub mod plan;

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use crate::cli::CliArgs;
use crate::graph::Board;
use crate::plan::loader::load_and_validate;
use crate::plan::model::Status;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - plan loading + validation
/// - dependency graph / board construction
/// - the unlock report on stdout
pub fn run(args: CliArgs) -> Result<()> {
    let plan_path = PathBuf::from(&args.plan);
    let project = load_and_validate(&plan_path)?;

    info!(
        plan = %plan_path.display(),
        tasks = project.tasks.len(),
        "plan loaded and validated"
    );

    if args.validate_only {
        println!("plan '{}' is valid ({} tasks)", project.title, project.tasks.len());
        return Ok(());
    }

    let board = Board::new(project.tasks);
    print_report(&project.title, &board, args.blocked);
    Ok(())
}

/// Plain-text board report: per-column task listing with lock state.
fn print_report(project_title: &str, board: &Board, blocked_only: bool) {
    let summary = board.summary();
    println!("planboard report for '{project_title}'");
    println!(
        "  {} tasks: {} pending, {} in progress, {} completed",
        summary.total(),
        summary.pending,
        summary.in_progress,
        summary.completed
    );
    println!();

    for status in [Status::Pending, Status::InProgress, Status::Completed] {
        let column = board.column(status);
        if column.is_empty() {
            continue;
        }
        println!("{status} ({}):", column.len());
        for task in column {
            let info = board.dependency_info(&task.title);
            if blocked_only && info.is_unlocked {
                continue;
            }
            let marker = if info.is_unlocked { " " } else { "*" };
            println!("  {marker} {} [{}]", task.title, task.priority);
            if !info.remaining_dependencies.is_empty() {
                println!("      waiting for: {}", info.remaining_dependencies.join(", "));
            }
        }
        println!();
    }

    if blocked_only {
        println!("(* = locked by unfinished dependencies; only locked tasks shown)");
    } else {
        println!("(* = locked by unfinished dependencies)");
    }
}
