use planboard::graph::{DependencyGraph, DependencyInfo};
use planboard::plan::model::Status;
use planboard_test_utils::builders::TaskBuilder;
use planboard_test_utils::init_tracing;

#[test]
fn task_without_dependencies_is_unlocked_at_construction() {
    init_tracing();

    let tasks = vec![TaskBuilder::new("A").build()];
    let graph = DependencyGraph::new(&tasks);

    assert!(graph.is_unlocked("A"));
}

#[test]
fn task_unlocks_when_its_direct_dependency_completes() {
    init_tracing();

    let tasks = vec![
        TaskBuilder::new("A").build(),
        TaskBuilder::new("B").depends_on("A").build(),
    ];
    let mut graph = DependencyGraph::new(&tasks);

    assert!(graph.is_unlocked("A"));
    assert!(!graph.is_unlocked("B"));

    graph.update_status("A", Status::Completed);
    assert!(graph.is_unlocked("B"));
}

#[test]
fn unlocking_is_monotonic_even_if_a_dependency_is_reverted() {
    init_tracing();

    let tasks = vec![
        TaskBuilder::new("A").build(),
        TaskBuilder::new("B").depends_on("A").build(),
    ];
    let mut graph = DependencyGraph::new(&tasks);

    graph.update_status("A", Status::Completed);
    assert!(graph.is_unlocked("B"));

    // Reverting A does not re-lock B; the graph only tracks forward
    // progress for the life of one instance.
    graph.update_status("A", Status::Pending);
    assert!(graph.is_unlocked("B"));
    assert!(graph.is_unlocked("A"));
}

#[test]
fn dangling_dependency_keeps_a_task_permanently_locked() {
    init_tracing();

    let tasks = vec![TaskBuilder::new("C").depends_on("ghost").build()];
    let mut graph = DependencyGraph::new(&tasks);

    assert!(!graph.is_unlocked("C"));
    assert_eq!(
        graph.dependency_info("C").remaining_dependencies,
        vec!["ghost".to_string()]
    );

    // No status change anywhere can satisfy the missing reference.
    graph.update_status("C", Status::Completed);
    assert!(!graph.is_unlocked("C"));
}

#[test]
fn unknown_titles_get_safe_defaults() {
    init_tracing();

    let tasks = vec![
        TaskBuilder::new("A").build(),
        TaskBuilder::new("B").depends_on("A").build(),
    ];
    let mut graph = DependencyGraph::new(&tasks);

    assert!(!graph.is_unlocked("nonexistent"));
    assert_eq!(
        graph.dependency_info("nonexistent"),
        DependencyInfo {
            is_unlocked: false,
            remaining_dependencies: vec![],
        }
    );

    // Updating an unknown title is a no-op and leaves everything else alone.
    graph.update_status("nonexistent", Status::Completed);
    assert!(graph.is_unlocked("A"));
    assert!(!graph.is_unlocked("B"));
}

#[test]
fn completing_a_chain_level_by_level_unlocks_each_dependent() {
    init_tracing();

    let tasks = vec![
        TaskBuilder::new("A").build(),
        TaskBuilder::new("B").depends_on("A").build(),
        TaskBuilder::new("C").depends_on("B").build(),
    ];
    let mut graph = DependencyGraph::new(&tasks);

    // Completing A unlocks B. C stays locked: unlocking is gated on its
    // dependency *completing*, and B is merely unlocked, not completed.
    graph.update_status("A", Status::Completed);
    assert!(graph.is_unlocked("B"));
    assert!(!graph.is_unlocked("C"));

    graph.update_status("B", Status::Completed);
    assert!(graph.is_unlocked("C"));
}

#[test]
fn one_completion_rescans_every_locked_task() {
    init_tracing();

    // D waits on two tasks, one of which is already done. A single
    // completion must be enough to unlock it.
    let tasks = vec![
        TaskBuilder::new("A").build(),
        TaskBuilder::new("B").status(Status::Completed).build(),
        TaskBuilder::new("D").depends_on("A").depends_on("B").build(),
        TaskBuilder::new("E").depends_on("B").build(),
    ];
    let mut graph = DependencyGraph::new(&tasks);

    // E's only dependency was already completed at construction time.
    assert!(graph.is_unlocked("E"));
    assert!(!graph.is_unlocked("D"));

    // One call re-scans every locked task, not just direct dependents.
    graph.update_status("A", Status::Completed);
    assert!(graph.is_unlocked("D"));
}

#[test]
fn duplicate_dependency_entries_are_treated_as_a_set() {
    init_tracing();

    let tasks = vec![
        TaskBuilder::new("A").build(),
        TaskBuilder::new("B")
            .depends_on("A")
            .depends_on("A")
            .build(),
    ];
    let mut graph = DependencyGraph::new(&tasks);

    assert!(!graph.is_unlocked("B"));
    graph.update_status("A", Status::Completed);
    assert!(graph.is_unlocked("B"));
}

#[test]
fn cyclic_dependencies_terminate_and_stay_locked() {
    init_tracing();

    let tasks = vec![
        TaskBuilder::new("A").depends_on("B").build(),
        TaskBuilder::new("B").depends_on("A").build(),
    ];
    let mut graph = DependencyGraph::new(&tasks);

    assert!(!graph.is_unlocked("A"));
    assert!(!graph.is_unlocked("B"));

    // Completing one member by fiat unlocks the other without looping.
    graph.update_status("A", Status::Completed);
    assert!(graph.is_unlocked("B"));
}

#[test]
fn remaining_dependencies_preserve_declared_order() {
    init_tracing();

    let tasks = vec![
        TaskBuilder::new("A").status(Status::Completed).build(),
        TaskBuilder::new("B").build(),
        TaskBuilder::new("C").build(),
        TaskBuilder::new("D")
            .depends_on("C")
            .depends_on("A")
            .depends_on("B")
            .build(),
    ];
    let graph = DependencyGraph::new(&tasks);

    // A is completed and filtered out; C and B stay in declared order.
    assert_eq!(
        graph.dependency_info("D").remaining_dependencies,
        vec!["C".to_string(), "B".to_string()]
    );
}

#[test]
fn design_build_test_scenario() {
    init_tracing();

    let tasks = vec![
        TaskBuilder::new("Design").status(Status::Completed).build(),
        TaskBuilder::new("Build").depends_on("Design").build(),
        TaskBuilder::new("Test").depends_on("Build").build(),
    ];
    let graph = DependencyGraph::new(&tasks);

    assert!(graph.is_unlocked("Design"));
    // Build's dependency was already completed when the graph was built.
    assert!(graph.is_unlocked("Build"));
    assert!(!graph.is_unlocked("Test"));
    assert_eq!(
        graph.dependency_info("Test").remaining_dependencies,
        vec!["Build".to_string()]
    );
}
