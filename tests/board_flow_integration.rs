//! Behavioural integration tests for the board core.
//!
//! These tests exercise the store, observer port, and drag coordinator
//! together in realistic session flows: seeding a board, driving a drag
//! gesture the way a pointer-interaction library would, and running the
//! dialog-driven add/edit/comment/delete cycle.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use eyre::{ensure, OptionExt, Result};
use mockable::DefaultClock;
use std::sync::Arc;
use trestle::board::domain::{ColumnId, Priority, TaskDraft, TaskPatch, UserId};
use trestle::board::ports::BoardObserver;
use trestle::board::services::{DragCoordinator, DropTarget};
use trestle::board::store::{BoardSeed, BoardStore, ColumnSeed};

mockall::mock! {
    Observer {}

    impl BoardObserver for Observer {
        fn board_changed(&self, board: &trestle::board::domain::Board);
    }
}

fn column(raw: &str) -> ColumnId {
    ColumnId::new(raw).expect("valid column id")
}

fn user(raw: &str) -> UserId {
    UserId::new(raw).expect("valid user id")
}

/// Two-stage board with a single seeded task, per the reference drag
/// scenario: `todo = [task_a]`, `done = []`.
fn two_stage_store() -> Result<BoardStore<DefaultClock>> {
    let seed = BoardSeed::new().with_columns(vec![
        ColumnSeed::new(column("todo"), "To Do")
            .with_tasks(vec![TaskDraft::new("Task A").expect("valid draft")]),
        ColumnSeed::new(column("done"), "Done"),
    ]);
    Ok(BoardStore::new(seed, Arc::new(DefaultClock))?)
}

// ============================================================================
// Drag gesture flows
// ============================================================================

#[test]
fn drag_gesture_reassigns_task_and_survives_drag_end() -> Result<()> {
    let store = two_stage_store()?;
    let board = store.snapshot()?;
    let task_a = board
        .column(&column("todo"))
        .ok_or_eyre("todo column seeded")?
        .tasks()
        .first()
        .ok_or_eyre("task seeded")?
        .id();

    let mut coordinator = DragCoordinator::new(store.clone());
    coordinator.drag_started(task_a)?;
    coordinator.drag_moved(task_a, Some(DropTarget::Column(column("done"))))?;
    coordinator.drag_ended();

    let after = store.snapshot()?;
    let todo = after
        .column(&column("todo"))
        .ok_or_eyre("todo column present")?;
    let done = after
        .column(&column("done"))
        .ok_or_eyre("done column present")?;
    ensure!(todo.tasks().is_empty(), "todo must be emptied by the move");
    ensure!(done.contains(task_a), "done must contain the dragged task");
    let moved = done.task(task_a).ok_or_eyre("task resident in done")?;
    ensure!(
        moved.column_id() == &column("done"),
        "column reference must follow the move"
    );
    Ok(())
}

#[test]
fn interleaved_gestures_keep_the_partition_invariant() -> Result<()> {
    let store = two_stage_store()?;
    let extra = store.add_task(&column("todo"), TaskDraft::new("Task B").expect("valid draft"))?;
    let task_a = store
        .snapshot()?
        .column(&column("todo"))
        .ok_or_eyre("todo column present")?
        .tasks()
        .last()
        .ok_or_eyre("seeded task present")?
        .id();

    let mut coordinator = DragCoordinator::new(store.clone());

    // First gesture moves task A; the stray trailing over-event after
    // drag-end must be inert.
    coordinator.drag_started(task_a)?;
    coordinator.drag_moved(task_a, Some(DropTarget::Column(column("done"))))?;
    coordinator.drag_ended();
    coordinator.drag_moved(task_a, Some(DropTarget::Column(column("todo"))))?;

    // Second gesture drops task B onto task A's row in `done`.
    coordinator.drag_started(extra.id())?;
    coordinator.drag_moved(extra.id(), Some(DropTarget::Task(task_a)))?;
    coordinator.drag_ended();

    let after = store.snapshot()?;
    let done = after
        .column(&column("done"))
        .ok_or_eyre("done column present")?;
    ensure!(done.contains(task_a), "task A stays where it was dropped");
    ensure!(
        done.tasks().last().ok_or_eyre("done not empty")?.id() == extra.id(),
        "task B lands at the end of done"
    );

    let mut seen = std::collections::HashSet::new();
    for col in after.columns() {
        for task in col.tasks() {
            ensure!(task.column_id() == col.id(), "column reference matches owner");
            ensure!(seen.insert(task.id()), "task owned by exactly one column");
        }
    }
    Ok(())
}

// ============================================================================
// Dialog-driven mutation flow with observer verification
// ============================================================================

#[test]
fn dialog_flow_notifies_observer_per_committed_mutation() -> Result<()> {
    let store = two_stage_store()?;

    let mut observer = MockObserver::new();
    // add + update + comment + delete, each committed exactly once.
    observer
        .expect_board_changed()
        .times(4)
        .returning(|_| ());
    store.subscribe(Arc::new(observer))?;

    let draft = TaskDraft::new("Integrate payment gateway")
        .expect("valid draft")
        .with_description("Stripe subscription support")
        .with_priority(Priority::High)
        .with_assignee(user("alice"));
    let task = store.add_task(&column("todo"), draft)?;

    let patch = TaskPatch::new().with_priority(Priority::Medium).clear_assignee();
    ensure!(store.update_task(task.id(), patch)?, "task exists, so the update lands");

    let comment = store.add_comment(task.id(), user("alice"), "Deprioritised for now")?;
    let stored = store
        .find_task(task.id())?
        .ok_or_eyre("task still on the board")?;
    ensure!(stored.priority() == Priority::Medium, "priority patched");
    ensure!(stored.assignee().is_none(), "assignee cleared");
    ensure!(
        stored.comments().last().map(|entry| entry.id()) == Some(comment.id()),
        "comment appended"
    );

    store.delete_task(task.id(), &column("todo"))?;
    ensure!(store.find_task(task.id())?.is_none(), "task fully removed");
    Ok(())
}
