//! Workflow column holding an ordered task sequence.

use super::{ColumnId, Task, TaskId};
use serde::{Deserialize, Serialize};

/// A workflow stage with its ordered tasks, top to bottom.
///
/// Columns are created with the seed payload and never created or destroyed
/// afterwards; only their task contents change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    id: ColumnId,
    title: String,
    tasks: Vec<Task>,
}

impl Column {
    /// Creates an empty column.
    pub(crate) fn new(id: ColumnId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            tasks: Vec::new(),
        }
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> &ColumnId {
        &self.id
    }

    /// Returns the column title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the ordered task sequence.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the task with the given identifier, if resident here.
    #[must_use]
    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == task_id)
    }

    /// Returns whether the task is resident in this column.
    #[must_use]
    pub fn contains(&self, task_id: TaskId) -> bool {
        self.task(task_id).is_some()
    }

    /// Mutable lookup for the store's patch path.
    pub(crate) fn task_mut(&mut self, task_id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == task_id)
    }

    /// Inserts a task at the head of the sequence (newest-first policy for
    /// freshly created tasks).
    pub(crate) fn insert_front(&mut self, task: Task) {
        self.tasks.insert(0, task);
    }

    /// Appends a task at the end of the sequence (landing position for
    /// tasks moved in from another column).
    pub(crate) fn push_back(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Removes and returns the task with the given identifier.
    pub(crate) fn remove_task(&mut self, task_id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id() == task_id)?;
        Some(self.tasks.remove(index))
    }
}
