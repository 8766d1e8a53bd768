//! The board aggregate: ordered columns plus user and label reference data.

use super::{Column, ColumnId, Label, Task, TaskId, User};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Root of the board state tree.
///
/// The store owns the live instance; cloned snapshots of it are what the
/// presentation layer renders from. For every reachable board, each task
/// identifier appears in exactly one column's sequence and that task's
/// stored column reference names the containing column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    columns: Vec<Column>,
    users: Vec<User>,
    labels: Vec<Label>,
}

impl Board {
    /// Assembles a board from seeded parts.
    pub(crate) const fn new(columns: Vec<Column>, users: Vec<User>, labels: Vec<Label>) -> Self {
        Self {
            columns,
            users,
            labels,
        }
    }

    /// Returns the ordered column sequence.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the user reference data.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Returns the label reference data.
    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Returns the column with the given identifier.
    #[must_use]
    pub fn column(&self, column_id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| column.id() == column_id)
    }

    /// Returns the task with the given identifier, wherever it resides.
    #[must_use]
    pub fn find_task(&self, task_id: TaskId) -> Option<&Task> {
        self.columns.iter().find_map(|column| column.task(task_id))
    }

    /// Returns the identifier of the column whose sequence contains the
    /// task.
    #[must_use]
    pub fn column_of(&self, task_id: TaskId) -> Option<&ColumnId> {
        self.columns
            .iter()
            .find(|column| column.contains(task_id))
            .map(Column::id)
    }

    /// Mutable column lookup for the store's mutation paths.
    pub(crate) fn column_mut(&mut self, column_id: &ColumnId) -> Option<&mut Column> {
        self.columns
            .iter_mut()
            .find(|column| column.id() == column_id)
    }

    /// Mutable task lookup for the store's patch and comment paths.
    pub(crate) fn find_task_mut(&mut self, task_id: TaskId) -> Option<&mut Task> {
        self.columns
            .iter_mut()
            .find_map(|column| column.task_mut(task_id))
    }

    /// Moves a task between columns, rewriting its column reference and
    /// appending it to the destination sequence.
    ///
    /// Returns `false` without touching any column when the source equals
    /// the destination, when either column is unknown, or when the task is
    /// not resident in the source. Stale or redundant drag events land here
    /// and must never leave a half-moved board behind.
    pub(crate) fn transfer(
        &mut self,
        task_id: TaskId,
        from: &ColumnId,
        to: &ColumnId,
        clock: &impl Clock,
    ) -> bool {
        if from == to || self.column(to).is_none() {
            return false;
        }
        let Some(resident) = self.column(from).and_then(|column| column.task(task_id)) else {
            return false;
        };

        let mut moved = resident.clone();
        moved.reassign(to.clone(), clock);
        for column in &mut self.columns {
            if column.id() == from {
                column.remove_task(task_id);
            } else if column.id() == to {
                column.push_back(moved.clone());
            }
        }
        true
    }
}
