//! The board state store: the owned aggregate and its mutation API.
//!
//! [`BoardStore`] holds the single authoritative [`Board`] behind a lock so
//! that, even when handles are cloned across threads, mutations serialise
//! and every observer sees a board that satisfies the partition invariant.
//! All mutations are all-or-nothing: an error or no-op path leaves the
//! board exactly as it was.

mod seed;

pub use seed::{BoardSeed, ColumnSeed, SeedError};

use crate::board::domain::{
    Board, BoardDomainError, ColumnId, Comment, Label, Task, TaskDraft, TaskId, TaskPatch, User,
    UserId,
};
use crate::board::ports::BoardObserver;
use log::{debug, trace, warn};
use mockable::Clock;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

/// Result type for board store operations.
pub type BoardStoreResult<T> = Result<T, BoardStoreError>;

/// Errors returned by board store operations.
///
/// Every error leaves the board unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardStoreError {
    /// The named column does not exist.
    #[error("column not found: {0}")]
    ColumnNotFound(ColumnId),

    /// The named task does not exist anywhere on the board.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The task exists but is not resident in the named column.
    #[error("task {task} is not resident in column {column}")]
    TaskNotInColumn {
        /// The task that was looked up.
        task: TaskId,
        /// The column it was expected in.
        column: ColumnId,
    },

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),

    /// The state lock was poisoned by a panicking writer.
    #[error("board state lock poisoned")]
    Poisoned,
}

/// The authoritative in-memory board, constructed once per session.
///
/// Handles are cheap to clone and share the same underlying state. The
/// injected [`Clock`] stamps task and comment timestamps, which keeps them
/// deterministic under test.
pub struct BoardStore<C>
where
    C: Clock + Send + Sync,
{
    state: Arc<RwLock<Board>>,
    observers: Arc<RwLock<Vec<Arc<dyn BoardObserver>>>>,
    clock: Arc<C>,
}

impl<C> Clone for BoardStore<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            observers: Arc::clone(&self.observers),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> BoardStore<C>
where
    C: Clock + Send + Sync,
{
    /// Builds a store from a seed payload.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] when the seed carries duplicate column, user,
    /// or label identifiers.
    pub fn new(seed: BoardSeed, clock: Arc<C>) -> Result<Self, SeedError> {
        let board = seed.into_board(&*clock)?;
        Ok(Self {
            state: Arc::new(RwLock::new(board)),
            observers: Arc::new(RwLock::new(Vec::new())),
            clock,
        })
    }

    /// Registers an observer notified after every state-changing mutation.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Poisoned`] when the observer registry
    /// lock is poisoned.
    pub fn subscribe(&self, observer: Arc<dyn BoardObserver>) -> BoardStoreResult<()> {
        let mut observers = self
            .observers
            .write()
            .map_err(|_| BoardStoreError::Poisoned)?;
        observers.push(observer);
        Ok(())
    }

    /// Returns a full snapshot of the current board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Poisoned`] when the state lock is
    /// poisoned.
    pub fn snapshot(&self) -> BoardStoreResult<Board> {
        Ok(self.read()?.clone())
    }

    /// Returns the task with the given identifier, wherever it resides.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Poisoned`] when the state lock is
    /// poisoned.
    pub fn find_task(&self, task_id: TaskId) -> BoardStoreResult<Option<Task>> {
        Ok(self.read()?.find_task(task_id).cloned())
    }

    /// Returns the identifier of the column currently owning the task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Poisoned`] when the state lock is
    /// poisoned.
    pub fn column_of(&self, task_id: TaskId) -> BoardStoreResult<Option<ColumnId>> {
        Ok(self.read()?.column_of(task_id).cloned())
    }

    /// Returns whether a column with the given identifier exists.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Poisoned`] when the state lock is
    /// poisoned.
    pub fn has_column(&self, column_id: &ColumnId) -> BoardStoreResult<bool> {
        Ok(self.read()?.column(column_id).is_some())
    }

    /// Returns the user reference data.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Poisoned`] when the state lock is
    /// poisoned.
    pub fn users(&self) -> BoardStoreResult<Vec<User>> {
        Ok(self.read()?.users().to_vec())
    }

    /// Returns the label reference data.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Poisoned`] when the state lock is
    /// poisoned.
    pub fn labels(&self) -> BoardStoreResult<Vec<Label>> {
        Ok(self.read()?.labels().to_vec())
    }

    /// Creates a task from the draft and inserts it at the head of the
    /// column's sequence (newest first). Returns the created task with its
    /// identifier and column reference populated.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::ColumnNotFound`] when the column does not
    /// exist, or [`BoardStoreError::Poisoned`] when the state lock is
    /// poisoned.
    pub fn add_task(&self, column_id: &ColumnId, draft: TaskDraft) -> BoardStoreResult<Task> {
        let (task, snapshot) = {
            let mut board = self.write()?;
            let Some(column) = board.column_mut(column_id) else {
                return Err(BoardStoreError::ColumnNotFound(column_id.clone()));
            };
            let task = Task::from_draft(draft, column_id.clone(), &*self.clock);
            column.insert_front(task.clone());
            (task, board.clone())
        };
        debug!("added task {} to column {column_id}", task.id());
        self.notify(&snapshot);
        Ok(task)
    }

    /// Shallow-merges the patch into the task, wherever it resides.
    ///
    /// Permissive by design: an unknown task identifier is a silent no-op
    /// returning `Ok(false)`, mirroring the tolerance the surrounding
    /// dialogs rely on. Returns `Ok(true)` when a task was updated.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Poisoned`] when the state lock is
    /// poisoned.
    pub fn update_task(&self, task_id: TaskId, patch: TaskPatch) -> BoardStoreResult<bool> {
        let snapshot = {
            let mut board = self.write()?;
            let Some(task) = board.find_task_mut(task_id) else {
                debug!("update for unknown task {task_id} ignored");
                return Ok(false);
            };
            task.apply_patch(patch, &*self.clock);
            board.clone()
        };
        debug!("updated task {task_id}");
        self.notify(&snapshot);
        Ok(true)
    }

    /// Removes the task from the named column. Labels and users are
    /// independent entities and are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::ColumnNotFound`] when the column does not
    /// exist, [`BoardStoreError::TaskNotInColumn`] when the task is not
    /// resident there, or [`BoardStoreError::Poisoned`] when the state lock
    /// is poisoned.
    pub fn delete_task(&self, task_id: TaskId, column_id: &ColumnId) -> BoardStoreResult<()> {
        let snapshot = {
            let mut board = self.write()?;
            let Some(column) = board.column_mut(column_id) else {
                return Err(BoardStoreError::ColumnNotFound(column_id.clone()));
            };
            if column.remove_task(task_id).is_none() {
                return Err(BoardStoreError::TaskNotInColumn {
                    task: task_id,
                    column: column_id.clone(),
                });
            }
            board.clone()
        };
        debug!("deleted task {task_id} from column {column_id}");
        self.notify(&snapshot);
        Ok(())
    }

    /// Moves the task from the source column to the end of the destination
    /// column, rewriting its column reference.
    ///
    /// Safe under event redundancy: a same-column move, an unknown source
    /// or destination column, or a task no longer resident in the source is
    /// a no-op returning `Ok(false)`. Drag events arrive in rapid,
    /// overlapping succession and stale calls must never crash or
    /// half-apply. Returns `Ok(true)` when the task actually moved.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Poisoned`] when the state lock is
    /// poisoned.
    pub fn move_task(
        &self,
        task_id: TaskId,
        from: &ColumnId,
        to: &ColumnId,
    ) -> BoardStoreResult<bool> {
        let snapshot = {
            let mut board = self.write()?;
            if !board.transfer(task_id, from, to, &*self.clock) {
                trace!("move of task {task_id} from {from} to {to} ignored");
                return Ok(false);
            }
            board.clone()
        };
        debug!("moved task {task_id} from column {from} to column {to}");
        self.notify(&snapshot);
        Ok(true)
    }

    /// Appends a comment to the task's sequence. Comments are append-only
    /// and outside [`update_task`](Self::update_task)'s scope.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyCommentContent`] (via
    /// [`BoardStoreError::Domain`]) for blank content,
    /// [`BoardStoreError::TaskNotFound`] for an unknown task, or
    /// [`BoardStoreError::Poisoned`] when the state lock is poisoned.
    pub fn add_comment(
        &self,
        task_id: TaskId,
        author: UserId,
        content: impl Into<String>,
    ) -> BoardStoreResult<Comment> {
        let comment = Comment::new(author, content, &*self.clock)?;
        let snapshot = {
            let mut board = self.write()?;
            let Some(task) = board.find_task_mut(task_id) else {
                return Err(BoardStoreError::TaskNotFound(task_id));
            };
            task.push_comment(comment.clone(), &*self.clock);
            board.clone()
        };
        debug!("added comment {} to task {task_id}", comment.id());
        self.notify(&snapshot);
        Ok(comment)
    }

    fn read(&self) -> BoardStoreResult<RwLockReadGuard<'_, Board>> {
        self.state.read().map_err(|_| BoardStoreError::Poisoned)
    }

    fn write(&self) -> BoardStoreResult<RwLockWriteGuard<'_, Board>> {
        self.state.write().map_err(|_| BoardStoreError::Poisoned)
    }

    /// Notifies observers with the snapshot, outside the state lock.
    fn notify(&self, board: &Board) {
        let observers: Vec<Arc<dyn BoardObserver>> = match self.observers.read() {
            Ok(guard) => guard.clone(),
            Err(_) => {
                warn!("observer registry lock poisoned; skipping notification");
                return;
            }
        };
        for observer in &observers {
            observer.board_changed(board);
        }
    }
}
