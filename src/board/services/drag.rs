//! Drag-gesture reconciliation over the board store.
//!
//! The drag-interaction library (an external collaborator) emits three
//! semantic events per gesture: start, over, end. The coordinator turns the
//! over-event stream into column reassignments the moment the pointer
//! crosses a column boundary, giving the presentation layer live feedback.
//! Every intermediate move is final; drag-end merely closes the gesture and
//! rolls nothing back.

use crate::board::domain::{ColumnId, TaskId};
use crate::board::store::{BoardStore, BoardStoreResult};
use log::{debug, trace};
use mockable::Clock;

/// The droppable region currently under the pointer.
///
/// A drop target is either an empty column area or another task's row; both
/// resolve to a destination column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// The pointer is over a column's own drop region.
    Column(ColumnId),
    /// The pointer is over another task's row.
    Task(TaskId),
}

/// Gesture state, one per coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gesture {
    /// No drag in progress.
    Idle,
    /// A drag is in progress for the retained task.
    Dragging(TaskId),
}

/// Translates drag events into `move_task` calls on the store.
///
/// The coordinator retains only the dragged task's identifier for the
/// duration of a gesture. It resolves the task's current column from live
/// state on every over-event, because earlier events in the same gesture
/// may already have moved it. Events referencing unknown tasks or columns
/// are silently ignored; drag libraries emit transient identifiers during
/// mount and unmount races.
pub struct DragCoordinator<C>
where
    C: Clock + Send + Sync,
{
    store: BoardStore<C>,
    gesture: Gesture,
}

impl<C> DragCoordinator<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an idle coordinator over a store handle.
    #[must_use]
    pub const fn new(store: BoardStore<C>) -> Self {
        Self {
            store,
            gesture: Gesture::Idle,
        }
    }

    /// Returns the task retained by the active gesture, if any.
    #[must_use]
    pub const fn dragged_task(&self) -> Option<TaskId> {
        match self.gesture {
            Gesture::Idle => None,
            Gesture::Dragging(task_id) => Some(task_id),
        }
    }

    /// Handles a drag-start event carrying the dragged item's identifier.
    ///
    /// Enters the dragging state only when the identifier names a task that
    /// exists in live board state.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Poisoned`] when the store's state lock is
    /// poisoned; no other error can escape.
    ///
    /// [`BoardStoreError::Poisoned`]: crate::board::store::BoardStoreError::Poisoned
    pub fn drag_started(&mut self, dragged: TaskId) -> BoardStoreResult<()> {
        if self.store.column_of(dragged)?.is_some() {
            self.gesture = Gesture::Dragging(dragged);
        } else {
            trace!("drag start for unknown task {dragged} ignored");
        }
        Ok(())
    }

    /// Handles a drag-over event, firing at pointer-move granularity.
    ///
    /// Issues a move when, and only when, the live source column and the
    /// resolved destination column both exist and differ. Everything else
    /// — an idle coordinator, a stale dragged identifier, a pointer outside
    /// any droppable region, an unknown target, a same-column target — is
    /// ignored without touching state.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Poisoned`] when the store's state lock is
    /// poisoned; no other error can escape.
    ///
    /// [`BoardStoreError::Poisoned`]: crate::board::store::BoardStoreError::Poisoned
    pub fn drag_moved(
        &mut self,
        dragged: TaskId,
        over: Option<DropTarget>,
    ) -> BoardStoreResult<()> {
        let Gesture::Dragging(active) = self.gesture else {
            trace!("drag over without active gesture ignored");
            return Ok(());
        };
        if active != dragged {
            trace!("drag over for stale task {dragged} ignored, gesture holds {active}");
            return Ok(());
        }
        let Some(target) = over else {
            return Ok(());
        };

        let Some(source) = self.store.column_of(dragged)? else {
            return Ok(());
        };
        let Some(destination) = self.resolve_destination(&target)? else {
            return Ok(());
        };
        if source == destination {
            return Ok(());
        }

        if self.store.move_task(dragged, &source, &destination)? {
            debug!("drag reassigned task {dragged} from {source} to {destination}");
        }
        Ok(())
    }

    /// Handles a drag-end event, successful or cancelled.
    ///
    /// Column changes committed during the gesture stay committed; the
    /// distinction between drop and cancel does not affect board state.
    pub fn drag_ended(&mut self) {
        self.gesture = Gesture::Idle;
    }

    /// Resolves a drop target to its owning column in live state.
    fn resolve_destination(&self, target: &DropTarget) -> BoardStoreResult<Option<ColumnId>> {
        match target {
            DropTarget::Column(column_id) => Ok(self
                .store
                .has_column(column_id)?
                .then(|| column_id.clone())),
            DropTarget::Task(task_id) => self.store.column_of(*task_id),
        }
    }
}
