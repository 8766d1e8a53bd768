//! Observer port for board change notification.

use crate::board::domain::Board;

/// Receives a fresh board snapshot after every mutation that changed state.
///
/// The store invokes observers synchronously, outside its state lock, in
/// registration order. Mutations that turn out to be no-ops (stale drag
/// events, updates to unknown tasks) do not notify. Implementations are the
/// presentation layer's re-render triggers and must not call back into the
/// store's mutation API from within the notification.
pub trait BoardObserver: Send + Sync {
    /// Called with the board state resulting from a completed mutation.
    fn board_changed(&self, board: &Board);
}
