//! Services reconciling interaction events against the board store.

pub mod drag;

pub use drag::{DragCoordinator, DropTarget};
