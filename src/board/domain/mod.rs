//! Domain model for the task board.
//!
//! The board domain models columns with ordered task sequences, the tasks
//! themselves with their metadata and comments, and the immutable user and
//! label reference data shared across tasks. All infrastructure concerns
//! stay outside the domain boundary; mutation entry points that could break
//! the one-column-per-task partition are crate-private so the store remains
//! the only sanctioned mutation path.

mod board;
mod column;
mod directory;
mod error;
mod ids;
mod task;

pub use board::Board;
pub use column::Column;
pub use directory::{Label, User};
pub use error::{BoardDomainError, ParsePriorityError};
pub use ids::{ColumnId, CommentId, LabelId, TaskId, UserId};
pub use task::{Comment, Priority, Task, TaskDraft, TaskPatch};
