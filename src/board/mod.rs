//! Board state management and drag reconciliation for Trestle.
//!
//! This module is the single source of truth for which column owns each
//! task and in what order tasks sit within a column. It exposes the four
//! sanctioned mutation operations (add, update, delete, move), a snapshot
//! and subscription surface for re-rendering, and the drag-gesture
//! coordinator that translates pointer events into column reassignments.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - The owned state store in [`store`]
//! - Reconciliation services in [`services`]
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use mockable::DefaultClock;
//! use trestle::board::domain::{ColumnId, TaskDraft};
//! use trestle::board::store::{BoardSeed, BoardStore, ColumnSeed};
//!
//! let todo = ColumnId::new("todo").expect("valid column id");
//! let done = ColumnId::new("done").expect("valid column id");
//! let seed = BoardSeed::new().with_columns(vec![
//!     ColumnSeed::new(todo.clone(), "To Do"),
//!     ColumnSeed::new(done.clone(), "Done"),
//! ]);
//!
//! let store = BoardStore::new(seed, Arc::new(DefaultClock)).expect("valid seed");
//! let draft = TaskDraft::new("Ship the release notes").expect("valid draft");
//! let task = store.add_task(&todo, draft).expect("column exists");
//!
//! assert!(store.move_task(task.id(), &todo, &done).expect("store available"));
//! assert_eq!(
//!     store.column_of(task.id()).expect("store available"),
//!     Some(done),
//! );
//! ```

pub mod domain;
pub mod ports;
pub mod services;
pub mod store;

#[cfg(test)]
mod tests;
