//! Trestle: interactive task board core.
//!
//! This crate provides the authoritative state model for a column-based task
//! board: the entities (columns, tasks, users, labels), the sanctioned
//! mutation operations over them, and the reconciliation logic that turns a
//! continuous stream of pointer-drag events into discrete, consistent column
//! reassignments.
//!
//! # Architecture
//!
//! Trestle follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board entities with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces consumed by the presentation layer
//! - **Store**: The single owned source of truth plus its mutation API
//! - **Services**: Drag-gesture reconciliation over the store
//!
//! Rendering, dialog handling, and pointer capture are external
//! collaborators: they call into the [`board`] module's interface and
//! re-render from the snapshots it publishes.

pub mod board;
