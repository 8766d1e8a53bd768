//! Port contracts for the board core.
//!
//! Ports define the infrastructure-agnostic interfaces through which the
//! presentation layer consumes the core.

pub mod observer;

pub use observer::BoardObserver;
