//! Error types for board domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain board values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The column identifier is blank or contains whitespace.
    #[error("invalid column identifier '{0}', expected a non-blank token")]
    InvalidColumnId(String),

    /// The user identifier is blank or contains whitespace.
    #[error("invalid user identifier '{0}', expected a non-blank token")]
    InvalidUserId(String),

    /// The label identifier is blank or contains whitespace.
    #[error("invalid label identifier '{0}', expected a non-blank token")]
    InvalidLabelId(String),

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// The comment content is empty after trimming.
    #[error("comment content must not be empty")]
    EmptyCommentContent,
}

/// Error returned while parsing priorities from their string form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);
