//! Seed payload supplied at store construction.
//!
//! The seed fixes the column set for the session and provides the user and
//! label reference data. Tasks are described as drafts; the store mints
//! their identifiers and column references itself, so seeded state
//! satisfies the one-column-per-task partition by construction. The
//! specific demo content is not part of the contract and ships only with
//! tests.

use crate::board::domain::{
    Board, Column, ColumnId, Label, LabelId, Task, TaskDraft, User, UserId,
};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Errors returned while validating or parsing a seed payload.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Two columns share an identifier.
    #[error("duplicate column identifier in seed: {0}")]
    DuplicateColumn(ColumnId),

    /// Two users share an identifier.
    #[error("duplicate user identifier in seed: {0}")]
    DuplicateUser(UserId),

    /// Two labels share an identifier.
    #[error("duplicate label identifier in seed: {0}")]
    DuplicateLabel(LabelId),

    /// The JSON payload could not be parsed.
    #[error("invalid seed payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// One column in the seed payload: identity, title, and initial tasks
/// listed top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSeed {
    id: ColumnId,
    title: String,
    #[serde(default)]
    tasks: Vec<TaskDraft>,
}

impl ColumnSeed {
    /// Creates a column seed with no initial tasks.
    #[must_use]
    pub fn new(id: ColumnId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            tasks: Vec::new(),
        }
    }

    /// Sets the initial tasks, top to bottom.
    #[must_use]
    pub fn with_tasks(mut self, tasks: impl IntoIterator<Item = TaskDraft>) -> Self {
        self.tasks = tasks.into_iter().collect();
        self
    }
}

/// Configuration payload for constructing a board store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSeed {
    #[serde(default)]
    users: Vec<User>,
    #[serde(default)]
    labels: Vec<Label>,
    #[serde(default)]
    columns: Vec<ColumnSeed>,
}

impl BoardSeed {
    /// Creates an empty seed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the user reference data.
    #[must_use]
    pub fn with_users(mut self, users: impl IntoIterator<Item = User>) -> Self {
        self.users = users.into_iter().collect();
        self
    }

    /// Sets the label reference data.
    #[must_use]
    pub fn with_labels(mut self, labels: impl IntoIterator<Item = Label>) -> Self {
        self.labels = labels.into_iter().collect();
        self
    }

    /// Sets the column seeds, left to right.
    #[must_use]
    pub fn with_columns(mut self, columns: impl IntoIterator<Item = ColumnSeed>) -> Self {
        self.columns = columns.into_iter().collect();
        self
    }

    /// Parses a seed from a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Payload`] when the payload is not valid JSON for
    /// the seed shape.
    pub fn from_json(payload: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Validates the seed and builds the initial board, minting task
    /// identifiers and column references.
    pub(crate) fn into_board(self, clock: &impl Clock) -> Result<Board, SeedError> {
        let mut column_ids = HashSet::new();
        for column in &self.columns {
            if !column_ids.insert(column.id.clone()) {
                return Err(SeedError::DuplicateColumn(column.id.clone()));
            }
        }
        let mut user_ids = HashSet::new();
        for user in &self.users {
            if !user_ids.insert(user.id.clone()) {
                return Err(SeedError::DuplicateUser(user.id.clone()));
            }
        }
        let mut label_ids = HashSet::new();
        for label in &self.labels {
            if !label_ids.insert(label.id.clone()) {
                return Err(SeedError::DuplicateLabel(label.id.clone()));
            }
        }

        let columns = self
            .columns
            .into_iter()
            .map(|seed| {
                let mut column = Column::new(seed.id.clone(), seed.title);
                for draft in seed.tasks {
                    column.push_back(Task::from_draft(draft, seed.id.clone(), clock));
                }
                column
            })
            .collect();

        Ok(Board::new(columns, self.users, self.labels))
    }
}
