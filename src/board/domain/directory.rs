//! Immutable user and label reference data.
//!
//! Users and labels are supplied with the seed payload and never mutated by
//! the core; tasks reference users by identifier and hold labels by value.

use super::{LabelId, UserId};
use serde::{Deserialize, Serialize};

/// A person who can be assigned to tasks or author comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable user identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Avatar image reference (URL or asset key).
    pub avatar: String,
}

impl User {
    /// Creates a user record.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            avatar: avatar.into(),
        }
    }
}

/// A categorisation tag attached to tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Stable label identifier.
    pub id: LabelId,
    /// Display name, e.g. `Bug`.
    pub name: String,
    /// Display colour, e.g. `#EF4444`.
    pub color: String,
}

impl Label {
    /// Creates a label record.
    #[must_use]
    pub fn new(id: LabelId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
        }
    }
}
