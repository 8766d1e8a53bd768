//! Task aggregate and the draft/patch types that feed its mutations.

use super::{BoardDomainError, ColumnId, CommentId, Label, ParsePriorityError, TaskId, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Urgency of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Normal urgency.
    #[default]
    Medium,
    /// Needs attention first.
    High,
}

impl Priority {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

/// A single entry in a task's append-only comment sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    id: CommentId,
    content: String,
    author: UserId,
    created_at: DateTime<Utc>,
}

impl Comment {
    /// Creates a comment stamped with the current clock time.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyCommentContent`] when the content is
    /// empty after trimming.
    pub fn new(
        author: UserId,
        content: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, BoardDomainError> {
        let raw_content = content.into();
        if raw_content.trim().is_empty() {
            return Err(BoardDomainError::EmptyCommentContent);
        }
        Ok(Self {
            id: CommentId::new(),
            content: raw_content,
            author,
            created_at: clock.utc(),
        })
    }

    /// Returns the comment identifier.
    #[must_use]
    pub const fn id(&self) -> CommentId {
        self.id
    }

    /// Returns the comment text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the authoring user.
    #[must_use]
    pub const fn author(&self) -> &UserId {
        &self.author
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// A work item owned by exactly one column at any time.
///
/// # Invariants
///
/// - `id` never changes across moves or edits
/// - `column_id` always names the column whose task sequence contains this
///   task; only the store rewrites it, and only while moving the task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    assignee: Option<UserId>,
    due_date: Option<NaiveDate>,
    priority: Priority,
    labels: Vec<Label>,
    comments: Vec<Comment>,
    column_id: ColumnId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Builds a task from a draft, minting a fresh identifier and stamping
    /// creation time. Only the store creates tasks, which is how every task
    /// ends up in exactly one column.
    pub(crate) fn from_draft(draft: TaskDraft, column_id: ColumnId, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            title: draft.title,
            description: draft.description,
            assignee: draft.assignee,
            due_date: draft.due_date,
            priority: draft.priority,
            labels: draft.labels,
            comments: draft.comments,
            column_id,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the assigned user, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<&UserId> {
        self.assignee.as_ref()
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the attached labels.
    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Returns the comment sequence, oldest first.
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Returns the identifier of the owning column.
    #[must_use]
    pub const fn column_id(&self) -> &ColumnId {
        &self.column_id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Shallow-merges the patch's present fields. Identity and column
    /// ownership are untouchable here; [`TaskPatch`] cannot express them.
    pub(crate) fn apply_patch(&mut self, patch: TaskPatch, clock: &impl Clock) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        patch.assignee.apply(&mut self.assignee);
        patch.due_date.apply(&mut self.due_date);
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(labels) = patch.labels {
            self.labels = labels;
        }
        self.touch(clock);
    }

    /// Rewrites the owning column reference while the store moves the task
    /// between column sequences.
    pub(crate) fn reassign(&mut self, column_id: ColumnId, clock: &impl Clock) {
        self.column_id = column_id;
        self.touch(clock);
    }

    /// Appends a comment to the task's sequence.
    pub(crate) fn push_comment(&mut self, comment: Comment, clock: &impl Clock) {
        self.comments.push(comment);
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Input for creating a task: every task field except the identifier and
/// the owning column, which the store supplies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    assignee: Option<UserId>,
    #[serde(default)]
    due_date: Option<NaiveDate>,
    #[serde(default)]
    priority: Priority,
    #[serde(default)]
    labels: Vec<Label>,
    #[serde(default)]
    comments: Vec<Comment>,
}

impl TaskDraft {
    /// Creates a draft with the given title and default remaining fields.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`] when the title is empty
    /// after trimming.
    pub fn new(title: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw_title = title.into();
        if raw_title.trim().is_empty() {
            return Err(BoardDomainError::EmptyTaskTitle);
        }
        Ok(Self {
            title: raw_title,
            description: String::new(),
            assignee: None,
            due_date: None,
            priority: Priority::default(),
            labels: Vec::new(),
            comments: Vec::new(),
        })
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: UserId) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the attached labels.
    #[must_use]
    pub fn with_labels(mut self, labels: impl IntoIterator<Item = Label>) -> Self {
        self.labels = labels.into_iter().collect();
        self
    }

    /// Sets the initial comment sequence.
    #[must_use]
    pub fn with_comments(mut self, comments: impl IntoIterator<Item = Comment>) -> Self {
        self.comments = comments.into_iter().collect();
        self
    }
}

/// Three-way patch state for an optional task field: leave it alone, clear
/// it, or set a new value. Keeps "absent" distinct from
/// "present-but-empty".
#[derive(Debug, Clone, PartialEq, Eq)]
enum FieldPatch<T> {
    Keep,
    Clear,
    Set(T),
}

impl<T> FieldPatch<T> {
    fn apply(self, field: &mut Option<T>) {
        match self {
            Self::Keep => {}
            Self::Clear => *field = None,
            Self::Set(value) => *field = Some(value),
        }
    }
}

impl<T> Default for FieldPatch<T> {
    fn default() -> Self {
        Self::Keep
    }
}

/// Partial update for a task's mutable fields.
///
/// The patch deliberately has no way to express an identifier or column
/// change: callers that include one in the surrounding dialog payload get
/// it dropped before it reaches the store. Comments are append-only and
/// handled by the store's comment operation instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    title: Option<String>,
    description: Option<String>,
    assignee: FieldPatch<UserId>,
    due_date: FieldPatch<NaiveDate>,
    priority: Option<Priority>,
    labels: Option<Vec<Label>>,
}

impl TaskPatch {
    /// Creates an empty patch that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a new title.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`] when the title is empty
    /// after trimming.
    pub fn with_title(mut self, title: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw_title = title.into();
        if raw_title.trim().is_empty() {
            return Err(BoardDomainError::EmptyTaskTitle);
        }
        self.title = Some(raw_title);
        Ok(self)
    }

    /// Sets a new description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Assigns the task to a user.
    #[must_use]
    pub fn assign_to(mut self, assignee: UserId) -> Self {
        self.assignee = FieldPatch::Set(assignee);
        self
    }

    /// Clears the assignee.
    #[must_use]
    pub fn clear_assignee(mut self) -> Self {
        self.assignee = FieldPatch::Clear;
        self
    }

    /// Sets a new due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = FieldPatch::Set(due_date);
        self
    }

    /// Clears the due date.
    #[must_use]
    pub fn clear_due_date(mut self) -> Self {
        self.due_date = FieldPatch::Clear;
        self
    }

    /// Sets a new priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Replaces the attached label set.
    #[must_use]
    pub fn with_labels(mut self, labels: impl IntoIterator<Item = Label>) -> Self {
        self.labels = Some(labels.into_iter().collect());
        self
    }
}
