//! Task aggregate root and its content mutations.

use super::{TaskDomainError, TaskId, TaskPriority, TaskStatus};
use crate::directory::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated, trimmed task title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated task title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the value is empty after
    /// trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let trimmed = value.into().trim().to_owned();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        Ok(Self(trimmed))
    }

    /// Returns the title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parameter object for creating a fresh task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskData {
    /// Validated title.
    pub title: TaskTitle,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Initial priority.
    pub priority: TaskPriority,
    /// User creating the task.
    pub created_by: UserId,
    /// User the task is assigned to.
    pub assigned_to: UserId,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted optional description.
    pub description: Option<String>,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Persisted completion timestamp, if the task ever entered `Done`.
    pub completed_at: Option<DateTime<Utc>>,
    /// Persisted creator reference.
    pub created_by: UserId,
    /// Persisted assignee reference.
    pub assigned_to: UserId,
}

/// Task aggregate root.
///
/// The creator and creation timestamp are immutable after construction;
/// the assignee changes only through [`Task::reassign`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: Option<String>,
    status: TaskStatus,
    priority: TaskPriority,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    created_by: UserId,
    assigned_to: UserId,
}

impl Task {
    /// Creates a new task.
    ///
    /// The status is always [`TaskStatus::New`] regardless of caller input;
    /// there is no way to create a task in any other status.
    #[must_use]
    pub fn new(data: NewTaskData, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            title: data.title,
            description: data.description,
            status: TaskStatus::New,
            priority: data.priority,
            created_at: timestamp,
            updated_at: timestamp,
            completed_at: None,
            created_by: data.created_by,
            assigned_to: data.assigned_to,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            priority: data.priority,
            created_at: data.created_at,
            updated_at: data.updated_at,
            completed_at: data.completed_at,
            created_by: data.created_by,
            assigned_to: data.assigned_to,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
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

    /// Returns the completion timestamp, if the task ever entered `Done`.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the creator reference.
    #[must_use]
    pub const fn created_by(&self) -> UserId {
        self.created_by
    }

    /// Returns the current assignee reference.
    #[must_use]
    pub const fn assigned_to(&self) -> UserId {
        self.assigned_to
    }

    /// Replaces the title and description.
    pub fn edit_content(
        &mut self,
        title: TaskTitle,
        description: Option<String>,
        clock: &impl Clock,
    ) {
        self.title = title;
        self.description = description;
        self.touch(clock);
    }

    /// Moves the task to the given status.
    ///
    /// Entering [`TaskStatus::Done`] stamps the completion timestamp; the
    /// stamp is refreshed on every re-entry. Leaving `Done` keeps the last
    /// completion timestamp in place.
    pub fn change_status(&mut self, status: TaskStatus, clock: &impl Clock) {
        let timestamp = clock.utc();
        self.status = status;
        self.updated_at = timestamp;
        if status == TaskStatus::Done {
            self.completed_at = Some(timestamp);
        }
    }

    /// Changes the priority.
    pub fn change_priority(&mut self, priority: TaskPriority, clock: &impl Clock) {
        self.priority = priority;
        self.touch(clock);
    }

    /// Hands the task to a new assignee, overwriting the previous one.
    pub fn reassign(&mut self, assignee: UserId, clock: &impl Clock) {
        self.assigned_to = assignee;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
