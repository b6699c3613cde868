//! Role, action, and relation types plus the policy decision function.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Privilege tier of a user.
///
/// The set is closed: permissions are fixed per role by [`evaluate`] rather
/// than looked up from editable permission rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full control over tasks, including creation and deletion.
    Manager,
    /// May work on tasks currently assigned to them.
    Employee,
    /// Read-only access.
    Viewer,
}

impl Role {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Manager => "manager",
            Self::Employee => "employee",
            Self::Viewer => "viewer",
        }
    }

    /// Returns the human-readable role name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Manager => "Manager",
            Self::Employee => "Employee",
            Self::Viewer => "Viewer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "manager" => Ok(Self::Manager),
            "employee" => Ok(Self::Employee),
            "viewer" => Ok(Self::Viewer),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

/// Error returned while parsing roles from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

/// Action governed by the access policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskAction {
    /// Create a new task.
    Create,
    /// Edit a task's title or description.
    EditContent,
    /// Move a task to another status.
    ChangeStatus,
    /// Raise or lower a task's priority.
    ChangePriority,
    /// Assign or reassign a task to a user.
    Assign,
    /// Permanently delete a task.
    Delete,
    /// List or read tasks.
    Read,
}

impl TaskAction {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::EditContent => "edit_content",
            Self::ChangeStatus => "change_status",
            Self::ChangePriority => "change_priority",
            Self::Assign => "assign",
            Self::Delete => "delete",
            Self::Read => "read",
        }
    }
}

impl fmt::Display for TaskAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relationship of the acting user to the target task.
///
/// Target-less actions (`Create`, `Read`) are evaluated with
/// [`TaskRelation::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskRelation {
    /// The actor is the task's current assignee.
    Assignee,
    /// The actor has no governing relationship to the task.
    Other,
}

/// Outcome of a policy evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The action may proceed.
    Allow,
    /// The action is refused.
    Deny,
}

/// Refusal signal carrying the refused role and action.
///
/// Distinct from any not-found error: a denied action never masquerades as
/// a missing task.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("role '{role}' is not permitted to {action}")]
pub struct AccessDenied {
    /// Role of the refused actor.
    pub role: Role,
    /// Action that was refused.
    pub action: TaskAction,
}

/// Evaluates the policy table for one (role, action, relation) triple.
///
/// Managers may perform every action on any task. Every role may read.
/// Employees may edit content and change status only on tasks currently
/// assigned to them. Everything else is denied.
#[must_use]
pub const fn evaluate(role: Role, action: TaskAction, relation: TaskRelation) -> AccessDecision {
    match (role, action) {
        (Role::Manager, _) | (_, TaskAction::Read) => AccessDecision::Allow,
        (Role::Employee, TaskAction::EditContent | TaskAction::ChangeStatus) => match relation {
            TaskRelation::Assignee => AccessDecision::Allow,
            TaskRelation::Other => AccessDecision::Deny,
        },
        _ => AccessDecision::Deny,
    }
}

/// Evaluates the policy table and converts a denial into [`AccessDenied`].
///
/// # Errors
///
/// Returns [`AccessDenied`] when [`evaluate`] denies the triple.
pub const fn authorize(
    role: Role,
    action: TaskAction,
    relation: TaskRelation,
) -> Result<(), AccessDenied> {
    match evaluate(role, action, relation) {
        AccessDecision::Allow => Ok(()),
        AccessDecision::Deny => Err(AccessDenied { role, action }),
    }
}
