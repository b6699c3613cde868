//! Error types for task domain validation and parsing.

use crate::directory::domain::UserId;
use thiserror::Error;

/// Errors returned while constructing or validating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The requested page number is below one.
    #[error("invalid page {0}, pages start at 1")]
    InvalidPage(u32),

    /// The requested page size is zero.
    #[error("invalid page size {0}, at least one row per page is required")]
    InvalidPageSize(u32),

    /// The requested assignee does not resolve to a known user.
    #[error("assignee user not found: {0}")]
    UnknownAssignee(UserId),
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);
