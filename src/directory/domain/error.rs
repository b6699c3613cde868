//! Error types for directory domain validation.

use thiserror::Error;

/// Errors returned while constructing directory domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryDomainError {
    /// The user's full name is empty after trimming.
    #[error("user full name must not be empty")]
    EmptyFullName,

    /// The email address is structurally invalid.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// The department name is empty after trimming.
    #[error("department name must not be empty")]
    EmptyDepartmentName,
}
