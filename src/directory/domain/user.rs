//! User identity consumed by the task engine.

use super::{DepartmentId, DirectoryDomainError, UserId};
use crate::access::Role;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated, normalized email address.
///
/// The input is trimmed and lowercased; exactly one `@` with non-empty
/// local and domain parts is required.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::InvalidEmail`] when the value is
    /// empty, lacks an `@`, has more than one `@`, or has an empty local or
    /// domain part.
    pub fn new(value: impl Into<String>) -> Result<Self, DirectoryDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_lowercase();

        let mut segments = normalized.split('@');
        let local = segments.next().unwrap_or_default();
        let domain = segments.next().unwrap_or_default();
        let has_more_segments = segments.next().is_some();
        let is_valid = !local.is_empty()
            && !domain.is_empty()
            && !has_more_segments
            && !normalized.chars().any(char::is_whitespace);

        if !is_valid {
            return Err(DirectoryDomainError::InvalidEmail(raw));
        }

        Ok(Self(normalized))
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// User identity with role and department membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    full_name: String,
    email: EmailAddress,
    department_id: DepartmentId,
    role: Role,
}

/// Parameter object for reconstructing a persisted user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedUserData {
    /// Persisted user identifier.
    pub id: UserId,
    /// Persisted full name.
    pub full_name: String,
    /// Persisted email address.
    pub email: EmailAddress,
    /// Persisted department membership.
    pub department_id: DepartmentId,
    /// Persisted privilege tier.
    pub role: Role,
}

impl User {
    /// Creates a new user with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::EmptyFullName`] when the full name is
    /// empty after trimming.
    pub fn new(
        full_name: impl Into<String>,
        email: EmailAddress,
        department_id: DepartmentId,
        role: Role,
    ) -> Result<Self, DirectoryDomainError> {
        let normalized = full_name.into().trim().to_owned();
        if normalized.is_empty() {
            return Err(DirectoryDomainError::EmptyFullName);
        }

        Ok(Self {
            id: UserId::new(),
            full_name: normalized,
            email,
            department_id,
            role,
        })
    }

    /// Reconstructs a user from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedUserData) -> Self {
        Self {
            id: data.id,
            full_name: data.full_name,
            email: data.email,
            department_id: data.department_id,
            role: data.role,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the user's full name.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Returns the user's email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the department the user belongs to.
    #[must_use]
    pub const fn department_id(&self) -> DepartmentId {
        self.department_id
    }

    /// Returns the user's privilege tier.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }
}
