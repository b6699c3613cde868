//! Department grouping for users.

use super::{DepartmentId, DirectoryDomainError};
use serde::{Deserialize, Serialize};

/// Organizational unit users belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    id: DepartmentId,
    name: String,
    description: Option<String>,
    is_active: bool,
}

/// Parameter object for reconstructing a persisted department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedDepartmentData {
    /// Persisted department identifier.
    pub id: DepartmentId,
    /// Persisted department name.
    pub name: String,
    /// Persisted optional description.
    pub description: Option<String>,
    /// Persisted active flag.
    pub is_active: bool,
}

impl Department {
    /// Creates a new active department with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::EmptyDepartmentName`] when the name is
    /// empty after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, DirectoryDomainError> {
        let normalized = name.into().trim().to_owned();
        if normalized.is_empty() {
            return Err(DirectoryDomainError::EmptyDepartmentName);
        }

        Ok(Self {
            id: DepartmentId::new(),
            name: normalized,
            description: None,
            is_active: true,
        })
    }

    /// Sets the department description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the department inactive.
    #[must_use]
    pub const fn deactivated(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Reconstructs a department from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedDepartmentData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            is_active: data.is_active,
        }
    }

    /// Returns the department identifier.
    #[must_use]
    pub const fn id(&self) -> DepartmentId {
        self.id
    }

    /// Returns the department name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns whether the department is active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }
}
