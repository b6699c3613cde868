//! Read-side service for user and department queries.

use crate::directory::{
    domain::{Department, DepartmentId, User, UserId},
    ports::{DirectoryRepository, DirectoryRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for directory queries.
#[derive(Debug, Error)]
pub enum DirectoryServiceError {
    /// The requested user does not exist.
    #[error("user not found: {0}")]
    UserNotFound(UserId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] DirectoryRepositoryError),
}

/// Result type for directory service operations.
pub type DirectoryServiceResult<T> = Result<T, DirectoryServiceError>;

/// Directory query orchestration service.
///
/// Every query is available to any authenticated role; the directory holds
/// no privileged data.
#[derive(Clone)]
pub struct DirectoryService<R>
where
    R: DirectoryRepository,
{
    repository: Arc<R>,
}

impl<R> DirectoryService<R>
where
    R: DirectoryRepository,
{
    /// Creates a new directory service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Resolves a user by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError::UserNotFound`] when the user does
    /// not exist, or [`DirectoryServiceError::Repository`] when persistence
    /// lookup fails.
    pub async fn user_by_id(&self, id: UserId) -> DirectoryServiceResult<User> {
        self.repository
            .find_user_by_id(id)
            .await?
            .ok_or_else(|| DirectoryServiceError::UserNotFound(id))
    }

    /// Returns all users.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn list_users(&self) -> DirectoryServiceResult<Vec<User>> {
        Ok(self.repository.list_users().await?)
    }

    /// Returns the users belonging to the given department.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn users_in_department(
        &self,
        department_id: DepartmentId,
    ) -> DirectoryServiceResult<Vec<User>> {
        Ok(self
            .repository
            .list_users_by_department(department_id)
            .await?)
    }

    /// Returns all active departments.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn active_departments(&self) -> DirectoryServiceResult<Vec<Department>> {
        Ok(self.repository.list_active_departments().await?)
    }
}
