//! Repository port for user and department lookups.

use crate::directory::domain::{Department, DepartmentId, User, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for directory repository operations.
pub type DirectoryRepositoryResult<T> = Result<T, DirectoryRepositoryError>;

/// Directory lookup contract.
///
/// All methods are read-only; user and department rows are owned by the
/// surrounding system, not by this crate.
#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    /// Finds a user by identifier, with its role resolved.
    ///
    /// Returns `None` when the user does not exist.
    async fn find_user_by_id(&self, id: UserId) -> DirectoryRepositoryResult<Option<User>>;

    /// Returns all users.
    async fn list_users(&self) -> DirectoryRepositoryResult<Vec<User>>;

    /// Returns the users belonging to the given department.
    async fn list_users_by_department(
        &self,
        department_id: DepartmentId,
    ) -> DirectoryRepositoryResult<Vec<User>>;

    /// Returns all departments with the active flag set.
    async fn list_active_departments(&self) -> DirectoryRepositoryResult<Vec<Department>>;
}

/// Errors returned by directory repository implementations.
#[derive(Debug, Clone, Error)]
pub enum DirectoryRepositoryError {
    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl DirectoryRepositoryError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
