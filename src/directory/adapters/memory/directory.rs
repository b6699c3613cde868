//! In-memory directory for tests and embedded use.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::directory::{
    domain::{Department, DepartmentId, User, UserId},
    ports::{DirectoryRepository, DirectoryRepositoryError, DirectoryRepositoryResult},
};

/// Thread-safe in-memory directory repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectoryRepository {
    state: Arc<RwLock<InMemoryDirectoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryDirectoryState {
    users: HashMap<UserId, User>,
    departments: HashMap<DepartmentId, Department>,
}

impl InMemoryDirectoryRepository {
    /// Creates an empty in-memory directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a user into the directory, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::Persistence`] when the backing
    /// lock is poisoned.
    pub fn add_user(&self, user: User) -> DirectoryRepositoryResult<()> {
        let mut state = lock_write(&self.state)?;
        state.users.insert(user.id(), user);
        Ok(())
    }

    /// Seeds a department into the directory, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::Persistence`] when the backing
    /// lock is poisoned.
    pub fn add_department(&self, department: Department) -> DirectoryRepositoryResult<()> {
        let mut state = lock_write(&self.state)?;
        state.departments.insert(department.id(), department);
        Ok(())
    }

    /// Resolves the department of a user without going through the port.
    ///
    /// Used by the in-memory task adapter to evaluate department filters
    /// synchronously under its own lock.
    pub(crate) fn department_of(
        &self,
        id: UserId,
    ) -> DirectoryRepositoryResult<Option<DepartmentId>> {
        let state = lock_read(&self.state)?;
        Ok(state.users.get(&id).map(User::department_id))
    }
}

fn lock_write(
    state: &Arc<RwLock<InMemoryDirectoryState>>,
) -> DirectoryRepositoryResult<std::sync::RwLockWriteGuard<'_, InMemoryDirectoryState>> {
    state
        .write()
        .map_err(|err| DirectoryRepositoryError::persistence(std::io::Error::other(err.to_string())))
}

fn lock_read(
    state: &Arc<RwLock<InMemoryDirectoryState>>,
) -> DirectoryRepositoryResult<std::sync::RwLockReadGuard<'_, InMemoryDirectoryState>> {
    state
        .read()
        .map_err(|err| DirectoryRepositoryError::persistence(std::io::Error::other(err.to_string())))
}

#[async_trait]
impl DirectoryRepository for InMemoryDirectoryRepository {
    async fn find_user_by_id(&self, id: UserId) -> DirectoryRepositoryResult<Option<User>> {
        let state = lock_read(&self.state)?;
        Ok(state.users.get(&id).cloned())
    }

    async fn list_users(&self) -> DirectoryRepositoryResult<Vec<User>> {
        let state = lock_read(&self.state)?;
        let mut users: Vec<User> = state.users.values().cloned().collect();
        users.sort_by(|a, b| a.full_name().cmp(b.full_name()));
        Ok(users)
    }

    async fn list_users_by_department(
        &self,
        department_id: DepartmentId,
    ) -> DirectoryRepositoryResult<Vec<User>> {
        let state = lock_read(&self.state)?;
        let mut users: Vec<User> = state
            .users
            .values()
            .filter(|user| user.department_id() == department_id)
            .cloned()
            .collect();
        users.sort_by(|a, b| a.full_name().cmp(b.full_name()));
        Ok(users)
    }

    async fn list_active_departments(&self) -> DirectoryRepositoryResult<Vec<Department>> {
        let state = lock_read(&self.state)?;
        let mut departments: Vec<Department> = state
            .departments
            .values()
            .filter(|department| department.is_active())
            .cloned()
            .collect();
        departments.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(departments)
    }
}
