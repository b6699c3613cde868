//! `PostgreSQL` repository implementation for directory lookups.

use super::{
    models::{DepartmentRow, UserRow},
    schema::{departments, users},
};
use crate::access::Role;
use crate::directory::{
    domain::{
        Department, DepartmentId, EmailAddress, PersistedDepartmentData, PersistedUserData, User,
        UserId,
    },
    ports::{DirectoryRepository, DirectoryRepositoryError, DirectoryRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by directory adapters.
pub type DirectoryPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed directory repository.
#[derive(Debug, Clone)]
pub struct PostgresDirectoryRepository {
    pool: DirectoryPgPool,
}

impl PostgresDirectoryRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: DirectoryPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> DirectoryRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> DirectoryRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(DirectoryRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(DirectoryRepositoryError::persistence)?
    }
}

#[async_trait]
impl DirectoryRepository for PostgresDirectoryRepository {
    async fn find_user_by_id(&self, id: UserId) -> DirectoryRepositoryResult<Option<User>> {
        self.run_blocking(move |connection| {
            let row = users::table
                .filter(users::id.eq(id.into_inner()))
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(DirectoryRepositoryError::persistence)?;
            row.map(row_to_user).transpose()
        })
        .await
    }

    async fn list_users(&self) -> DirectoryRepositoryResult<Vec<User>> {
        self.run_blocking(|connection| {
            let rows = users::table
                .order(users::full_name.asc())
                .select(UserRow::as_select())
                .load::<UserRow>(connection)
                .map_err(DirectoryRepositoryError::persistence)?;
            rows.into_iter().map(row_to_user).collect()
        })
        .await
    }

    async fn list_users_by_department(
        &self,
        department_id: DepartmentId,
    ) -> DirectoryRepositoryResult<Vec<User>> {
        self.run_blocking(move |connection| {
            let rows = users::table
                .filter(users::department_id.eq(department_id.into_inner()))
                .order(users::full_name.asc())
                .select(UserRow::as_select())
                .load::<UserRow>(connection)
                .map_err(DirectoryRepositoryError::persistence)?;
            rows.into_iter().map(row_to_user).collect()
        })
        .await
    }

    async fn list_active_departments(&self) -> DirectoryRepositoryResult<Vec<Department>> {
        self.run_blocking(|connection| {
            let rows = departments::table
                .filter(departments::is_active.eq(true))
                .order(departments::name.asc())
                .select(DepartmentRow::as_select())
                .load::<DepartmentRow>(connection)
                .map_err(DirectoryRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_department).collect())
        })
        .await
    }
}

fn row_to_user(row: UserRow) -> DirectoryRepositoryResult<User> {
    let role = Role::try_from(row.role.as_str())
        .map_err(DirectoryRepositoryError::invalid_persisted_data)?;
    let email = EmailAddress::new(row.email)
        .map_err(DirectoryRepositoryError::invalid_persisted_data)?;

    Ok(User::from_persisted(PersistedUserData {
        id: UserId::from_uuid(row.id),
        full_name: row.full_name,
        email,
        department_id: DepartmentId::from_uuid(row.department_id),
        role,
    }))
}

fn row_to_department(row: DepartmentRow) -> Department {
    Department::from_persisted(PersistedDepartmentData {
        id: DepartmentId::from_uuid(row.id),
        name: row.name,
        description: row.description,
        is_active: row.is_active,
    })
}
