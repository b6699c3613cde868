//! `PostgreSQL` repository implementation for task lifecycle storage.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::directory::adapters::postgres::schema::users;
use crate::directory::domain::UserId;
use crate::task::{
    domain::{
        PageRequest, PersistedTaskData, Task, TaskFilter, TaskId, TaskPage, TaskPriority,
        TaskStatus, TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::{Pg, PgConnection};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let title = task.title().as_str().to_owned();
        let description = task.description().map(str::to_owned);
        let status = task.status().as_str().to_owned();
        let priority = task.priority().as_str().to_owned();
        let updated_at = task.updated_at();
        let completed_at = task.completed_at();
        let assigned_to = task.assigned_to().into_inner();

        self.run_blocking(move |connection| {
            let affected = diesel::update(tasks::table.filter(tasks::id.eq(task_id.into_inner())))
                .set((
                    tasks::title.eq(title),
                    tasks::description.eq(description),
                    tasks::status.eq(status),
                    tasks::priority.eq(priority),
                    tasks::updated_at.eq(updated_at),
                    tasks::completed_at.eq(completed_at),
                    tasks::assigned_to.eq(assigned_to),
                ))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;

            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list(
        &self,
        filter: &TaskFilter,
        page: &PageRequest,
    ) -> TaskRepositoryResult<TaskPage> {
        let list_filter = *filter;
        let offset = i64::try_from(page.offset()).unwrap_or(i64::MAX);
        let limit = i64::from(page.page_size());

        self.run_blocking(move |connection| {
            let total = apply_filters(tasks::table.count().into_boxed(), &list_filter)
                .get_result::<i64>(connection)
                .map_err(TaskRepositoryError::persistence)?;

            let rows = apply_filters(
                tasks::table.select(TaskRow::as_select()).into_boxed(),
                &list_filter,
            )
            .order((tasks::created_at.desc(), tasks::sequence.asc()))
            .offset(offset)
            .limit(limit)
            .load::<TaskRow>(connection)
            .map_err(TaskRepositoryError::persistence)?;

            let items = rows
                .into_iter()
                .map(row_to_task)
                .collect::<TaskRepositoryResult<Vec<Task>>>()?;

            Ok(TaskPage {
                items,
                total_count: total.unsigned_abs(),
            })
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

/// Applies the filter criteria shared by the count and page statements.
fn apply_filters<'a, ST>(
    query: tasks::BoxedQuery<'a, Pg, ST>,
    filter: &TaskFilter,
) -> tasks::BoxedQuery<'a, Pg, ST> {
    let mut filtered = query;

    if let Some(status) = filter.status() {
        filtered = filtered.filter(tasks::status.eq(status.as_str()));
    }
    if let Some(priority) = filter.priority() {
        filtered = filtered.filter(tasks::priority.eq(priority.as_str()));
    }
    if let Some(department_id) = filter.department_id() {
        // Subquery instead of a join: tasks reference users twice (creator
        // and assignee) and only the assignee's department is relevant.
        let members = users::table
            .filter(users::department_id.eq(department_id.into_inner()))
            .select(users::id);
        filtered = filtered.filter(tasks::assigned_to.eq_any(members));
    }

    filtered
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        title: task.title().as_str().to_owned(),
        description: task.description().map(str::to_owned),
        status: task.status().as_str().to_owned(),
        priority: task.priority().as_str().to_owned(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
        completed_at: task.completed_at(),
        created_by: task.created_by().into_inner(),
        assigned_to: task.assigned_to().into_inner(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let title =
        TaskTitle::new(row.title).map_err(TaskRepositoryError::invalid_persisted_data)?;
    let status = TaskStatus::try_from(row.status.as_str())
        .map_err(TaskRepositoryError::invalid_persisted_data)?;
    let priority = TaskPriority::try_from(row.priority.as_str())
        .map_err(TaskRepositoryError::invalid_persisted_data)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(row.id),
        title,
        description: row.description,
        status,
        priority,
        created_at: row.created_at,
        updated_at: row.updated_at,
        completed_at: row.completed_at,
        created_by: UserId::from_uuid(row.created_by),
        assigned_to: UserId::from_uuid(row.assigned_to),
    }))
}
