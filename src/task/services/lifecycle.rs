//! Service layer for authorized task lifecycle operations.
//!
//! Every operation resolves the acting user through the directory port,
//! consults the access policy, and only then touches task state. A denied
//! action therefore never leaves a partial write behind.

use crate::access::{AccessDenied, TaskAction, TaskRelation, authorize};
use crate::directory::{
    domain::{User, UserId},
    ports::{DirectoryRepository, DirectoryRepositoryError},
};
use crate::task::{
    domain::{
        NewTaskData, PageRequest, Task, TaskDomainError, TaskFilter, TaskId, TaskPage,
        TaskPriority, TaskStatus, TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    priority: TaskPriority,
    assigned_to: UserId,
}

impl CreateTaskRequest {
    /// Creates a request with required fields and medium priority.
    #[must_use]
    pub fn new(title: impl Into<String>, assigned_to: UserId) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: TaskPriority::default(),
            assigned_to,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }
}

/// Request payload for editing a task's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: String,
    description: Option<String>,
}

impl UpdateTaskRequest {
    /// Creates a request replacing the title and clearing the description.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// The target task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    /// The acting user does not exist.
    #[error("user not found: {0}")]
    UserNotFound(UserId),
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),
    /// The access policy refused the action.
    #[error(transparent)]
    Forbidden(#[from] AccessDenied),
    /// Task repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// Directory lookup failed.
    #[error(transparent)]
    Directory(#[from] DirectoryRepositoryError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<R, D, C>
where
    R: TaskRepository,
    D: DirectoryRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<R>,
    directory: Arc<D>,
    clock: Arc<C>,
}

impl<R, D, C> TaskLifecycleService<R, D, C>
where
    R: TaskRepository,
    D: DirectoryRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(tasks: Arc<R>, directory: Arc<D>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            directory,
            clock,
        }
    }

    /// Returns one page of tasks matching the filter, newest first.
    ///
    /// Every role may list; the page carries the total match count so the
    /// caller can derive the number of pages.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::UserNotFound`] when the acting user is
    /// unknown, or a repository error when persistence fails.
    pub async fn list(
        &self,
        filter: &TaskFilter,
        page: &PageRequest,
        acting_user: UserId,
    ) -> TaskLifecycleResult<TaskPage> {
        let actor = self.actor(acting_user).await?;
        authorize(actor.role(), TaskAction::Read, TaskRelation::Other)?;
        Ok(self.tasks.list(filter, page).await?)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] when the task does not
    /// exist.
    pub async fn get(&self, id: TaskId, acting_user: UserId) -> TaskLifecycleResult<Task> {
        let actor = self.actor(acting_user).await?;
        authorize(actor.role(), TaskAction::Read, TaskRelation::Other)?;
        self.task(id).await
    }

    /// Creates a new task assigned to an existing user.
    ///
    /// The status is forced to [`TaskStatus::New`]; the acting user becomes
    /// the creator.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Forbidden`] unless the actor is a
    /// manager, [`TaskLifecycleError::Validation`] when the title is blank
    /// or the assignee is unknown, or a repository error when persistence
    /// fails. Nothing is persisted on any failure.
    pub async fn create(
        &self,
        request: CreateTaskRequest,
        acting_user: UserId,
    ) -> TaskLifecycleResult<Task> {
        let actor = self.actor(acting_user).await?;
        authorize(actor.role(), TaskAction::Create, TaskRelation::Other)?;

        let title = TaskTitle::new(request.title)?;
        self.assignee_must_exist(request.assigned_to).await?;

        let task = Task::new(
            NewTaskData {
                title,
                description: request.description,
                priority: request.priority,
                created_by: actor.id(),
                assigned_to: request.assigned_to,
            },
            &*self.clock,
        );
        self.tasks.insert(&task).await?;
        tracing::info!(task = %task.id(), actor = %acting_user, "task created");
        Ok(task)
    }

    /// Replaces a task's title and description.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] when the task does not
    /// exist, [`TaskLifecycleError::Forbidden`] when the actor may not edit
    /// it, or [`TaskLifecycleError::Validation`] when the title is blank.
    pub async fn update(
        &self,
        id: TaskId,
        request: UpdateTaskRequest,
        acting_user: UserId,
    ) -> TaskLifecycleResult<Task> {
        let actor = self.actor(acting_user).await?;
        let mut task = self.task(id).await?;
        authorize(actor.role(), TaskAction::EditContent, relation(&actor, &task))?;

        let title = TaskTitle::new(request.title)?;
        task.edit_content(title, request.description, &*self.clock);
        self.tasks.update(&task).await?;
        Ok(task)
    }

    /// Moves a task to another status.
    ///
    /// Any status may follow any other; entering [`TaskStatus::Done`]
    /// stamps the completion timestamp and leaving it keeps the stamp.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] when the task does not
    /// exist or [`TaskLifecycleError::Forbidden`] when the actor may not
    /// change its status.
    pub async fn change_status(
        &self,
        id: TaskId,
        status: TaskStatus,
        acting_user: UserId,
    ) -> TaskLifecycleResult<Task> {
        let actor = self.actor(acting_user).await?;
        let mut task = self.task(id).await?;
        authorize(
            actor.role(),
            TaskAction::ChangeStatus,
            relation(&actor, &task),
        )?;

        task.change_status(status, &*self.clock);
        self.tasks.update(&task).await?;
        tracing::debug!(task = %id, status = %status, "task status changed");
        Ok(task)
    }

    /// Changes a task's priority.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] when the task does not
    /// exist or [`TaskLifecycleError::Forbidden`] unless the actor is a
    /// manager.
    pub async fn change_priority(
        &self,
        id: TaskId,
        priority: TaskPriority,
        acting_user: UserId,
    ) -> TaskLifecycleResult<Task> {
        let actor = self.actor(acting_user).await?;
        let mut task = self.task(id).await?;
        authorize(
            actor.role(),
            TaskAction::ChangePriority,
            relation(&actor, &task),
        )?;

        task.change_priority(priority, &*self.clock);
        self.tasks.update(&task).await?;
        Ok(task)
    }

    /// Reassigns a task to an existing user.
    ///
    /// The previous assignee reference is overwritten; no history is kept.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] when the task does not
    /// exist, [`TaskLifecycleError::Forbidden`] unless the actor is a
    /// manager, or [`TaskLifecycleError::Validation`] when the new assignee
    /// is unknown.
    pub async fn assign(
        &self,
        id: TaskId,
        assignee: UserId,
        acting_user: UserId,
    ) -> TaskLifecycleResult<Task> {
        let actor = self.actor(acting_user).await?;
        let mut task = self.task(id).await?;
        authorize(actor.role(), TaskAction::Assign, relation(&actor, &task))?;

        self.assignee_must_exist(assignee).await?;
        task.reassign(assignee, &*self.clock);
        self.tasks.update(&task).await?;
        tracing::debug!(task = %id, assignee = %assignee, "task reassigned");
        Ok(task)
    }

    /// Permanently deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] when the task does not
    /// exist or [`TaskLifecycleError::Forbidden`] unless the actor is a
    /// manager.
    pub async fn delete(&self, id: TaskId, acting_user: UserId) -> TaskLifecycleResult<()> {
        let actor = self.actor(acting_user).await?;
        let task = self.task(id).await?;
        authorize(actor.role(), TaskAction::Delete, relation(&actor, &task))?;

        self.tasks.delete(id).await?;
        tracing::info!(task = %id, actor = %acting_user, "task deleted");
        Ok(())
    }

    async fn actor(&self, id: UserId) -> TaskLifecycleResult<User> {
        self.directory
            .find_user_by_id(id)
            .await?
            .ok_or_else(|| TaskLifecycleError::UserNotFound(id))
    }

    async fn task(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.tasks
            .find_by_id(id)
            .await?
            .ok_or_else(|| TaskLifecycleError::TaskNotFound(id))
    }

    async fn assignee_must_exist(&self, assignee: UserId) -> TaskLifecycleResult<()> {
        if self.directory.find_user_by_id(assignee).await?.is_none() {
            return Err(TaskDomainError::UnknownAssignee(assignee).into());
        }
        Ok(())
    }
}

/// Relationship of the actor to the task, as the policy sees it.
fn relation(actor: &User, task: &Task) -> TaskRelation {
    if task.assigned_to() == actor.id() {
        TaskRelation::Assignee
    } else {
        TaskRelation::Other
    }
}
