//! In-memory repository for task lifecycle tests and embedded use.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::directory::adapters::memory::InMemoryDirectoryRepository;
use crate::directory::domain::DepartmentId;
use crate::task::{
    domain::{PageRequest, Task, TaskFilter, TaskId, TaskPage},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Holds a handle to the in-memory directory so the department filter can
/// be resolved against each task's current assignee.
#[derive(Debug, Clone)]
pub struct InMemoryTaskRepository {
    directory: Arc<InMemoryDirectoryRepository>,
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    // Monotonic arrival stamps; the stable tie-break for equal created_at.
    arrival: HashMap<TaskId, u64>,
    next_sequence: u64,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository sharing the given directory.
    #[must_use]
    pub fn new(directory: Arc<InMemoryDirectoryRepository>) -> Self {
        Self {
            directory,
            state: Arc::new(RwLock::new(InMemoryTaskState::default())),
        }
    }

    fn department_members(
        &self,
        tasks: &[(Task, u64)],
        department_id: DepartmentId,
    ) -> TaskRepositoryResult<Vec<bool>> {
        tasks
            .iter()
            .map(|(task, _)| {
                let department = self
                    .directory
                    .department_of(task.assigned_to())
                    .map_err(TaskRepositoryError::persistence)?;
                Ok(department == Some(department_id))
            })
            .collect()
    }
}

fn lock_write(
    state: &Arc<RwLock<InMemoryTaskState>>,
) -> TaskRepositoryResult<std::sync::RwLockWriteGuard<'_, InMemoryTaskState>> {
    state
        .write()
        .map_err(|err| TaskRepositoryError::persistence(std::io::Error::other(err.to_string())))
}

fn lock_read(
    state: &Arc<RwLock<InMemoryTaskState>>,
) -> TaskRepositoryResult<std::sync::RwLockReadGuard<'_, InMemoryTaskState>> {
    state
        .read()
        .map_err(|err| TaskRepositoryError::persistence(std::io::Error::other(err.to_string())))
}

fn matches_filter(task: &Task, filter: &TaskFilter) -> bool {
    if let Some(status) = filter.status()
        && task.status() != status
    {
        return false;
    }
    if let Some(priority) = filter.priority()
        && task.priority() != priority
    {
        return false;
    }
    true
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = lock_write(&self.state)?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }

        let sequence = state.next_sequence;
        state.next_sequence += 1;
        state.arrival.insert(task.id(), sequence);
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = lock_write(&self.state)?;
        if !state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::NotFound(task.id()));
        }
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = lock_read(&self.state)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list(
        &self,
        filter: &TaskFilter,
        page: &PageRequest,
    ) -> TaskRepositoryResult<TaskPage> {
        let mut matching: Vec<(Task, u64)> = {
            let state = lock_read(&self.state)?;
            state
                .tasks
                .values()
                .filter(|task| matches_filter(task, filter))
                .map(|task| {
                    let sequence = state.arrival.get(&task.id()).copied().unwrap_or(u64::MAX);
                    (task.clone(), sequence)
                })
                .collect()
        };

        if let Some(department_id) = filter.department_id() {
            let keep = self.department_members(&matching, department_id)?;
            let mut keep_flags = keep.into_iter();
            matching.retain(|_| keep_flags.next().unwrap_or(false));
        }

        matching.sort_by(|(a, a_seq), (b, b_seq)| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| a_seq.cmp(b_seq))
        });

        let total_count = matching.len() as u64;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let page_size = usize::try_from(page.page_size()).unwrap_or(usize::MAX);
        let items = matching
            .into_iter()
            .map(|(task, _)| task)
            .skip(offset)
            .take(page_size)
            .collect();

        Ok(TaskPage { items, total_count })
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = lock_write(&self.state)?;
        if state.tasks.remove(&id).is_none() {
            return Err(TaskRepositoryError::NotFound(id));
        }
        state.arrival.remove(&id);
        Ok(())
    }
}
