//! Filter and pagination values for task retrieval.

use super::{Task, TaskDomainError, TaskPriority, TaskStatus};
use crate::directory::domain::DepartmentId;
use serde::{Deserialize, Serialize};

/// Default page number when callers do not ask for one.
const DEFAULT_PAGE: u32 = 1;
/// Default page size when callers do not ask for one.
const DEFAULT_PAGE_SIZE: u32 = 50;

/// Optional narrowing criteria for task listings.
///
/// The department criterion matches against the task's CURRENT assignee's
/// department at query time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    status: Option<TaskStatus>,
    priority: Option<TaskPriority>,
    department_id: Option<DepartmentId>,
}

impl TaskFilter {
    /// Creates an empty filter matching every task.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: None,
            priority: None,
            department_id: None,
        }
    }

    /// Narrows the listing to one status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Narrows the listing to one priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Narrows the listing to tasks whose assignee belongs to a department.
    #[must_use]
    pub const fn with_department(mut self, department_id: DepartmentId) -> Self {
        self.department_id = Some(department_id);
        self
    }

    /// Returns the status criterion.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the priority criterion.
    #[must_use]
    pub const fn priority(&self) -> Option<TaskPriority> {
        self.priority
    }

    /// Returns the department criterion.
    #[must_use]
    pub const fn department_id(&self) -> Option<DepartmentId> {
        self.department_id
    }
}

/// Validated one-based pagination window.
///
/// There is no upper bound on the page size; callers may request an
/// effectively unbounded page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    /// Creates a validated page request.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidPage`] when `page` is zero or
    /// [`TaskDomainError::InvalidPageSize`] when `page_size` is zero.
    pub const fn new(page: u32, page_size: u32) -> Result<Self, TaskDomainError> {
        if page == 0 {
            return Err(TaskDomainError::InvalidPage(page));
        }
        if page_size == 0 {
            return Err(TaskDomainError::InvalidPageSize(page_size));
        }
        Ok(Self { page, page_size })
    }

    /// Returns the one-based page number.
    #[must_use]
    pub const fn page(self) -> u32 {
        self.page
    }

    /// Returns the number of rows per page.
    #[must_use]
    pub const fn page_size(self) -> u32 {
        self.page_size
    }

    /// Returns the number of rows preceding this page.
    #[must_use]
    pub const fn offset(self) -> u64 {
        (self.page as u64 - 1) * self.page_size as u64
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of tasks plus the total match count.
///
/// `total_count` counts every row matching the filter, ignoring
/// pagination, so callers can derive the number of pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPage {
    /// The page slice, ordered by creation time descending.
    pub items: Vec<Task>,
    /// Total number of rows matching the filter.
    pub total_count: u64,
}
