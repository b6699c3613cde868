//! Tests for filter and pagination values.

use crate::directory::domain::DepartmentId;
use crate::task::domain::{PageRequest, TaskDomainError, TaskFilter, TaskPriority, TaskStatus};
use rstest::rstest;

#[rstest]
fn page_request_defaults_to_first_page_of_fifty() {
    let page = PageRequest::default();
    assert_eq!(page.page(), 1);
    assert_eq!(page.page_size(), 50);
    assert_eq!(page.offset(), 0);
}

#[rstest]
fn page_request_rejects_zero_page() {
    let result = PageRequest::new(0, 10);
    assert_eq!(result, Err(TaskDomainError::InvalidPage(0)));
}

#[rstest]
fn page_request_rejects_zero_page_size() {
    let result = PageRequest::new(1, 0);
    assert_eq!(result, Err(TaskDomainError::InvalidPageSize(0)));
}

#[rstest]
#[case(1, 50, 0)]
#[case(2, 50, 50)]
#[case(3, 2, 4)]
fn page_request_offset_skips_preceding_rows(
    #[case] page: u32,
    #[case] page_size: u32,
    #[case] expected: u64,
) {
    let request = PageRequest::new(page, page_size).expect("valid page request");
    assert_eq!(request.offset(), expected);
}

#[rstest]
fn page_request_accepts_unbounded_page_size() {
    let request = PageRequest::new(1, u32::MAX).expect("valid page request");
    assert_eq!(request.page_size(), u32::MAX);
}

#[rstest]
fn filter_accumulates_criteria() {
    let department_id = DepartmentId::new();
    let filter = TaskFilter::new()
        .with_status(TaskStatus::InProgress)
        .with_priority(TaskPriority::High)
        .with_department(department_id);

    assert_eq!(filter.status(), Some(TaskStatus::InProgress));
    assert_eq!(filter.priority(), Some(TaskPriority::High));
    assert_eq!(filter.department_id(), Some(department_id));
}

#[rstest]
fn empty_filter_has_no_criteria() {
    let filter = TaskFilter::default();
    assert_eq!(filter.status(), None);
    assert_eq!(filter.priority(), None);
    assert_eq!(filter.department_id(), None);
}
