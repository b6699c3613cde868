//! Filtering, ordering, and pagination scenarios.

use super::helpers::{TestWorld, assert_single_task, create_task, world};
use rstest::rstest;
use taskdesk::task::{
    domain::{PageRequest, TaskFilter, TaskId, TaskPriority, TaskStatus},
    services::CreateTaskRequest,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_is_newest_first_across_pages(world: TestWorld) {
    let mut created: Vec<TaskId> = Vec::new();
    for index in 1..=5 {
        created.push(create_task(&world, &format!("Task {index}"), world.employee).await);
    }
    created.reverse();

    let first_page = world
        .service
        .list(
            &TaskFilter::default(),
            &PageRequest::new(1, 2).expect("valid page request"),
            world.viewer,
        )
        .await
        .expect("listing should succeed");
    let first_ids: Vec<TaskId> = first_page.items.iter().map(|task| task.id()).collect();
    assert_eq!(first_ids, created.get(0..2).unwrap_or_default());
    assert_eq!(first_page.total_count, 5);

    let last_page = world
        .service
        .list(
            &TaskFilter::default(),
            &PageRequest::new(3, 2).expect("valid page request"),
            world.viewer,
        )
        .await
        .expect("listing should succeed");
    let last_ids: Vec<TaskId> = last_page.items.iter().map(|task| task.id()).collect();
    assert_eq!(last_ids, created.get(4..).unwrap_or_default());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn page_past_the_end_is_empty_but_counted(world: TestWorld) {
    create_task(&world, "Only one", world.employee).await;

    let page = world
        .service
        .list(
            &TaskFilter::default(),
            &PageRequest::new(4, 10).expect("valid page request"),
            world.manager,
        )
        .await
        .expect("listing should succeed");

    assert!(page.items.is_empty());
    assert_eq!(page.total_count, 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn combined_criteria_narrow_together(world: TestWorld) {
    let wanted = world
        .service
        .create(
            CreateTaskRequest::new("Urgent engineering fix", world.employee)
                .with_priority(TaskPriority::High),
            world.manager,
        )
        .await
        .expect("task creation should succeed")
        .id();
    world
        .service
        .change_status(wanted, TaskStatus::InProgress, world.employee)
        .await
        .expect("status change should succeed");

    // Same priority, wrong department.
    world
        .service
        .create(
            CreateTaskRequest::new("Urgent sales fix", world.colleague)
                .with_priority(TaskPriority::High),
            world.manager,
        )
        .await
        .expect("task creation should succeed");

    // Right department, wrong priority.
    create_task(&world, "Routine engineering chore", world.employee).await;

    let filter = TaskFilter::new()
        .with_status(TaskStatus::InProgress)
        .with_priority(TaskPriority::High)
        .with_department(world.engineering);
    let page = world
        .service
        .list(&filter, &PageRequest::default(), world.manager)
        .await
        .expect("listing should succeed");

    assert_eq!(page.total_count, 1);
    assert_single_task(&page, wanted).expect("single matching task");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unbounded_page_size_returns_everything(world: TestWorld) {
    for index in 1..=7 {
        create_task(&world, &format!("Bulk {index}"), world.employee).await;
    }

    let page = world
        .service
        .list(
            &TaskFilter::default(),
            &PageRequest::new(1, u32::MAX).expect("valid page request"),
            world.manager,
        )
        .await
        .expect("listing should succeed");

    assert_eq!(page.items.len(), 7);
    assert_eq!(page.total_count, 7);
}
