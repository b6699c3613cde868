//! End-to-end authorization scenarios over the in-memory adapters.

use super::helpers::{TestWorld, create_task, world};
use rstest::rstest;
use taskdesk::task::{
    domain::{PageRequest, TaskFilter, TaskStatus},
    services::{TaskLifecycleError, UpdateTaskRequest},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn employee_works_own_task_but_not_a_colleagues(world: TestWorld) {
    let own = create_task(&world, "Index rebuild", world.employee).await;
    let foreign = create_task(&world, "Quarterly forecast", world.colleague).await;

    world
        .service
        .update(
            own,
            UpdateTaskRequest::new("Index rebuild and verify"),
            world.employee,
        )
        .await
        .expect("assignee should edit own task");
    world
        .service
        .change_status(own, TaskStatus::InProgress, world.employee)
        .await
        .expect("assignee should move own task");

    let edit = world
        .service
        .update(foreign, UpdateTaskRequest::new("Taken over"), world.employee)
        .await;
    assert!(matches!(edit, Err(TaskLifecycleError::Forbidden(_))));

    let status = world
        .service
        .change_status(foreign, TaskStatus::Done, world.employee)
        .await;
    assert!(matches!(status, Err(TaskLifecycleError::Forbidden(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reassignment_moves_the_edit_right_with_it(world: TestWorld) {
    let id = create_task(&world, "Rotating duty", world.employee).await;

    world
        .service
        .assign(id, world.colleague, world.manager)
        .await
        .expect("manager should reassign");

    let former = world
        .service
        .change_status(id, TaskStatus::InProgress, world.employee)
        .await;
    assert!(matches!(former, Err(TaskLifecycleError::Forbidden(_))));

    world
        .service
        .change_status(id, TaskStatus::InProgress, world.colleague)
        .await
        .expect("new assignee should move the task");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn denied_mutation_is_distinct_from_missing_task(world: TestWorld) {
    let id = create_task(&world, "Present and guarded", world.employee).await;

    let denied = world
        .service
        .delete(id, world.viewer)
        .await
        .expect_err("viewer deletion should be refused");
    assert!(matches!(denied, TaskLifecycleError::Forbidden(_)));

    let missing = world
        .service
        .delete(taskdesk::task::domain::TaskId::new(), world.manager)
        .await
        .expect_err("deleting a missing task should fail");
    assert!(matches!(missing, TaskLifecycleError::TaskNotFound(_)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn every_role_sees_the_full_listing(world: TestWorld) {
    create_task(&world, "Visible to all", world.employee).await;
    create_task(&world, "Also visible", world.colleague).await;

    for actor in [world.manager, world.employee, world.colleague, world.viewer] {
        let page = world
            .service
            .list(&TaskFilter::default(), &PageRequest::default(), actor)
            .await
            .expect("listing should succeed for every role");
        assert_eq!(page.total_count, 2);
    }
}
