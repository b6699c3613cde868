//! Full task lifecycle scenarios over the in-memory adapters.

use super::helpers::{TestWorld, create_task, world};
use rstest::rstest;
use taskdesk::directory::ports::DirectoryRepository;
use taskdesk::task::{
    domain::{TaskPriority, TaskStatus},
    services::CreateTaskRequest,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_travels_from_creation_to_reopened_completion(world: TestWorld) {
    let id = create_task(&world, "Migrate billing exports", world.employee).await;

    let started = world
        .service
        .change_status(id, TaskStatus::InProgress, world.employee)
        .await
        .expect("assignee starts the task");
    assert!(started.completed_at().is_none());

    let done = world
        .service
        .change_status(id, TaskStatus::Done, world.employee)
        .await
        .expect("assignee completes the task");
    let first_completion = done.completed_at().expect("completion stamp set");

    let reopened = world
        .service
        .change_status(id, TaskStatus::InProgress, world.manager)
        .await
        .expect("manager reopens the task");
    assert_eq!(reopened.completed_at(), Some(first_completion));

    world
        .service
        .assign(id, world.colleague, world.manager)
        .await
        .expect("manager hands the task over");

    let redone = world
        .service
        .change_status(id, TaskStatus::Done, world.colleague)
        .await
        .expect("new assignee completes the task");
    let second_completion = redone.completed_at().expect("completion stamp set");
    assert!(second_completion > first_completion);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn updated_at_advances_with_each_mutation(world: TestWorld) {
    let id = create_task(&world, "Tidy the changelog", world.employee).await;
    let created = world
        .service
        .get(id, world.manager)
        .await
        .expect("task exists");

    let reprioritized = world
        .service
        .change_priority(id, TaskPriority::High, world.manager)
        .await
        .expect("manager changes priority");
    assert!(reprioritized.updated_at() > created.updated_at());

    let reassigned = world
        .service
        .assign(id, world.colleague, world.manager)
        .await
        .expect("manager reassigns");
    assert!(reassigned.updated_at() > reprioritized.updated_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deletion_is_permanent_and_leaves_users_intact(world: TestWorld) {
    let id = create_task(
        &world,
        "Temporary spike",
        world.employee,
    )
    .await;

    world
        .service
        .delete(id, world.manager)
        .await
        .expect("manager deletes the task");

    let gone = world.service.get(id, world.manager).await;
    assert!(gone.is_err());

    // Referenced users survive the deletion untouched.
    let assignee = world
        .directory
        .find_user_by_id(world.employee)
        .await
        .expect("directory lookup succeeds");
    assert!(assignee.is_some());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn creation_accepts_self_assignment_by_the_manager(world: TestWorld) {
    let task = world
        .service
        .create(
            CreateTaskRequest::new("Plan headcount", world.manager)
                .with_priority(TaskPriority::Low),
            world.manager,
        )
        .await
        .expect("manager assigns to self");

    assert_eq!(task.created_by(), world.manager);
    assert_eq!(task.assigned_to(), world.manager);
}
