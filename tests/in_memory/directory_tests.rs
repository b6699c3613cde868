//! Directory query scenarios over the in-memory adapter.

use super::helpers::{TestWorld, world};
use rstest::rstest;
use std::sync::Arc;
use taskdesk::directory::{
    domain::{Department, UserId},
    services::{DirectoryService, DirectoryServiceError},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn users_resolve_with_role_and_department(world: TestWorld) {
    let service = DirectoryService::new(Arc::clone(&world.directory));

    let manager = service
        .user_by_id(world.manager)
        .await
        .expect("manager should resolve");
    assert_eq!(manager.department_id(), world.engineering);
    assert_eq!(manager.role(), taskdesk::access::Role::Manager);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_user_is_reported_as_not_found(world: TestWorld) {
    let service = DirectoryService::new(Arc::clone(&world.directory));
    let missing = UserId::new();

    let result = service.user_by_id(missing).await;
    assert!(matches!(
        result,
        Err(DirectoryServiceError::UserNotFound(id)) if id == missing
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn department_membership_splits_the_user_list(world: TestWorld) {
    let service = DirectoryService::new(Arc::clone(&world.directory));

    let all = service.list_users().await.expect("listing should succeed");
    assert_eq!(all.len(), 4);

    let engineering = service
        .users_in_department(world.engineering)
        .await
        .expect("query should succeed");
    assert_eq!(engineering.len(), 2);
    assert!(
        engineering
            .iter()
            .all(|user| user.department_id() == world.engineering)
    );

    let sales = service
        .users_in_department(world.sales)
        .await
        .expect("query should succeed");
    assert_eq!(sales.len(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn inactive_departments_disappear_from_the_active_list(world: TestWorld) {
    let closed = Department::new("Facilities")
        .expect("valid department")
        .with_description("Wound down last quarter")
        .deactivated();
    world
        .directory
        .add_department(closed)
        .expect("seed department");
    let service = DirectoryService::new(Arc::clone(&world.directory));

    let active = service
        .active_departments()
        .await
        .expect("query should succeed");

    let names: Vec<&str> = active.iter().map(Department::name).collect();
    assert_eq!(names, vec!["Engineering", "Sales"]);
}
