//! Shared test helpers for in-memory integration tests.

use chrono::{DateTime, Duration, Local, Utc};
use mockable::Clock;
use rstest::fixture;
use std::sync::{Arc, Mutex};
use taskdesk::access::Role;
use taskdesk::directory::{
    adapters::memory::InMemoryDirectoryRepository,
    domain::{Department, DepartmentId, EmailAddress, User, UserId},
};
use taskdesk::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskId, TaskPage},
    services::{CreateTaskRequest, TaskLifecycleService},
};

/// Deterministic clock advancing one second per reading.
pub struct StepClock {
    base: DateTime<Utc>,
    ticks: Mutex<i64>,
}

impl StepClock {
    /// Creates a clock starting from a fixed instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: DateTime::from_timestamp(1_700_000_000, 0).unwrap_or_default(),
            ticks: Mutex::new(0),
        }
    }
}

impl Default for StepClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for StepClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let mut ticks = self.ticks.lock().expect("clock lock");
        *ticks += 1;
        self.base + Duration::seconds(*ticks)
    }
}

/// Lifecycle service type used by the integration tests.
pub type TestService =
    TaskLifecycleService<InMemoryTaskRepository, InMemoryDirectoryRepository, StepClock>;

/// Seeded directory, service handle, and the identities used by scenarios.
pub struct TestWorld {
    /// Lifecycle service over in-memory adapters.
    pub service: TestService,
    /// Directory shared with the task repository.
    pub directory: Arc<InMemoryDirectoryRepository>,
    /// Engineering department.
    pub engineering: DepartmentId,
    /// Sales department.
    pub sales: DepartmentId,
    /// Manager in engineering.
    pub manager: UserId,
    /// Employee in engineering.
    pub employee: UserId,
    /// Employee in sales.
    pub colleague: UserId,
    /// Viewer in sales.
    pub viewer: UserId,
}

/// Seeds one user and returns its identifier.
pub fn seed_user(
    directory: &InMemoryDirectoryRepository,
    name: &str,
    email: &str,
    department_id: DepartmentId,
    role: Role,
) -> UserId {
    let address = EmailAddress::new(email).expect("valid email");
    let user = User::new(name, address, department_id, role).expect("valid user");
    let id = user.id();
    directory.add_user(user).expect("seed user");
    id
}

/// Provides a seeded world for each scenario.
#[fixture]
pub fn world() -> TestWorld {
    let directory = Arc::new(InMemoryDirectoryRepository::new());

    let engineering_department = Department::new("Engineering").expect("valid department");
    let sales_department = Department::new("Sales").expect("valid department");
    let engineering = engineering_department.id();
    let sales = sales_department.id();
    directory
        .add_department(engineering_department)
        .expect("seed department");
    directory
        .add_department(sales_department)
        .expect("seed department");

    let manager = seed_user(
        &directory,
        "Ines Duarte",
        "ines@taskdesk.test",
        engineering,
        Role::Manager,
    );
    let employee = seed_user(
        &directory,
        "Theo Lindqvist",
        "theo@taskdesk.test",
        engineering,
        Role::Employee,
    );
    let colleague = seed_user(
        &directory,
        "Sana Iqbal",
        "sana@taskdesk.test",
        sales,
        Role::Employee,
    );
    let viewer = seed_user(
        &directory,
        "Rui Barros",
        "rui@taskdesk.test",
        sales,
        Role::Viewer,
    );

    let tasks = Arc::new(InMemoryTaskRepository::new(Arc::clone(&directory)));
    let service =
        TaskLifecycleService::new(tasks, Arc::clone(&directory), Arc::new(StepClock::new()));

    TestWorld {
        service,
        directory,
        engineering,
        sales,
        manager,
        employee,
        colleague,
        viewer,
    }
}

/// Creates a task through the service as the world's manager.
pub async fn create_task(world: &TestWorld, title: &str, assignee: UserId) -> TaskId {
    world
        .service
        .create(CreateTaskRequest::new(title, assignee), world.manager)
        .await
        .expect("task creation should succeed")
        .id()
}

/// Asserts the page holds exactly one task with the expected ID.
///
/// # Errors
///
/// Returns an error if the page does not contain exactly one task matching
/// `expected_id`.
pub fn assert_single_task(page: &TaskPage, expected_id: TaskId) -> Result<(), eyre::Report> {
    eyre::ensure!(
        page.items.len() == 1,
        "expected exactly one task, found {}",
        page.items.len()
    );
    let task = page
        .items
        .first()
        .ok_or_else(|| eyre::eyre!("expected at least one task"))?;
    eyre::ensure!(task.id() == expected_id, "task ID mismatch");
    Ok(())
}
