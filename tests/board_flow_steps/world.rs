//! Shared world state for kanban board BDD scenarios.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use mockable::DefaultClock;
use rstest::fixture;
use taskdeck::board::adapters::memory::{InMemoryTaskStore, StoreOperation};
use taskdeck::board::domain::{
    CanonicalTaskData, ProjectId, ProjectSummary, Task, TaskId, TaskPriority, TaskStatus, UserId,
    UserSummary,
};
use taskdeck::board::services::{BoardCapabilities, BoardError, BoardService};

/// Store type used by the BDD world.
pub type TestStore = InMemoryTaskStore<DefaultClock>;

/// Service type used by the BDD world.
pub type TestBoardService = BoardService<TestStore>;

/// Scenario world for board behaviour tests.
pub struct BoardWorld {
    pub store: Arc<TestStore>,
    pub service: TestBoardService,
    pub last_created: Option<Task>,
    pub last_error: Option<BoardError>,
}

impl BoardWorld {
    /// Creates a world over an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemoryTaskStore::new(Arc::new(DefaultClock)));
        let service = BoardService::new(Arc::clone(&store), BoardCapabilities::new(true));

        Self {
            store,
            service,
            last_created: None,
            last_error: None,
        }
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Fixed instant used for seeded records.
pub fn seed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 20, 9, 0, 0)
        .single()
        .expect("valid seed timestamp")
}

/// Parses a wire status label used in scenario text.
pub fn status_from_label(label: &str) -> TaskStatus {
    serde_json::from_value(serde_json::Value::String(label.to_owned()))
        .unwrap_or_else(|_| TaskStatus::Unrecognized(label.to_owned()))
}

/// Maps a scenario operation label to the store operation it fails.
pub fn operation_from_label(label: &str) -> Option<StoreOperation> {
    match label {
        "list" => Some(StoreOperation::ListTasks),
        "fetch" => Some(StoreOperation::FetchTask),
        "create" => Some(StoreOperation::CreateTask),
        "update" => Some(StoreOperation::UpdateTask),
        "delete" => Some(StoreOperation::DeleteTask),
        _ => None,
    }
}

/// Builds a canonical seed task in the default project.
pub fn seeded_task(id: &str, title: &str, status: TaskStatus) -> Task {
    Task::from_canonical(CanonicalTaskData {
        id: TaskId::new(id),
        title: title.to_owned(),
        description: String::new(),
        status,
        priority: TaskPriority::Medium,
        due_date: None,
        project: ProjectSummary {
            id: ProjectId::new("p1"),
            name: "Website Redesign".to_owned(),
        },
        assignee: UserSummary {
            id: UserId::new("u1"),
            name: "Alice Admin".to_owned(),
            avatar: None,
        },
        created_at: seed_time(),
        updated_at: seed_time(),
    })
}
