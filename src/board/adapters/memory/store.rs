//! In-memory task store for board tests.

use async_trait::async_trait;
use mockable::Clock;
use std::collections::HashSet;
use std::sync::{Arc, RwLock, RwLockWriteGuard};
use uuid::Uuid;

use crate::board::domain::{
    CanonicalTaskData, ProjectSummary, Task, TaskId, TaskSubmission, UserSummary,
};
use crate::board::ports::{TaskStore, TaskStoreError, TaskStoreResult};

/// Store operations that can be armed for failure injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    /// `list_tasks` calls.
    ListTasks,
    /// `fetch_task` calls.
    FetchTask,
    /// `create_task` calls.
    CreateTask,
    /// `update_task` calls.
    UpdateTask,
    /// `delete_task` calls.
    DeleteTask,
    /// `list_projects` calls.
    ListProjects,
    /// `list_users` calls.
    ListUsers,
}

/// Thread-safe in-memory task store.
///
/// Tasks keep insertion order, identifiers are minted locally and
/// timestamps come from the injected clock, mirroring the server-assigned
/// fields of the remote store. [`InMemoryTaskStore::fail_next`] arms a
/// one-shot transport failure for a single operation so tests can exercise
/// error paths.
pub struct InMemoryTaskStore<C>
where
    C: Clock,
{
    state: Arc<RwLock<InMemoryBoardState>>,
    clock: Arc<C>,
}

impl<C> Clone for InMemoryTaskStore<C>
where
    C: Clock,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

#[derive(Debug, Default)]
struct InMemoryBoardState {
    tasks: Vec<Task>,
    projects: Vec<ProjectSummary>,
    users: Vec<UserSummary>,
    armed_failures: HashSet<StoreOperation>,
}

impl<C> InMemoryTaskStore<C>
where
    C: Clock,
{
    /// Creates an empty store stamping timestamps with `clock`.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryBoardState::default())),
            clock,
        }
    }

    /// Seeds canonical task records in the given order.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the store lock is poisoned.
    pub fn seed_tasks(&self, tasks: impl IntoIterator<Item = Task>) -> TaskStoreResult<()> {
        let mut state = self.lock_write()?;
        state.tasks.extend(tasks);
        Ok(())
    }

    /// Seeds the project directory.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the store lock is poisoned.
    pub fn seed_projects(
        &self,
        projects: impl IntoIterator<Item = ProjectSummary>,
    ) -> TaskStoreResult<()> {
        let mut state = self.lock_write()?;
        state.projects.extend(projects);
        Ok(())
    }

    /// Seeds the user directory.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the store lock is poisoned.
    pub fn seed_users(&self, users: impl IntoIterator<Item = UserSummary>) -> TaskStoreResult<()> {
        let mut state = self.lock_write()?;
        state.users.extend(users);
        Ok(())
    }

    /// Arms a one-shot transport failure for the next call of `operation`.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the store lock is poisoned.
    pub fn fail_next(&self, operation: StoreOperation) -> TaskStoreResult<()> {
        let mut state = self.lock_write()?;
        state.armed_failures.insert(operation);
        Ok(())
    }

    fn lock_write(&self) -> TaskStoreResult<RwLockWriteGuard<'_, InMemoryBoardState>> {
        self.state
            .write()
            .map_err(|err| TaskStoreError::transport(std::io::Error::other(err.to_string())))
    }
}

/// Consumes an armed failure for `operation`, if present.
fn trip_failure(
    state: &mut InMemoryBoardState,
    operation: StoreOperation,
) -> TaskStoreResult<()> {
    if state.armed_failures.remove(&operation) {
        return Err(TaskStoreError::transport(std::io::Error::other(
            "injected store failure",
        )));
    }
    Ok(())
}

/// Builds the canonical record for a submission, resolving the denormalised
/// project and assignee summaries from the directories.
fn canonical_from_submission(
    state: &InMemoryBoardState,
    id: TaskId,
    submission: &TaskSubmission,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
) -> TaskStoreResult<Task> {
    let project = state
        .projects
        .iter()
        .find(|project| project.id == *submission.project_id())
        .cloned()
        .ok_or(TaskStoreError::Rejected { status: 422 })?;
    let assignee = state
        .users
        .iter()
        .find(|user| user.id == *submission.assignee_id())
        .cloned()
        .ok_or(TaskStoreError::Rejected { status: 422 })?;

    Ok(Task::from_canonical(CanonicalTaskData {
        id,
        title: submission.title().to_owned(),
        description: submission.description().to_owned(),
        status: submission.status().clone(),
        priority: submission.priority(),
        due_date: submission.due_date(),
        project,
        assignee,
        created_at,
        updated_at,
    }))
}

#[async_trait]
impl<C> TaskStore for InMemoryTaskStore<C>
where
    C: Clock + Send + Sync,
{
    async fn list_tasks(&self) -> TaskStoreResult<Vec<Task>> {
        let mut state = self.lock_write()?;
        trip_failure(&mut state, StoreOperation::ListTasks)?;
        Ok(state.tasks.clone())
    }

    async fn fetch_task(&self, id: &TaskId) -> TaskStoreResult<Task> {
        let mut state = self.lock_write()?;
        trip_failure(&mut state, StoreOperation::FetchTask)?;
        state
            .tasks
            .iter()
            .find(|task| task.id() == id)
            .cloned()
            .ok_or_else(|| TaskStoreError::NotFound(id.clone()))
    }

    async fn create_task(&self, submission: &TaskSubmission) -> TaskStoreResult<Task> {
        let mut state = self.lock_write()?;
        trip_failure(&mut state, StoreOperation::CreateTask)?;
        let stamped = self.clock.utc();
        let minted = TaskId::new(Uuid::new_v4().to_string());
        let task = canonical_from_submission(&state, minted, submission, stamped, stamped)?;
        state.tasks.push(task.clone());
        Ok(task)
    }

    async fn update_task(
        &self,
        id: &TaskId,
        submission: &TaskSubmission,
    ) -> TaskStoreResult<Task> {
        let mut state = self.lock_write()?;
        trip_failure(&mut state, StoreOperation::UpdateTask)?;
        let position = state
            .tasks
            .iter()
            .position(|task| task.id() == id)
            .ok_or_else(|| TaskStoreError::NotFound(id.clone()))?;
        let created_at = state
            .tasks
            .get(position)
            .map(Task::created_at)
            .ok_or_else(|| TaskStoreError::NotFound(id.clone()))?;
        let stamped = self.clock.utc();
        let task =
            canonical_from_submission(&state, id.clone(), submission, created_at, stamped)?;
        if let Some(entry) = state.tasks.get_mut(position) {
            *entry = task.clone();
        }
        Ok(task)
    }

    async fn delete_task(&self, id: &TaskId) -> TaskStoreResult<()> {
        let mut state = self.lock_write()?;
        trip_failure(&mut state, StoreOperation::DeleteTask)?;
        let before = state.tasks.len();
        state.tasks.retain(|task| task.id() != id);
        if state.tasks.len() == before {
            return Err(TaskStoreError::NotFound(id.clone()));
        }
        Ok(())
    }

    async fn list_projects(&self) -> TaskStoreResult<Vec<ProjectSummary>> {
        let mut state = self.lock_write()?;
        trip_failure(&mut state, StoreOperation::ListProjects)?;
        Ok(state.projects.clone())
    }

    async fn list_users(&self) -> TaskStoreResult<Vec<UserSummary>> {
        let mut state = self.lock_write()?;
        trip_failure(&mut state, StoreOperation::ListUsers)?;
        Ok(state.users.clone())
    }
}
