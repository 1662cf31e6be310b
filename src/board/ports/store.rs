//! Store port for the remote task, project and user collections.

use crate::board::domain::{ProjectSummary, Task, TaskId, TaskSubmission, UserSummary};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Remote task store contract.
///
/// Implementations return canonical records exactly as held by the store;
/// callers treat those records as the source of truth over any locally
/// held copy.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Returns the full task collection in store order.
    async fn list_tasks(&self) -> TaskStoreResult<Vec<Task>>;

    /// Returns the canonical record for a single task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no task has the given
    /// identifier.
    async fn fetch_task(&self, id: &TaskId) -> TaskStoreResult<Task>;

    /// Creates a task from the submission and returns the store's
    /// canonical record, including the assigned identifier, timestamps and
    /// denormalised summaries.
    async fn create_task(&self, submission: &TaskSubmission) -> TaskStoreResult<Task>;

    /// Replaces a task's fields and returns the store's canonical record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no task has the given
    /// identifier.
    async fn update_task(&self, id: &TaskId, submission: &TaskSubmission)
    -> TaskStoreResult<Task>;

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no task has the given
    /// identifier.
    async fn delete_task(&self, id: &TaskId) -> TaskStoreResult<()>;

    /// Returns the project summaries available for assignment and
    /// filtering.
    async fn list_projects(&self) -> TaskStoreResult<Vec<ProjectSummary>>;

    /// Returns the user summaries available for assignment and filtering.
    async fn list_users(&self) -> TaskStoreResult<Vec<UserSummary>>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The bearer credentials were missing or rejected.
    #[error("remote store rejected the credentials")]
    Unauthorized,

    /// The task does not exist on the remote store.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The remote store refused the request.
    #[error("remote store rejected the request with status {status}")]
    Rejected {
        /// HTTP status code returned by the remote store.
        status: u16,
    },

    /// Transport-level failure before a response could be read.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Maps an HTTP status code to the corresponding store error.
    ///
    /// Success statuses map to `None`. Unauthorised responses keep their
    /// distinguished variant; every other non-success status is the
    /// generic rejection.
    #[must_use]
    pub const fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            401 => Some(Self::Unauthorized),
            other => Some(Self::Rejected { status: other }),
        }
    }
}
