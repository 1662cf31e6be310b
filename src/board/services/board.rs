//! Board state manager and mutation coordinator.
//!
//! [`BoardService`] owns the authoritative local task list and applies
//! every mutation only from a confirmed store response; nothing is ever
//! inserted or patched speculatively. All mutating operations take
//! `&mut self`, so mutations are serialised through a single writer and a
//! second mutation cannot be issued while one is in flight.

use crate::board::domain::{
    BoardColumns, FilterCriteria, ProjectSummary, Task, TaskDraft, TaskId, TaskSubmission,
    UserSummary,
};
use crate::board::ports::{TaskStore, TaskStoreError, TaskStoreResult};
use crate::session::SessionContext;
use std::sync::Arc;
use thiserror::Error;

/// What the board may fetch, computed once from the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardCapabilities {
    list_users: bool,
}

impl BoardCapabilities {
    /// Creates capabilities with an explicit user-directory flag.
    #[must_use]
    pub const fn new(list_users: bool) -> Self {
        Self { list_users }
    }

    /// Derives capabilities from the session context.
    ///
    /// Only administrators may list the user directory; a signed-out
    /// context grants nothing.
    #[must_use]
    pub fn from_session(context: &SessionContext) -> Self {
        let list_users = context
            .session()
            .is_some_and(|session| session.user().role().is_admin());
        Self { list_users }
    }

    /// Returns whether the user directory may be fetched.
    #[must_use]
    pub const fn can_list_users(self) -> bool {
        self.list_users
    }
}

/// Lifecycle of the board's initial load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// The initial fetches have not settled yet.
    Loading,
    /// Every required fetch succeeded.
    Ready,
    /// A required fetch failed; the board stays failed for this mount.
    Failed,
}

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardError {
    /// The remote store reported a failure.
    #[error(transparent)]
    Store(#[from] TaskStoreError),

    /// The initial load already settled; a board never reloads within one
    /// mount.
    #[error("initial load has already settled")]
    LoadAlreadySettled,

    /// The operation needs a successfully loaded board.
    #[error("board data is not loaded")]
    NotReady,

    /// No project exists to attach the task to.
    #[error("no project available for the task")]
    NoProjectAvailable,

    /// No assignee exists for the task.
    #[error("no assignee available for the task")]
    NoAssigneeAvailable,

    /// An edit was submitted without a task under edit.
    #[error("no edit in progress")]
    NoEditInProgress,

    /// A delete was confirmed without a pending request.
    #[error("no delete confirmation pending")]
    NoDeleteInProgress,
}

/// Result type for board service operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Board state manager and mutation coordinator.
///
/// Holds the authoritative task list, the project and user directories,
/// the active filter criteria and the edit/delete flow state, and derives
/// the status columns on demand.
pub struct BoardService<S>
where
    S: TaskStore,
{
    store: Arc<S>,
    capabilities: BoardCapabilities,
    load: LoadState,
    tasks: Vec<Task>,
    projects: Vec<ProjectSummary>,
    users: Vec<UserSummary>,
    filter: FilterCriteria,
    editing: Option<Task>,
    pending_delete: Option<TaskId>,
}

impl<S> BoardService<S>
where
    S: TaskStore,
{
    /// Creates a board over the given store.
    ///
    /// The board holds no data until [`BoardService::load`] succeeds.
    #[must_use]
    pub fn new(store: Arc<S>, capabilities: BoardCapabilities) -> Self {
        Self {
            store,
            capabilities,
            load: LoadState::Loading,
            tasks: Vec::new(),
            projects: Vec::new(),
            users: Vec::new(),
            filter: FilterCriteria::new(),
            editing: None,
            pending_delete: None,
        }
    }

    /// Performs the one-shot initial load.
    ///
    /// Tasks, projects and (when the capability allows) users are fetched
    /// concurrently; state is populated only when every required fetch
    /// succeeds. When the capability denies user listing, the users fetch
    /// is never issued and the directory stays empty.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::LoadAlreadySettled`] when called after the
    /// load settled, and [`BoardError::Store`] when any fetch fails, in
    /// which case the board enters the terminal [`LoadState::Failed`]
    /// state holding no partial data.
    pub async fn load(&mut self) -> BoardResult<()> {
        if !matches!(self.load, LoadState::Loading) {
            return Err(BoardError::LoadAlreadySettled);
        }
        match self.fetch_initial().await {
            Ok((tasks, projects, users)) => {
                self.tasks = tasks;
                self.projects = projects;
                self.users = users;
                self.load = LoadState::Ready;
                Ok(())
            }
            Err(err) => {
                self.load = LoadState::Failed;
                Err(err.into())
            }
        }
    }

    async fn fetch_initial(
        &self,
    ) -> TaskStoreResult<(Vec<Task>, Vec<ProjectSummary>, Vec<UserSummary>)> {
        let users = async {
            if self.capabilities.can_list_users() {
                self.store.list_users().await
            } else {
                Ok(Vec::new())
            }
        };
        tokio::try_join!(self.store.list_tasks(), self.store.list_projects(), users)
    }

    /// Returns the load lifecycle state.
    #[must_use]
    pub const fn load_state(&self) -> LoadState {
        self.load
    }

    /// Returns whether the initial load has not yet settled.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    /// Returns the authoritative task list in store order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the projects available for assignment and filtering.
    #[must_use]
    pub fn projects(&self) -> &[ProjectSummary] {
        &self.projects
    }

    /// Returns the visible user directory.
    ///
    /// Empty when the capability denies listing.
    #[must_use]
    pub fn users(&self) -> &[UserSummary] {
        &self.users
    }

    /// Returns the active filter criteria.
    #[must_use]
    pub const fn filter(&self) -> &FilterCriteria {
        &self.filter
    }

    /// Replaces the filter criteria.
    pub fn set_filter(&mut self, filter: FilterCriteria) {
        self.filter = filter;
    }

    /// Restores the all-pass filter criteria.
    pub fn reset_filters(&mut self) {
        self.filter = FilterCriteria::new();
    }

    /// Derives the current status columns from the task list and filter.
    #[must_use]
    pub fn columns(&self) -> BoardColumns<'_> {
        BoardColumns::partition(&self.tasks, &self.filter)
    }

    /// Returns the task currently under edit, if any.
    #[must_use]
    pub const fn editing(&self) -> Option<&Task> {
        self.editing.as_ref()
    }

    /// Returns the task marked for deletion, if any.
    #[must_use]
    pub const fn pending_delete(&self) -> Option<&TaskId> {
        self.pending_delete.as_ref()
    }

    /// Creates a task and appends the store's canonical record to the
    /// list.
    ///
    /// Unset project and assignee references default to the first
    /// available option.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotReady`] before a successful load,
    /// [`BoardError::NoProjectAvailable`] or
    /// [`BoardError::NoAssigneeAvailable`] when no default exists (nothing
    /// is sent), and [`BoardError::Store`] when the store rejects the
    /// create; the local list stays untouched.
    pub async fn create_task(&mut self, draft: TaskDraft) -> BoardResult<Task> {
        self.require_ready()?;
        let submission = self.submission_for_create(draft)?;
        let created = self.store.create_task(&submission).await?;
        self.tasks.push(created.clone());
        Ok(created)
    }

    /// Starts an edit by fetching the canonical record for `id`.
    ///
    /// The fetched record seeds the edit flow, covering the case where the
    /// list view holds stale denormalised data.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotReady`] before a successful load and
    /// [`BoardError::Store`] when the fetch fails; the edit flow does not
    /// open and no local state changes.
    pub async fn begin_edit(&mut self, id: &TaskId) -> BoardResult<Task> {
        self.require_ready()?;
        let canonical = self.store.fetch_task(id).await?;
        self.editing = Some(canonical.clone());
        Ok(canonical)
    }

    /// Abandons the edit in progress, if any.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Submits the edit draft for the task under edit and replaces the
    /// matching list entry with the store's canonical record.
    ///
    /// Unset project and assignee references fall back to the edit seed's
    /// current values.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NoEditInProgress`] without a prior
    /// [`BoardService::begin_edit`], and [`BoardError::Store`] when the
    /// update fails; the list stays untouched and the edit remains open.
    pub async fn submit_edit(&mut self, draft: TaskDraft) -> BoardResult<Task> {
        let seed = self.editing.as_ref().ok_or(BoardError::NoEditInProgress)?;
        let target = seed.id().clone();
        let submission = submission_for_edit(draft, seed);
        let updated = self.store.update_task(&target, &submission).await?;
        if let Some(entry) = self.tasks.iter_mut().find(|task| *task.id() == target) {
            *entry = updated.clone();
        }
        self.editing = None;
        Ok(updated)
    }

    /// Marks a task as pending deletion without touching the list.
    pub fn request_delete(&mut self, id: TaskId) {
        self.pending_delete = Some(id);
    }

    /// Clears the pending-delete marker, if any.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Confirms the pending delete against the store.
    ///
    /// On success the entry is removed from the list; on failure the list
    /// is unchanged. The pending marker is cleared either way.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NoDeleteInProgress`] without a prior
    /// [`BoardService::request_delete`], and [`BoardError::Store`] when the
    /// remote delete fails.
    pub async fn confirm_delete(&mut self) -> BoardResult<TaskId> {
        let target = self
            .pending_delete
            .take()
            .ok_or(BoardError::NoDeleteInProgress)?;
        self.store.delete_task(&target).await?;
        self.tasks.retain(|task| task.id() != &target);
        Ok(target)
    }

    const fn require_ready(&self) -> BoardResult<()> {
        if matches!(self.load, LoadState::Ready) {
            Ok(())
        } else {
            Err(BoardError::NotReady)
        }
    }

    fn submission_for_create(&self, draft: TaskDraft) -> BoardResult<TaskSubmission> {
        let project_id = draft
            .project()
            .cloned()
            .or_else(|| self.projects.first().map(|project| project.id.clone()))
            .ok_or(BoardError::NoProjectAvailable)?;
        let assignee_id = draft
            .assignee()
            .cloned()
            .or_else(|| self.users.first().map(|user| user.id.clone()))
            .ok_or(BoardError::NoAssigneeAvailable)?;
        Ok(draft.into_submission(project_id, assignee_id))
    }
}

/// Resolves an edit draft against its seed's current references.
fn submission_for_edit(draft: TaskDraft, seed: &Task) -> TaskSubmission {
    let project_id = draft
        .project()
        .cloned()
        .unwrap_or_else(|| seed.project().id.clone());
    let assignee_id = draft
        .assignee()
        .cloned()
        .unwrap_or_else(|| seed.assignee().id.clone());
    draft.into_submission(project_id, assignee_id)
}
