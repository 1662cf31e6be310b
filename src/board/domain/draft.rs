//! Draft and submission types for task create/edit flows.

use super::{BoardDomainError, ProjectId, Task, TaskPriority, TaskStatus, UserId};
use chrono::NaiveDate;
use serde::Serialize;

/// A task being composed for creation or edit, not yet confirmed by the
/// remote store.
///
/// Titles are validated at construction; project and assignee may stay
/// unset, in which case the board resolves them before submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: String,
    status: TaskStatus,
    priority: TaskPriority,
    due_date: Option<NaiveDate>,
    project: Option<ProjectId>,
    assignee: Option<UserId>,
}

impl TaskDraft {
    /// Creates a draft with the given title and default remaining fields
    /// (status [`TaskStatus::Todo`], priority [`TaskPriority::Medium`], no
    /// due date, project and assignee unset).
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] when the title is empty or
    /// whitespace-only.
    pub fn new(title: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = title.into();
        if raw.trim().is_empty() {
            return Err(BoardDomainError::EmptyTitle);
        }
        Ok(Self {
            title: raw,
            description: String::new(),
            status: TaskStatus::Todo,
            priority: TaskPriority::Medium,
            due_date: None,
            project: None,
            assignee: None,
        })
    }

    /// Seeds an edit draft from a canonical task record.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] when the canonical record
    /// carries a blank title.
    pub fn from_canonical(task: &Task) -> Result<Self, BoardDomainError> {
        let mut draft = Self::new(task.title())?
            .with_description(task.description())
            .with_status(task.status().clone())
            .with_priority(task.priority())
            .with_project(task.project().id.clone())
            .with_assignee(task.assignee().id.clone());
        if let Some(due_date) = task.due_date() {
            draft = draft.with_due_date(due_date);
        }
        Ok(draft)
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the workflow status.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the priority level.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the target project.
    #[must_use]
    pub fn with_project(mut self, project: ProjectId) -> Self {
        self.project = Some(project);
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: UserId) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Returns the draft title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the draft description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the draft status.
    #[must_use]
    pub const fn status(&self) -> &TaskStatus {
        &self.status
    }

    /// Returns the draft priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the draft due date, if set.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the chosen project, if set.
    #[must_use]
    pub const fn project(&self) -> Option<&ProjectId> {
        self.project.as_ref()
    }

    /// Returns the chosen assignee, if set.
    #[must_use]
    pub const fn assignee(&self) -> Option<&UserId> {
        self.assignee.as_ref()
    }

    /// Assembles the wire submission with fully resolved references.
    #[must_use]
    pub fn into_submission(self, project_id: ProjectId, assignee_id: UserId) -> TaskSubmission {
        TaskSubmission {
            title: self.title,
            description: self.description,
            status: self.status,
            priority: self.priority,
            due_date: self.due_date,
            project_id,
            assignee_id,
        }
    }
}

/// Field set submitted to the remote store for create and update calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSubmission {
    title: String,
    description: String,
    status: TaskStatus,
    priority: TaskPriority,
    due_date: Option<NaiveDate>,
    project_id: ProjectId,
    assignee_id: UserId,
}

impl TaskSubmission {
    /// Returns the submitted title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the submitted description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the submitted status.
    #[must_use]
    pub const fn status(&self) -> &TaskStatus {
        &self.status
    }

    /// Returns the submitted priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the submitted due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the resolved project reference.
    #[must_use]
    pub const fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    /// Returns the resolved assignee reference.
    #[must_use]
    pub const fn assignee_id(&self) -> &UserId {
        &self.assignee_id
    }
}
