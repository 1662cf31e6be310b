//! Task aggregate and its status/priority enumerations.

use super::{ProjectSummary, TaskId, UserSummary};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Known statuses in board display order.
static BOARD_ORDER: [TaskStatus; 4] = [
    TaskStatus::Todo,
    TaskStatus::InProgress,
    TaskStatus::Review,
    TaskStatus::Done,
];

/// Task workflow status.
///
/// The four known statuses each back one board column. Any other label the
/// remote store returns is preserved verbatim in [`TaskStatus::Unrecognized`]
/// so the record round-trips unchanged, but such tasks belong to no column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Work has not started.
    Todo,
    /// Work is underway.
    InProgress,
    /// Work is awaiting review.
    Review,
    /// Work is complete.
    Done,
    /// Status label not known to the board.
    #[serde(untagged)]
    Unrecognized(String),
}

impl TaskStatus {
    /// Returns the known statuses in board display order.
    #[must_use]
    pub fn board_order() -> &'static [Self; 4] {
        &BOARD_ORDER
    }

    /// Returns the wire label for this status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Todo => "TODO",
            Self::InProgress => "IN_PROGRESS",
            Self::Review => "REVIEW",
            Self::Done => "DONE",
            Self::Unrecognized(label) => label.as_str(),
        }
    }

    /// Returns whether this status backs a board column.
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    /// Lowest urgency.
    Low,
    /// Default urgency.
    Medium,
    /// Highest urgency.
    High,
}

impl TaskPriority {
    /// Returns the wire label for this priority.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task aggregate as returned by the remote store.
///
/// Every field, including the denormalised project and assignee summaries
/// and both timestamps, is server-assigned; the client never fabricates or
/// amends a task record locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    status: TaskStatus,
    priority: TaskPriority,
    #[serde(default)]
    due_date: Option<NaiveDate>,
    project: ProjectSummary,
    assignee: UserSummary,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a task from a canonical store record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalTaskData {
    /// Server-assigned task identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Task description, possibly empty.
    pub description: String,
    /// Workflow status.
    pub status: TaskStatus,
    /// Priority level.
    pub priority: TaskPriority,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Denormalised project summary.
    pub project: ProjectSummary,
    /// Denormalised assignee summary.
    pub assignee: UserSummary,
    /// Server-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Server-assigned last-modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Reconstructs a task from a canonical store record.
    #[must_use]
    pub fn from_canonical(data: CanonicalTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            priority: data.priority,
            due_date: data.due_date,
            project: data.project,
            assignee: data.assignee,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> &TaskStatus {
        &self.status
    }

    /// Returns the priority level.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the denormalised project summary.
    #[must_use]
    pub const fn project(&self) -> &ProjectSummary {
        &self.project
    }

    /// Returns the denormalised assignee summary.
    #[must_use]
    pub const fn assignee(&self) -> &UserSummary {
        &self.assignee
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
