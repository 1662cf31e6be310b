//! Shared fixtures for board tests.

use crate::board::domain::{
    CanonicalTaskData, ProjectId, ProjectSummary, Task, TaskId, TaskPriority, TaskStatus, UserId,
    UserSummary,
};
use chrono::{DateTime, TimeZone, Utc};

/// Fixed reference instant used for seeded records.
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 20, 9, 0, 0)
        .single()
        .expect("valid fixed timestamp")
}

/// Builds a project summary.
pub fn project_summary(id: &str, name: &str) -> ProjectSummary {
    ProjectSummary {
        id: ProjectId::new(id),
        name: name.to_owned(),
    }
}

/// Builds a user summary without an avatar.
pub fn user_summary(id: &str, name: &str) -> UserSummary {
    UserSummary {
        id: UserId::new(id),
        name: name.to_owned(),
        avatar: None,
    }
}

/// Builds a canonical task in the default project with the default
/// assignee.
pub fn canonical_task(id: &str, title: &str, status: TaskStatus, priority: TaskPriority) -> Task {
    assigned_task(
        id,
        title,
        "",
        status,
        priority,
        project_summary("p1", "Website Redesign"),
        user_summary("u1", "Alice Admin"),
    )
}

/// Builds a canonical task with a description, in the default project with
/// the default assignee.
pub fn described_task(
    id: &str,
    title: &str,
    description: &str,
    status: TaskStatus,
    priority: TaskPriority,
) -> Task {
    assigned_task(
        id,
        title,
        description,
        status,
        priority,
        project_summary("p1", "Website Redesign"),
        user_summary("u1", "Alice Admin"),
    )
}

/// Builds a canonical task with explicit project and assignee summaries.
pub fn assigned_task(
    id: &str,
    title: &str,
    description: &str,
    status: TaskStatus,
    priority: TaskPriority,
    project: ProjectSummary,
    assignee: UserSummary,
) -> Task {
    Task::from_canonical(CanonicalTaskData {
        id: TaskId::new(id),
        title: title.to_owned(),
        description: description.to_owned(),
        status,
        priority,
        due_date: None,
        project,
        assignee,
        created_at: fixed_time(),
        updated_at: fixed_time(),
    })
}
