//! Denormalised project and user summaries carried on task records.

use super::{ProjectId, UserId};
use serde::{Deserialize, Serialize};

/// Project summary as embedded in task records and the project picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    /// Project identifier.
    pub id: ProjectId,
    /// Project display name.
    pub name: String,
}

/// User summary as embedded in task records and the assignee picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    /// User identifier.
    pub id: UserId,
    /// User display name.
    pub name: String,
    /// Avatar image URL, when the user has one.
    #[serde(default)]
    pub avatar: Option<String>,
}
