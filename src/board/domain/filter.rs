//! Filter criteria applied to the board before column derivation.

use super::{ProjectId, Task, TaskPriority, UserId};

/// Sentinel-aware selector for a single filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    /// Pass every candidate.
    All,
    /// Pass only candidates equal to the chosen value.
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> Selection<T> {
    /// Returns whether the candidate passes this selector.
    #[must_use]
    pub fn allows(&self, candidate: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(chosen) => chosen == candidate,
        }
    }
}

/// The combination of search text and selectors currently applied to the
/// board.
///
/// All criteria combine with logical AND. Criteria live purely on the
/// client and are reset only by explicit user action.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    search: String,
    priority: Selection<TaskPriority>,
    project: Selection<ProjectId>,
    assignee: Selection<UserId>,
}

impl FilterCriteria {
    /// Creates criteria that pass every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text search term.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Sets the priority selector.
    #[must_use]
    pub fn with_priority(mut self, priority: Selection<TaskPriority>) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the project selector.
    #[must_use]
    pub fn with_project(mut self, project: Selection<ProjectId>) -> Self {
        self.project = project;
        self
    }

    /// Sets the assignee selector.
    #[must_use]
    pub fn with_assignee(mut self, assignee: Selection<UserId>) -> Self {
        self.assignee = assignee;
        self
    }

    /// Returns the search term.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Returns the priority selector.
    #[must_use]
    pub const fn priority(&self) -> &Selection<TaskPriority> {
        &self.priority
    }

    /// Returns the project selector.
    #[must_use]
    pub const fn project(&self) -> &Selection<ProjectId> {
        &self.project
    }

    /// Returns the assignee selector.
    #[must_use]
    pub const fn assignee(&self) -> &Selection<UserId> {
        &self.assignee
    }

    /// Returns whether the task passes every criterion.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.matches_search(task)
            && self.priority.allows(&task.priority())
            && self.project.allows(&task.project().id)
            && self.assignee.allows(&task.assignee().id)
    }

    /// Case-insensitive substring match over title and description. An
    /// empty search term passes everything.
    fn matches_search(&self, task: &Task) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        task.title().to_lowercase().contains(&needle)
            || task.description().to_lowercase().contains(&needle)
    }
}
