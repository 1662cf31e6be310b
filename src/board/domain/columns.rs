//! Pure partition of the task list into status columns.

use super::{FilterCriteria, Task, TaskStatus};

/// Stable partition of the filtered task list into per-status columns.
///
/// Deterministic for a given input: deriving columns twice from the same
/// list and criteria yields equal values, so the partition is safe to
/// recompute on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardColumns<'a> {
    todo: Vec<&'a Task>,
    in_progress: Vec<&'a Task>,
    review: Vec<&'a Task>,
    done: Vec<&'a Task>,
}

impl<'a> BoardColumns<'a> {
    /// Partitions `tasks` into status columns after applying `filter`.
    ///
    /// Each matching task lands in exactly the column of its own status,
    /// and relative order within a column follows the input order. Tasks
    /// whose status is not a known board column appear in no column.
    #[must_use]
    pub fn partition(tasks: &'a [Task], filter: &FilterCriteria) -> Self {
        let mut columns = Self {
            todo: Vec::new(),
            in_progress: Vec::new(),
            review: Vec::new(),
            done: Vec::new(),
        };
        for task in tasks.iter().filter(|candidate| filter.matches(candidate)) {
            match task.status() {
                TaskStatus::Todo => columns.todo.push(task),
                TaskStatus::InProgress => columns.in_progress.push(task),
                TaskStatus::Review => columns.review.push(task),
                TaskStatus::Done => columns.done.push(task),
                TaskStatus::Unrecognized(_) => {}
            }
        }
        columns
    }

    /// Returns the column for `status`.
    ///
    /// Unrecognised statuses have no column; the returned slice is empty.
    #[must_use]
    pub fn column(&self, status: &TaskStatus) -> &[&'a Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Review => &self.review,
            TaskStatus::Done => &self.done,
            TaskStatus::Unrecognized(_) => &[],
        }
    }

    /// Iterates the known columns in board display order.
    pub fn iter<'b>(&'b self) -> impl Iterator<Item = (&'static TaskStatus, &'b [&'a Task])> + 'b {
        TaskStatus::board_order()
            .iter()
            .map(|status| (status, self.column(status)))
    }

    /// Returns the number of tasks visible across all columns.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.review.len() + self.done.len()
    }
}
