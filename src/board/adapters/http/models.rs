//! Wire envelopes for the remote task store's REST responses.
//!
//! Task and user collections arrive wrapped in envelope objects; the
//! project collection is a bare array and needs no envelope here.

use crate::board::domain::{Task, UserSummary};
use serde::Deserialize;

/// Response body of `GET /tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TasksEnvelope {
    /// Task collection in store order.
    pub tasks: Vec<Task>,
}

/// Response body of the single-task endpoints (`GET`/`POST`/`PUT`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskEnvelope {
    /// Canonical task record.
    pub task: Task,
}

/// Response body of `GET /users`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UsersEnvelope {
    /// User collection.
    pub users: Vec<UserSummary>,
}
