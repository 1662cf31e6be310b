//! REST client implementation of the task store port.

use super::models::{TaskEnvelope, TasksEnvelope, UsersEnvelope};
use crate::board::domain::{ProjectSummary, Task, TaskId, TaskSubmission, UserSummary};
use crate::board::ports::{TaskStore, TaskStoreError, TaskStoreResult};
use crate::session::{BearerToken, Session};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

/// Remote task store reached over HTTP.
///
/// Every request carries the session's bearer token. Unauthorised
/// responses surface as [`TaskStoreError::Unauthorized`]; any other
/// non-success status becomes the generic rejection, except task-scoped
/// 404s which are refined to [`TaskStoreError::NotFound`].
#[derive(Debug, Clone)]
pub struct HttpTaskStore {
    client: Client,
    base_url: Url,
    token: BearerToken,
}

impl HttpTaskStore {
    /// Creates a store adapter from an HTTP client, API base URL and
    /// bearer token.
    #[must_use]
    pub const fn new(client: Client, base_url: Url, token: BearerToken) -> Self {
        Self {
            client,
            base_url,
            token,
        }
    }

    /// Creates a store adapter for an authenticated session using a
    /// default HTTP client.
    #[must_use]
    pub fn for_session(base_url: Url, session: &Session) -> Self {
        Self::new(Client::new(), base_url, session.token().clone())
    }

    /// Builds an endpoint URL by appending path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> TaskStoreResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                TaskStoreError::transport(std::io::Error::other(
                    "base URL cannot carry path segments",
                ))
            })?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }

    async fn dispatch(&self, request: RequestBuilder) -> TaskStoreResult<Response> {
        let response = request
            .bearer_auth(self.token.as_str())
            .send()
            .await
            .map_err(TaskStoreError::transport)?;
        TaskStoreError::from_status(response.status().as_u16())
            .map_or_else(|| Ok(response), Err)
    }

    async fn request_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> TaskStoreResult<T> {
        let response = self.dispatch(request).await?;
        response.json().await.map_err(TaskStoreError::transport)
    }

    async fn request_unit(&self, request: RequestBuilder) -> TaskStoreResult<()> {
        self.dispatch(request).await.map(|_response| ())
    }
}

/// Refines a generic 404 rejection into a task-scoped not-found error.
fn refine_not_found(err: TaskStoreError, id: &TaskId) -> TaskStoreError {
    match err {
        TaskStoreError::Rejected { status: 404 } => TaskStoreError::NotFound(id.clone()),
        other => other,
    }
}

#[async_trait]
impl TaskStore for HttpTaskStore {
    async fn list_tasks(&self) -> TaskStoreResult<Vec<Task>> {
        let url = self.endpoint(&["tasks"])?;
        let envelope: TasksEnvelope = self.request_json(self.client.get(url)).await?;
        Ok(envelope.tasks)
    }

    async fn fetch_task(&self, id: &TaskId) -> TaskStoreResult<Task> {
        let url = self.endpoint(&["tasks", id.as_str()])?;
        let envelope: TaskEnvelope = self
            .request_json(self.client.get(url))
            .await
            .map_err(|err| refine_not_found(err, id))?;
        Ok(envelope.task)
    }

    async fn create_task(&self, submission: &TaskSubmission) -> TaskStoreResult<Task> {
        let url = self.endpoint(&["tasks"])?;
        let envelope: TaskEnvelope = self
            .request_json(self.client.post(url).json(submission))
            .await?;
        Ok(envelope.task)
    }

    async fn update_task(
        &self,
        id: &TaskId,
        submission: &TaskSubmission,
    ) -> TaskStoreResult<Task> {
        let url = self.endpoint(&["tasks", id.as_str()])?;
        let envelope: TaskEnvelope = self
            .request_json(self.client.put(url).json(submission))
            .await
            .map_err(|err| refine_not_found(err, id))?;
        Ok(envelope.task)
    }

    async fn delete_task(&self, id: &TaskId) -> TaskStoreResult<()> {
        let url = self.endpoint(&["tasks", id.as_str()])?;
        self.request_unit(self.client.delete(url))
            .await
            .map_err(|err| refine_not_found(err, id))
    }

    async fn list_projects(&self) -> TaskStoreResult<Vec<ProjectSummary>> {
        let url = self.endpoint(&["projects"])?;
        self.request_json(self.client.get(url)).await
    }

    async fn list_users(&self) -> TaskStoreResult<Vec<UserSummary>> {
        let url = self.endpoint(&["users"])?;
        let envelope: UsersEnvelope = self.request_json(self.client.get(url)).await?;
        Ok(envelope.users)
    }
}
