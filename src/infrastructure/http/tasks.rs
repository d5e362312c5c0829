//! Task API HTTP adapter

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{MutationOp, TaskApi, TaskApiError};
use crate::domain::task::{Task, TaskId};

/// Request body for create and update calls
#[derive(Debug, Serialize)]
struct TaskPayload<'a> {
    task: &'a str,
}

/// Error body the backend attaches to non-success responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// HTTP adapter for the task REST API
pub struct HttpTaskApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTaskApi {
    /// Create a new adapter against the given backend origin
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Build the collection URL
    fn tasks_url(&self) -> String {
        format!("{}/tasks", self.base_url)
    }

    /// Build a single-task URL
    fn task_url(&self, id: TaskId) -> String {
        format!("{}/tasks/{}", self.base_url, id)
    }

    /// Build the toggle URL for a task
    fn toggle_url(&self, id: TaskId) -> String {
        format!("{}/tasks/{}/toggle", self.base_url, id)
    }

    /// Describe a non-success response, preferring the backend's own
    /// `{ "error": ... }` message when present
    async fn describe_failure(response: reqwest::Response) -> String {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.error)
            .unwrap_or(body);

        if message.trim().is_empty() {
            format!("HTTP {}", status)
        } else {
            format!("HTTP {}: {}", status, message.trim())
        }
    }

    /// Check a mutation response's status; the body is otherwise ignored
    async fn check_mutation(
        response: reqwest::Response,
        op: MutationOp,
    ) -> Result<(), TaskApiError> {
        if response.status().is_success() {
            return Ok(());
        }
        Err(TaskApiError::Mutation {
            op,
            detail: Self::describe_failure(response).await,
        })
    }
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    async fn list(&self) -> Result<Vec<Task>, TaskApiError> {
        let response = self
            .client
            .get(self.tasks_url())
            .send()
            .await
            .map_err(|e| TaskApiError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TaskApiError::Fetch(Self::describe_failure(response).await));
        }

        response
            .json::<Vec<Task>>()
            .await
            .map_err(|e| TaskApiError::ParseError(e.to_string()))
    }

    async fn create(&self, description: &str) -> Result<(), TaskApiError> {
        let response = self
            .client
            .post(self.tasks_url())
            .json(&TaskPayload { task: description })
            .send()
            .await
            .map_err(|e| TaskApiError::RequestFailed(e.to_string()))?;

        Self::check_mutation(response, MutationOp::Create).await
    }

    async fn toggle(&self, id: TaskId) -> Result<(), TaskApiError> {
        let response = self
            .client
            .put(self.toggle_url(id))
            .send()
            .await
            .map_err(|e| TaskApiError::RequestFailed(e.to_string()))?;

        Self::check_mutation(response, MutationOp::Toggle).await
    }

    async fn update(&self, id: TaskId, description: &str) -> Result<(), TaskApiError> {
        let response = self
            .client
            .put(self.task_url(id))
            .json(&TaskPayload { task: description })
            .send()
            .await
            .map_err(|e| TaskApiError::RequestFailed(e.to_string()))?;

        Self::check_mutation(response, MutationOp::Update).await
    }

    async fn delete(&self, id: TaskId) -> Result<(), TaskApiError> {
        let response = self
            .client
            .delete(self.task_url(id))
            .send()
            .await
            .map_err(|e| TaskApiError::RequestFailed(e.to_string()))?;

        Self::check_mutation(response, MutationOp::Delete).await
    }
}
