//! Native reqwest transport for [`TaskApi`].
//!
//! Thin HTTP wrapper: one `send` routine builds the request, attaches the
//! bearer token and maps status and body into [`ApiError`]. Pure decoding in
//! `decode` for testability.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::AUTHORIZATION;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{TaskApi, paths};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::model::{AuthToken, Credentials, List, ListPayload, SignUpRequest, Task, TaskPayload, TasksEnvelope};
use crate::session::{TokenStore, bearer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Auth {
    Anonymous,
    Bearer,
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct HttpApi {
    http: reqwest::Client,
    config: ClientConfig,
    tokens: Arc<dyn TokenStore>,
}

impl HttpApi {
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] if the HTTP client cannot be built.
    pub fn new(config: ClientConfig, tokens: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Ok(Self { http, config, tokens })
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn send(&self, method: Method, path: &str, body: Option<Value>, auth: Auth) -> Result<String, ApiError> {
        let url = self.config.url(path);
        tracing::debug!(%method, %url, "api request");

        let mut request = self.http.request(method.clone(), &url);
        if auth == Auth::Bearer {
            request = request.header(AUTHORIZATION, bearer(self.tokens.as_ref())?);
        }
        if let Some(json) = body {
            request = request.json(&json);
        }

        let response = request.send().await.map_err(|e| ApiError::Request(e.to_string()))?;
        let status = response.status();
        let text = response.text().await.map_err(|e| ApiError::Request(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!(%method, %url, status = status.as_u16(), "api request rejected");
            return Err(ApiError::Status { status: status.as_u16(), body: text });
        }
        Ok(text)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let text = self.send(Method::GET, path, None, Auth::Bearer).await?;
        decode(&text)
    }

    async fn write(&self, method: Method, path: &str, body: Option<&impl Serialize>) -> Result<(), ApiError> {
        let body = body.map(to_value).transpose()?;
        self.send(method, path, body, Auth::Bearer).await.map(drop)
    }
}

#[async_trait::async_trait(?Send)]
impl TaskApi for HttpApi {
    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthToken, ApiError> {
        let text = self.send(Method::POST, paths::SIGN_IN, Some(to_value(credentials)?), Auth::Anonymous).await?;
        decode(&text)
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<AuthToken, ApiError> {
        let text = self.send(Method::POST, paths::SIGN_UP, Some(to_value(request)?), Auth::Anonymous).await?;
        decode(&text)
    }

    async fn lists(&self) -> Result<Vec<List>, ApiError> {
        self.get(paths::LISTS).await
    }

    async fn list(&self, list_id: &str) -> Result<List, ApiError> {
        self.get(&paths::list(list_id)).await
    }

    async fn create_list(&self, payload: &ListPayload) -> Result<(), ApiError> {
        self.write(Method::POST, paths::LISTS, Some(payload)).await
    }

    async fn update_list(&self, list_id: &str, payload: &ListPayload) -> Result<(), ApiError> {
        self.write(Method::PUT, &paths::list(list_id), Some(payload)).await
    }

    async fn delete_list(&self, list_id: &str) -> Result<(), ApiError> {
        self.write(Method::DELETE, &paths::list(list_id), None::<&Value>).await
    }

    async fn tasks(&self, list_id: &str) -> Result<Vec<Task>, ApiError> {
        let envelope: TasksEnvelope = self.get(&paths::tasks(list_id)).await?;
        Ok(envelope.tasks)
    }

    async fn task(&self, list_id: &str, task_id: &str) -> Result<Task, ApiError> {
        self.get(&paths::task(list_id, task_id)).await
    }

    async fn create_task(&self, list_id: &str, payload: &TaskPayload) -> Result<(), ApiError> {
        self.write(Method::POST, &paths::tasks(list_id), Some(payload)).await
    }

    async fn update_task(&self, list_id: &str, task_id: &str, payload: &TaskPayload) -> Result<(), ApiError> {
        self.write(Method::PUT, &paths::task(list_id, task_id), Some(payload)).await
    }

    async fn delete_task(&self, list_id: &str, task_id: &str) -> Result<(), ApiError> {
        self.write(Method::DELETE, &paths::task(list_id, task_id), None::<&Value>).await
    }
}

// =============================================================================
// WIRE HELPERS
// =============================================================================

fn to_value(body: &impl Serialize) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
