//! Browser transport for [`TaskApi`].
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: every request fails with [`ApiError::Request`] after the
//! local checks, so pages and tests still link without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here panics. Status, transport and decode failures all come back
//! as [`ApiError`] for the page state machines to present.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use taskdeck::api::paths;
use taskdeck::config::ClientConfig;
use taskdeck::model::TasksEnvelope;
use taskdeck::session::bearer;
use taskdeck::{ApiError, AuthToken, Credentials, List, ListPayload, SignUpRequest, Task, TaskApi, TaskPayload, TokenStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Auth {
    Anonymous,
    Bearer,
}

/// Cloneable API handle provided through Leptos context.
#[derive(Clone)]
pub struct GlooApi {
    config: ClientConfig,
    tokens: Arc<dyn TokenStore>,
}

impl GlooApi {
    pub fn new(config: ClientConfig, tokens: Arc<dyn TokenStore>) -> Self {
        Self { config, tokens }
    }

    /// The store the bearer token is read from.
    pub fn tokens(&self) -> &dyn TokenStore {
        self.tokens.as_ref()
    }

    async fn send(&self, verb: Verb, path: &str, body: Option<Value>, auth: Auth) -> Result<String, ApiError> {
        let url = self.config.url(path);
        let authorization = match auth {
            Auth::Bearer => Some(bearer(self.tokens.as_ref())?),
            Auth::Anonymous => None,
        };

        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            log::debug!("api request: {} {url}", verb.as_str());
            let mut builder = match verb {
                Verb::Get => Request::get(&url),
                Verb::Post => Request::post(&url),
                Verb::Put => Request::put(&url),
                Verb::Delete => Request::delete(&url),
            };
            if let Some(value) = &authorization {
                builder = builder.header("Authorization", value);
            }
            let request = match body {
                Some(json) => builder.json(&json),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Request(e.to_string()))?;

            let response = request.send().await.map_err(|e| ApiError::Request(e.to_string()))?;
            let status = response.status();
            let text = response.text().await.map_err(|e| ApiError::Request(e.to_string()))?;
            if status >= 400 {
                log::warn!("api request rejected: {} {url} -> {status}", verb.as_str());
            }
            check_status(status, text)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (body, authorization);
            Err(ApiError::Request(format!("{} {url}: browser transport unavailable", verb.as_str())))
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let text = self.send(Verb::Get, path, None, Auth::Bearer).await?;
        decode(&text)
    }

    async fn write(&self, verb: Verb, path: &str, body: Option<&impl Serialize>) -> Result<(), ApiError> {
        let body = body.map(to_value).transpose()?;
        self.send(verb, path, body, Auth::Bearer).await.map(drop)
    }
}

#[async_trait::async_trait(?Send)]
impl TaskApi for GlooApi {
    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthToken, ApiError> {
        let text = self.send(Verb::Post, paths::SIGN_IN, Some(to_value(credentials)?), Auth::Anonymous).await?;
        decode(&text)
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<AuthToken, ApiError> {
        let text = self.send(Verb::Post, paths::SIGN_UP, Some(to_value(request)?), Auth::Anonymous).await?;
        decode(&text)
    }

    async fn lists(&self) -> Result<Vec<List>, ApiError> {
        self.get(paths::LISTS).await
    }

    async fn list(&self, list_id: &str) -> Result<List, ApiError> {
        self.get(&paths::list(list_id)).await
    }

    async fn create_list(&self, payload: &ListPayload) -> Result<(), ApiError> {
        self.write(Verb::Post, paths::LISTS, Some(payload)).await
    }

    async fn update_list(&self, list_id: &str, payload: &ListPayload) -> Result<(), ApiError> {
        self.write(Verb::Put, &paths::list(list_id), Some(payload)).await
    }

    async fn delete_list(&self, list_id: &str) -> Result<(), ApiError> {
        self.write(Verb::Delete, &paths::list(list_id), None::<&Value>).await
    }

    async fn tasks(&self, list_id: &str) -> Result<Vec<Task>, ApiError> {
        let envelope: TasksEnvelope = self.get(&paths::tasks(list_id)).await?;
        Ok(envelope.tasks)
    }

    async fn task(&self, list_id: &str, task_id: &str) -> Result<Task, ApiError> {
        self.get(&paths::task(list_id, task_id)).await
    }

    async fn create_task(&self, list_id: &str, payload: &TaskPayload) -> Result<(), ApiError> {
        self.write(Verb::Post, &paths::tasks(list_id), Some(payload)).await
    }

    async fn update_task(&self, list_id: &str, task_id: &str, payload: &TaskPayload) -> Result<(), ApiError> {
        self.write(Verb::Put, &paths::task(list_id, task_id), Some(payload)).await
    }

    async fn delete_task(&self, list_id: &str, task_id: &str) -> Result<(), ApiError> {
        self.write(Verb::Delete, &paths::task(list_id, task_id), None::<&Value>).await
    }
}

// =============================================================================
// WIRE HELPERS
// =============================================================================

fn check_status(status: u16, text: String) -> Result<String, ApiError> {
    if (200..300).contains(&status) {
        Ok(text)
    } else {
        Err(ApiError::Status { status, body: text })
    }
}

fn to_value(body: &impl Serialize) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
