//! The remote task API as seen by the client.
//!
//! DESIGN
//! ======
//! [`TaskApi`] is `?Send` so the browser transport (`gloo-net`, whose
//! futures are not `Send`) and the native reqwest transport share one trait.
//! Implementations read the bearer token from their `TokenStore` per request;
//! only `sign_in` and `sign_up` go out unauthenticated.

#[cfg(feature = "http")]
pub mod http;

use crate::error::ApiError;
use crate::model::{AuthToken, Credentials, List, ListPayload, SignUpRequest, Task, TaskPayload};

/// API path builders shared by every transport.
pub mod paths {
    pub const SIGN_IN: &str = "/signin";
    pub const SIGN_UP: &str = "/signup";
    pub const LISTS: &str = "/lists";

    #[must_use]
    pub fn list(list_id: &str) -> String {
        format!("/lists/{list_id}")
    }

    #[must_use]
    pub fn tasks(list_id: &str) -> String {
        format!("/lists/{list_id}/tasks")
    }

    #[must_use]
    pub fn task(list_id: &str, task_id: &str) -> String {
        format!("/lists/{list_id}/tasks/{task_id}")
    }
}

#[async_trait::async_trait(?Send)]
pub trait TaskApi {
    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthToken, ApiError>;

    async fn sign_up(&self, request: &SignUpRequest) -> Result<AuthToken, ApiError>;

    async fn lists(&self) -> Result<Vec<List>, ApiError>;

    async fn list(&self, list_id: &str) -> Result<List, ApiError>;

    async fn create_list(&self, payload: &ListPayload) -> Result<(), ApiError>;

    async fn update_list(&self, list_id: &str, payload: &ListPayload) -> Result<(), ApiError>;

    async fn delete_list(&self, list_id: &str) -> Result<(), ApiError>;

    async fn tasks(&self, list_id: &str) -> Result<Vec<Task>, ApiError>;

    async fn task(&self, list_id: &str, task_id: &str) -> Result<Task, ApiError>;

    async fn create_task(&self, list_id: &str, payload: &TaskPayload) -> Result<(), ApiError>;

    async fn update_task(&self, list_id: &str, task_id: &str, payload: &TaskPayload) -> Result<(), ApiError>;

    async fn delete_task(&self, list_id: &str, task_id: &str) -> Result<(), ApiError>;
}
