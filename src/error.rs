//! Errors and their user-facing presentation.
//!
//! ERROR HANDLING
//! ==============
//! Transports return [`ApiError`]. Page state machines never propagate it;
//! they wrap it in a [`UiError`] tagged with the [`Action`] that failed and
//! keep it for inline display. `UiError`'s `Display` is the single place a
//! localized prefix is joined with the underlying message.

use std::fmt;

use crate::deadline::DeadlineError;

// =============================================================================
// API ERROR
// =============================================================================

/// Failure talking to the task API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No bearer token is stored; the request was not sent.
    #[error("not signed in: no auth token stored")]
    MissingToken,

    /// The request could not be sent or no response arrived.
    #[error("request failed: {0}")]
    Request(String),

    /// The API answered with a non-success status.
    #[error("API returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// Input rejected before any request was made.
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Deadline(#[from] DeadlineError),

    /// The token store could not be read or written.
    #[error("token storage failed: {0}")]
    Storage(String),
}

impl ApiError {
    /// Stable machine-readable code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingToken => "E_MISSING_TOKEN",
            Self::Request(_) => "E_REQUEST",
            Self::Status { .. } => "E_STATUS",
            Self::Decode(_) => "E_DECODE",
            Self::Validation(_) => "E_VALIDATION",
            Self::Deadline(_) => "E_DEADLINE",
            Self::Storage(_) => "E_STORAGE",
        }
    }

    /// Whether trying again could plausibly succeed. Nothing retries
    /// automatically; callers may surface this as a hint.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Status { status: 429 | 500..=599, .. })
    }

    /// True when the API rejected the bearer token.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::MissingToken | Self::Status { status: 401, .. })
    }
}

// =============================================================================
// ACTIONS
// =============================================================================

/// A user-level operation whose failure is shown inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SignIn,
    SignUp,
    FetchLists,
    FetchList,
    FetchTasks,
    FetchTask,
    CreateTask,
    UpdateTask,
    DeleteTask,
    CreateList,
    UpdateList,
    DeleteList,
}

impl Action {
    /// Localized message prefix for a failed action.
    #[must_use]
    pub fn failure_prefix(self) -> &'static str {
        match self {
            Self::SignIn => "サインインに失敗しました。",
            Self::SignUp => "ユーザー作成に失敗しました。",
            Self::FetchLists => "リストの取得に失敗しました。",
            Self::FetchList => "リスト情報の取得に失敗しました。",
            Self::FetchTasks => "タスクの取得に失敗しました。",
            Self::FetchTask => "タスク情報の取得に失敗しました。",
            Self::CreateTask => "タスクの作成に失敗しました。",
            Self::UpdateTask | Self::UpdateList => "更新に失敗しました。",
            Self::DeleteTask | Self::DeleteList => "削除に失敗しました。",
            Self::CreateList => "リストの作成に失敗しました。",
        }
    }
}

// =============================================================================
// UI ERROR
// =============================================================================

/// Structured page-level failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiError {
    pub action: Action,
    pub code: &'static str,
    pub message: String,
}

impl UiError {
    #[must_use]
    pub fn new(action: Action, err: &ApiError) -> Self {
        tracing::warn!(?action, code = err.error_code(), error = %err, "action failed");
        Self { action, code: err.error_code(), message: err.to_string() }
    }
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.action.failure_prefix(), self.message)
    }
}

impl std::error::Error for UiError {}

/// Extension for tagging transport results with the action that produced
/// them.
pub trait ResultExt<T> {
    /// # Errors
    ///
    /// Converts any [`ApiError`] into a [`UiError`] for `action`.
    fn for_action(self, action: Action) -> Result<T, UiError>;
}

impl<T> ResultExt<T> for Result<T, ApiError> {
    fn for_action(self, action: Action) -> Result<T, UiError> {
        self.map_err(|err| UiError::new(action, &err))
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
