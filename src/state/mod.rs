//! Page state machines.
//!
//! DESIGN
//! ======
//! State is split by page (`auth`, `home`, `task_form`, `list_form`) so each
//! view depends on a small focused model. Every page exposes synchronous
//! `apply_*` / `finish_*` steps that a reactive UI can call from inside a
//! signal update, plus async conveniences that chain those steps around a
//! [`TaskApi`](crate::api::TaskApi) call for the CLI and the tests.

pub mod auth;
pub mod home;
pub mod list_form;
pub mod task_form;

use crate::error::{Action, ApiError, UiError};
use crate::route::Route;

/// Record a write result on a page's `error` slot. Success clears the slot
/// and navigates home.
fn settle(error: &mut Option<UiError>, action: Action, result: Result<(), ApiError>) -> Result<Route, UiError> {
    match result {
        Ok(()) => {
            *error = None;
            Ok(Route::Home)
        }
        Err(err) => {
            let ui = UiError::new(action, &err);
            *error = Some(ui.clone());
            Err(ui)
        }
    }
}
