//! New-task and edit-task forms.
//!
//! Both pages share [`TaskForm`]. The deadline is stored only in canonical
//! RFC 3339 form; picker values go through
//! [`normalize_input`](crate::deadline::normalize_input) as they are typed.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};

use crate::api::TaskApi;
use crate::deadline::{self, DeadlineError};
use crate::error::{Action, ApiError, UiError};
use crate::model::{DisplayFilter, List, Task, TaskPayload};
use crate::remaining::remaining_label;
use crate::route::Route;

use super::settle;

// =============================================================================
// FORM
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub detail: String,
    pub done: bool,
    pub limit: Option<String>,
}

impl TaskForm {
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self { title: task.title.clone(), detail: task.detail.clone(), done: task.done, limit: task.limit.clone() }
    }

    /// Accept a picker value, storing its canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`DeadlineError`] and keeps the previous deadline when `raw`
    /// is not a date.
    pub fn set_deadline_input<Tz: TimeZone>(&mut self, raw: &str, zone: Tz) -> Result<(), DeadlineError> {
        self.limit = deadline::normalize_input(raw, zone)?;
        Ok(())
    }

    /// Current deadline as a picker value in `zone`.
    #[must_use]
    pub fn deadline_input<Tz>(&self, zone: Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        deadline::to_input_value(self.limit.as_deref(), zone)
    }

    /// Radio value: `"todo"` or `"done"`.
    pub fn set_status_value(&mut self, value: &str) {
        self.done = DisplayFilter::from_value(value) == DisplayFilter::Done;
    }

    #[must_use]
    pub fn remaining_label(&self, now: DateTime<Utc>) -> String {
        remaining_label(self.limit.as_deref(), now)
    }

    #[must_use]
    pub fn payload(&self) -> TaskPayload {
        TaskPayload {
            title: self.title.clone(),
            detail: self.detail.clone(),
            done: self.done,
            limit: self.limit.clone(),
        }
    }
}

// =============================================================================
// NEW TASK
// =============================================================================

#[derive(Clone, Debug, Default)]
pub struct NewTaskState {
    pub lists: Vec<List>,
    pub selected_list_id: Option<String>,
    pub form: TaskForm,
    pub error: Option<UiError>,
}

impl NewTaskState {
    /// Store a list fetch result, preselecting the first list.
    pub fn apply_lists(&mut self, result: Result<Vec<List>, ApiError>) {
        match result {
            Ok(lists) => {
                self.selected_list_id = lists.first().map(|list| list.id.clone());
                self.lists = lists;
            }
            Err(err) => self.error = Some(UiError::new(Action::FetchLists, &err)),
        }
    }

    pub fn select_list(&mut self, list_id: &str) {
        self.selected_list_id = Some(list_id.to_owned());
    }

    /// Picker input; an invalid value is reported inline.
    pub fn set_deadline_input<Tz: TimeZone>(&mut self, raw: &str, zone: Tz) {
        if let Err(e) = self.form.set_deadline_input(raw, zone) {
            self.error = Some(UiError::new(Action::CreateTask, &e.into()));
        }
    }

    /// List the task will be created in.
    ///
    /// # Errors
    ///
    /// Returns a validation [`UiError`] when no list is selected.
    pub fn target_list(&mut self) -> Result<String, UiError> {
        let missing = ApiError::Validation("no list selected".into());
        self.selected_list_id.clone().ok_or(missing).map_err(|err| {
            let ui = UiError::new(Action::CreateTask, &err);
            self.error = Some(ui.clone());
            ui
        })
    }

    /// # Errors
    ///
    /// Returns the [`UiError`] now stored on `self.error`.
    pub fn finish_submit(&mut self, result: Result<(), ApiError>) -> Result<Route, UiError> {
        settle(&mut self.error, Action::CreateTask, result)
    }

    pub async fn load<A: TaskApi + ?Sized>(&mut self, api: &A) {
        let lists = api.lists().await;
        self.apply_lists(lists);
    }

    /// # Errors
    ///
    /// Returns a [`UiError`] when no list is selected or creation fails.
    pub async fn submit<A: TaskApi + ?Sized>(&mut self, api: &A) -> Result<Route, UiError> {
        let list_id = self.target_list()?;
        let result = api.create_task(&list_id, &self.form.payload()).await;
        self.finish_submit(result)
    }
}

// =============================================================================
// EDIT TASK
// =============================================================================

#[derive(Clone, Debug, Default)]
pub struct EditTaskState {
    pub list_id: String,
    pub task_id: String,
    pub form: TaskForm,
    pub error: Option<UiError>,
}

impl EditTaskState {
    #[must_use]
    pub fn new(list_id: &str, task_id: &str) -> Self {
        Self { list_id: list_id.to_owned(), task_id: task_id.to_owned(), ..Self::default() }
    }

    /// Pre-populate the form from a fetched task.
    pub fn apply_task(&mut self, result: Result<Task, ApiError>) {
        match result {
            Ok(task) => self.form = TaskForm::from_task(&task),
            Err(err) => self.error = Some(UiError::new(Action::FetchTask, &err)),
        }
    }

    pub fn set_deadline_input<Tz: TimeZone>(&mut self, raw: &str, zone: Tz) {
        if let Err(e) = self.form.set_deadline_input(raw, zone) {
            self.error = Some(UiError::new(Action::UpdateTask, &e.into()));
        }
    }

    /// # Errors
    ///
    /// Returns the [`UiError`] now stored on `self.error`.
    pub fn finish_update(&mut self, result: Result<(), ApiError>) -> Result<Route, UiError> {
        settle(&mut self.error, Action::UpdateTask, result)
    }

    /// # Errors
    ///
    /// Returns the [`UiError`] now stored on `self.error`.
    pub fn finish_delete(&mut self, result: Result<(), ApiError>) -> Result<Route, UiError> {
        settle(&mut self.error, Action::DeleteTask, result)
    }

    pub async fn load<A: TaskApi + ?Sized>(&mut self, api: &A) {
        let task = api.task(&self.list_id, &self.task_id).await;
        self.apply_task(task);
    }

    /// # Errors
    ///
    /// Returns a [`UiError`] when the update is rejected.
    pub async fn submit<A: TaskApi + ?Sized>(&mut self, api: &A) -> Result<Route, UiError> {
        let result = api.update_task(&self.list_id, &self.task_id, &self.form.payload()).await;
        self.finish_update(result)
    }

    /// # Errors
    ///
    /// Returns a [`UiError`] when the delete is rejected, including when the
    /// task is already gone.
    pub async fn delete<A: TaskApi + ?Sized>(&mut self, api: &A) -> Result<Route, UiError> {
        let result = api.delete_task(&self.list_id, &self.task_id).await;
        self.finish_delete(result)
    }
}

#[cfg(test)]
#[path = "task_form_test.rs"]
mod tests;
