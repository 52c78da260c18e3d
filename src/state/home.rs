//! Home page: list tabs, the selected list's tasks, and the done/todo filter.

use chrono::{DateTime, Utc};

use crate::api::TaskApi;
use crate::error::{Action, ApiError, UiError};
use crate::model::{DisplayFilter, List, Task, filter_tasks};
use crate::remaining::remaining_label;
use crate::route::Route;

/// Ticket for an in-flight task fetch.
///
/// Only the ticket from the most recent [`HomeState::begin_select`] is
/// accepted by [`HomeState::finish_tasks`]; answers to older requests are
/// dropped so a slow response cannot overwrite a newer selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskRequest {
    pub list_id: String,
    seq: u64,
}

#[derive(Clone, Debug, Default)]
pub struct HomeState {
    pub lists: Vec<List>,
    pub selected_list_id: Option<String>,
    pub tasks: Vec<Task>,
    pub filter: DisplayFilter,
    pub error: Option<UiError>,
    latest_request: u64,
}

impl HomeState {
    /// Store a list fetch result. On a non-empty result the first list is
    /// selected and the ticket for its task fetch is returned.
    pub fn apply_lists(&mut self, result: Result<Vec<List>, ApiError>) -> Option<TaskRequest> {
        match result {
            Ok(lists) => {
                self.error = None;
                self.lists = lists;
                let first = self.lists.first()?.id.clone();
                Some(self.begin_select(&first))
            }
            Err(err) => {
                self.error = Some(UiError::new(Action::FetchLists, &err));
                None
            }
        }
    }

    /// Mark `list_id` selected and issue a ticket for its tasks.
    pub fn begin_select(&mut self, list_id: &str) -> TaskRequest {
        self.selected_list_id = Some(list_id.to_owned());
        self.latest_request += 1;
        TaskRequest { list_id: list_id.to_owned(), seq: self.latest_request }
    }

    /// Store a task fetch result. Returns `false` if the ticket is stale and
    /// the result was discarded. An accepted success clears any earlier
    /// error.
    pub fn finish_tasks(&mut self, request: &TaskRequest, result: Result<Vec<Task>, ApiError>) -> bool {
        if request.seq != self.latest_request {
            tracing::debug!(list_id = %request.list_id, "discarding stale task response");
            return false;
        }
        match result {
            Ok(tasks) => {
                self.error = None;
                self.tasks = tasks;
            }
            Err(err) => self.error = Some(UiError::new(Action::FetchTasks, &err)),
        }
        true
    }

    pub fn set_filter(&mut self, filter: DisplayFilter) {
        self.filter = filter;
    }

    /// Tasks of the selected list that pass the current filter.
    pub fn visible_tasks(&self) -> impl Iterator<Item = &Task> {
        filter_tasks(&self.tasks, self.filter)
    }

    #[must_use]
    pub fn is_selected(&self, list_id: &str) -> bool {
        self.selected_list_id.as_deref() == Some(list_id)
    }

    #[must_use]
    pub fn selected_list(&self) -> Option<&List> {
        let id = self.selected_list_id.as_deref()?;
        self.lists.iter().find(|list| list.id == id)
    }

    /// Fetch lists, then the first list's tasks.
    pub async fn load<A: TaskApi + ?Sized>(&mut self, api: &A) {
        let lists = api.lists().await;
        if let Some(request) = self.apply_lists(lists) {
            let tasks = api.tasks(&request.list_id).await;
            self.finish_tasks(&request, tasks);
        }
    }

    /// Fetch lists, then the tasks of `list_id` only. The first list's tasks
    /// are never requested.
    pub async fn load_list<A: TaskApi + ?Sized>(&mut self, api: &A, list_id: &str) {
        let lists = api.lists().await;
        self.apply_lists(lists);
        if self.error.is_none() {
            self.select_list(api, list_id).await;
        }
    }

    /// Switch to `list_id` and fetch its tasks.
    pub async fn select_list<A: TaskApi + ?Sized>(&mut self, api: &A, list_id: &str) {
        let request = self.begin_select(list_id);
        let tasks = api.tasks(&request.list_id).await;
        self.finish_tasks(&request, tasks);
    }
}

// =============================================================================
// TASK SUMMARY
// =============================================================================

/// Display strings for one task row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskSummary {
    pub title: String,
    pub status: &'static str,
    pub limit: String,
    pub remaining: String,
    pub route: Route,
}

impl TaskSummary {
    #[must_use]
    pub fn from_task(list_id: &str, task: &Task, now: DateTime<Utc>) -> Self {
        Self {
            title: task.title.clone(),
            status: if task.done { DisplayFilter::Done.label() } else { DisplayFilter::Todo.label() },
            limit: format!("期限: {}", task.limit.as_deref().unwrap_or_default()),
            remaining: format!("残り日時: {}", remaining_label(task.limit.as_deref(), now)),
            route: Route::EditTask { list_id: list_id.to_owned(), task_id: task.id.clone() },
        }
    }
}

#[cfg(test)]
#[path = "home_test.rs"]
mod tests;
