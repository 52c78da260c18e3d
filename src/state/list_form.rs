//! New-list and edit-list forms.

use crate::api::TaskApi;
use crate::error::{Action, ApiError, UiError};
use crate::model::{List, ListPayload};
use crate::route::Route;

use super::settle;

#[derive(Clone, Debug, Default)]
pub struct NewListState {
    pub title: String,
    pub error: Option<UiError>,
}

impl NewListState {
    #[must_use]
    pub fn payload(&self) -> ListPayload {
        ListPayload { title: self.title.trim().to_owned() }
    }

    /// # Errors
    ///
    /// Returns the [`UiError`] now stored on `self.error`.
    pub fn finish_submit(&mut self, result: Result<(), ApiError>) -> Result<Route, UiError> {
        settle(&mut self.error, Action::CreateList, result)
    }

    /// # Errors
    ///
    /// Returns a [`UiError`] when creation fails.
    pub async fn submit<A: TaskApi + ?Sized>(&mut self, api: &A) -> Result<Route, UiError> {
        let result = api.create_list(&self.payload()).await;
        self.finish_submit(result)
    }
}

#[derive(Clone, Debug, Default)]
pub struct EditListState {
    pub list_id: String,
    pub title: String,
    pub error: Option<UiError>,
}

impl EditListState {
    #[must_use]
    pub fn new(list_id: &str) -> Self {
        Self { list_id: list_id.to_owned(), ..Self::default() }
    }

    pub fn apply_list(&mut self, result: Result<List, ApiError>) {
        match result {
            Ok(list) => self.title = list.title,
            Err(err) => self.error = Some(UiError::new(Action::FetchList, &err)),
        }
    }

    #[must_use]
    pub fn payload(&self) -> ListPayload {
        ListPayload { title: self.title.trim().to_owned() }
    }

    /// # Errors
    ///
    /// Returns the [`UiError`] now stored on `self.error`.
    pub fn finish_update(&mut self, result: Result<(), ApiError>) -> Result<Route, UiError> {
        settle(&mut self.error, Action::UpdateList, result)
    }

    /// # Errors
    ///
    /// Returns the [`UiError`] now stored on `self.error`.
    pub fn finish_delete(&mut self, result: Result<(), ApiError>) -> Result<Route, UiError> {
        settle(&mut self.error, Action::DeleteList, result)
    }

    pub async fn load<A: TaskApi + ?Sized>(&mut self, api: &A) {
        let list = api.list(&self.list_id).await;
        self.apply_list(list);
    }

    /// # Errors
    ///
    /// Returns a [`UiError`] when the rename is rejected.
    pub async fn submit<A: TaskApi + ?Sized>(&mut self, api: &A) -> Result<Route, UiError> {
        let result = api.update_list(&self.list_id, &self.payload()).await;
        self.finish_update(result)
    }

    /// # Errors
    ///
    /// Returns a [`UiError`] when the delete is rejected.
    pub async fn delete<A: TaskApi + ?Sized>(&mut self, api: &A) -> Result<Route, UiError> {
        let result = api.delete_list(&self.list_id).await;
        self.finish_delete(result)
    }
}

#[cfg(test)]
#[path = "list_form_test.rs"]
mod tests;
