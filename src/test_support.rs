//! In-memory [`TaskApi`] used by the state-machine tests.

use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;

use crate::api::TaskApi;
use crate::error::ApiError;
use crate::model::{AuthToken, Credentials, List, ListPayload, SignUpRequest, Task, TaskPayload};

pub const PASSWORD: &str = "secret";
pub const TOKEN: &str = "tok-1";

#[derive(Default)]
struct Inner {
    lists: Vec<List>,
    tasks: BTreeMap<String, Vec<Task>>,
    next_id: u32,
    failing: HashSet<&'static str>,
    calls: Vec<String>,
    last_payload: Option<TaskPayload>,
}

#[derive(Default)]
pub struct MockApi {
    inner: Mutex<Inner>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(self, id: &str, title: &str, tasks: Vec<Task>) -> Self {
        {
            let mut inner = self.inner.lock().expect("mock mutex should lock");
            inner.lists.push(List { id: id.into(), title: title.into() });
            inner.tasks.insert(id.into(), tasks);
        }
        self
    }

    /// Make every call to `op` fail with a 500.
    pub fn fail(&self, op: &'static str) {
        self.inner.lock().expect("mock mutex should lock").failing.insert(op);
    }

    /// Undo [`MockApi::fail`] for `op`.
    pub fn recover(&self, op: &'static str) {
        self.inner.lock().expect("mock mutex should lock").failing.remove(op);
    }

    pub fn calls(&self) -> Vec<String> {
        self.inner.lock().expect("mock mutex should lock").calls.clone()
    }

    pub fn last_payload(&self) -> Option<TaskPayload> {
        self.inner.lock().expect("mock mutex should lock").last_payload.clone()
    }

    pub fn stored_tasks(&self, list_id: &str) -> Vec<Task> {
        let inner = self.inner.lock().expect("mock mutex should lock");
        inner.tasks.get(list_id).cloned().unwrap_or_default()
    }

    pub fn stored_lists(&self) -> Vec<List> {
        self.inner.lock().expect("mock mutex should lock").lists.clone()
    }

    fn enter(&self, op: &'static str, detail: &str) -> Result<std::sync::MutexGuard<'_, Inner>, ApiError> {
        let mut inner = self.inner.lock().expect("mock mutex should lock");
        inner.calls.push(if detail.is_empty() { op.to_owned() } else { format!("{op} {detail}") });
        if inner.failing.contains(op) {
            return Err(ApiError::Status { status: 500, body: format!("{op} exploded") });
        }
        Ok(inner)
    }
}

fn not_found(what: &str) -> ApiError {
    ApiError::Status { status: 404, body: format!("{what} not found") }
}

pub fn task(id: &str, title: &str, done: bool) -> Task {
    Task { id: id.into(), title: title.into(), detail: String::new(), done, limit: None }
}

#[async_trait::async_trait(?Send)]
impl TaskApi for MockApi {
    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthToken, ApiError> {
        let _inner = self.enter("sign_in", &credentials.email)?;
        if credentials.password == PASSWORD {
            Ok(AuthToken { token: TOKEN.into() })
        } else {
            Err(ApiError::Status { status: 401, body: "bad credentials".into() })
        }
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<AuthToken, ApiError> {
        let _inner = self.enter("sign_up", &request.email)?;
        Ok(AuthToken { token: format!("new-{}", request.name) })
    }

    async fn lists(&self) -> Result<Vec<List>, ApiError> {
        Ok(self.enter("lists", "")?.lists.clone())
    }

    async fn list(&self, list_id: &str) -> Result<List, ApiError> {
        let inner = self.enter("list", list_id)?;
        inner.lists.iter().find(|l| l.id == list_id).cloned().ok_or_else(|| not_found("list"))
    }

    async fn create_list(&self, payload: &ListPayload) -> Result<(), ApiError> {
        let mut inner = self.enter("create_list", &payload.title)?;
        inner.next_id += 1;
        let id = format!("new-list-{}", inner.next_id);
        inner.lists.push(List { id: id.clone(), title: payload.title.clone() });
        inner.tasks.insert(id, Vec::new());
        Ok(())
    }

    async fn update_list(&self, list_id: &str, payload: &ListPayload) -> Result<(), ApiError> {
        let mut inner = self.enter("update_list", list_id)?;
        let list = inner.lists.iter_mut().find(|l| l.id == list_id).ok_or_else(|| not_found("list"))?;
        list.title.clone_from(&payload.title);
        Ok(())
    }

    async fn delete_list(&self, list_id: &str) -> Result<(), ApiError> {
        let mut inner = self.enter("delete_list", list_id)?;
        let before = inner.lists.len();
        inner.lists.retain(|l| l.id != list_id);
        if inner.lists.len() == before {
            return Err(not_found("list"));
        }
        inner.tasks.remove(list_id);
        Ok(())
    }

    async fn tasks(&self, list_id: &str) -> Result<Vec<Task>, ApiError> {
        let inner = self.enter("tasks", list_id)?;
        inner.tasks.get(list_id).cloned().ok_or_else(|| not_found("list"))
    }

    async fn task(&self, list_id: &str, task_id: &str) -> Result<Task, ApiError> {
        let inner = self.enter("task", task_id)?;
        inner
            .tasks
            .get(list_id)
            .and_then(|tasks| tasks.iter().find(|t| t.id == task_id))
            .cloned()
            .ok_or_else(|| not_found("task"))
    }

    async fn create_task(&self, list_id: &str, payload: &TaskPayload) -> Result<(), ApiError> {
        let mut inner = self.enter("create_task", list_id)?;
        inner.next_id += 1;
        let id = format!("new-task-{}", inner.next_id);
        inner.last_payload = Some(payload.clone());
        let tasks = inner.tasks.get_mut(list_id).ok_or_else(|| not_found("list"))?;
        tasks.push(Task {
            id,
            title: payload.title.clone(),
            detail: payload.detail.clone(),
            done: payload.done,
            limit: payload.limit.clone(),
        });
        Ok(())
    }

    async fn update_task(&self, list_id: &str, task_id: &str, payload: &TaskPayload) -> Result<(), ApiError> {
        let mut inner = self.enter("update_task", task_id)?;
        inner.last_payload = Some(payload.clone());
        let task = inner
            .tasks
            .get_mut(list_id)
            .and_then(|tasks| tasks.iter_mut().find(|t| t.id == task_id))
            .ok_or_else(|| not_found("task"))?;
        task.title.clone_from(&payload.title);
        task.detail.clone_from(&payload.detail);
        task.done = payload.done;
        task.limit.clone_from(&payload.limit);
        Ok(())
    }

    async fn delete_task(&self, list_id: &str, task_id: &str) -> Result<(), ApiError> {
        let mut inner = self.enter("delete_task", task_id)?;
        let tasks = inner.tasks.get_mut(list_id).ok_or_else(|| not_found("list"))?;
        let before = tasks.len();
        tasks.retain(|t| t.id != task_id);
        if tasks.len() == before {
            return Err(not_found("task"));
        }
        Ok(())
    }
}
