//! Wire model for lists, tasks and auth payloads.
//!
//! Field names match the remote API exactly. The deadline travels as `limit`
//! (RFC 3339 with an explicit offset); `null`, a missing field and `""` all
//! decode to "no deadline".

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// LISTS
// =============================================================================

/// A named container of tasks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: String,
    pub title: String,
}

/// Body for `POST /lists` and `PUT /lists/:id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPayload {
    pub title: String,
}

// =============================================================================
// TASKS
// =============================================================================

/// A task as returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub detail: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<String>,
}

/// Full-replace body for `POST /lists/:id/tasks` and `PUT .../tasks/:id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPayload {
    pub title: String,
    pub detail: String,
    pub done: bool,
    /// Always sent; `null` clears a stored deadline.
    pub limit: Option<String>,
}

impl From<&Task> for TaskPayload {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            detail: task.detail.clone(),
            done: task.done,
            limit: task.limit.clone(),
        }
    }
}

/// Wire shape of `GET /lists/:id/tasks`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TasksEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    pub tasks: Vec<Task>,
}

// =============================================================================
// AUTH
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Bearer token returned by `/signin` and `/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    pub token: String,
}

// =============================================================================
// DISPLAY FILTER
// =============================================================================

/// Which half of a list's tasks the home page shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFilter {
    #[default]
    Todo,
    Done,
}

impl DisplayFilter {
    /// Options in display order; the first is the default.
    pub const ALL: [Self; 2] = [Self::Todo, Self::Done];

    #[must_use]
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::Todo => !task.done,
            Self::Done => task.done,
        }
    }

    /// Value used by the `<select>` control.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Done => "done",
        }
    }

    /// Parse a `<select>` value. Anything other than `"done"` shows todo.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        if value == "done" { Self::Done } else { Self::Todo }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Todo => "未完了",
            Self::Done => "完了",
        }
    }
}

/// Tasks in `tasks` that `filter` accepts, in list order.
pub fn filter_tasks(tasks: &[Task], filter: DisplayFilter) -> impl Iterator<Item = &Task> {
    tasks.iter().filter(move |task| filter.matches(task))
}

// =============================================================================
// SERDE HELPERS
// =============================================================================

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|value| !value.trim().is_empty()))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
