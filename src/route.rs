//! Client-side routes and the sign-in guard.

use std::fmt;

use crate::session::Session;

/// Every page the client can show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    SignIn,
    SignUp,
    Home,
    NewTask,
    EditTask { list_id: String, task_id: String },
    NewList,
    EditList { list_id: String },
}

impl Route {
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::SignIn => "/signin".to_owned(),
            Self::SignUp => "/signup".to_owned(),
            Self::Home => "/".to_owned(),
            Self::NewTask => "/task/new".to_owned(),
            Self::EditTask { list_id, task_id } => format!("/lists/{list_id}/tasks/{task_id}"),
            Self::NewList => "/list/new".to_owned(),
            Self::EditList { list_id } => format!("/lists/{list_id}/edit"),
        }
    }

    /// Match a location path. Trailing slashes are ignored.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Some(Self::Home),
            ["signin"] => Some(Self::SignIn),
            ["signup"] => Some(Self::SignUp),
            ["task", "new"] => Some(Self::NewTask),
            ["list", "new"] => Some(Self::NewList),
            ["lists", list_id, "edit"] => Some(Self::EditList { list_id: (*list_id).to_owned() }),
            ["lists", list_id, "tasks", task_id] => {
                Some(Self::EditTask { list_id: (*list_id).to_owned(), task_id: (*task_id).to_owned() })
            }
            _ => None,
        }
    }

    /// Routes reachable without a session.
    #[must_use]
    pub fn is_public(&self) -> bool {
        matches!(self, Self::SignIn | Self::SignUp)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Where a page should send the user on mount, if anywhere.
///
/// Signed-in users are bounced off the auth pages, signed-out users are sent
/// to sign-in. The result is never `current` itself, so a page that already
/// is the target does not redirect to itself.
#[must_use]
pub fn guard_redirect(current: &Route, session: &Session) -> Option<Route> {
    let target = match (session.is_signed_in(), current.is_public()) {
        (true, true) => Route::Home,
        (false, false) => Route::SignIn,
        _ => return None,
    };
    (target != *current).then_some(target)
}

#[cfg(test)]
#[path = "route_test.rs"]
mod tests;
