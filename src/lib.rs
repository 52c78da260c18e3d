//! # taskdeck
//!
//! Platform-neutral core of the task-list client. Holds the wire model, the
//! deadline arithmetic, the session store and route guard, and the page state
//! machines shared by the Leptos `client` and the `cli`.
//!
//! DESIGN
//! ======
//! Everything that touches the network goes through [`api::TaskApi`]. The
//! reqwest transport lives behind the `http` feature so the browser build can
//! swap in `gloo-net` without dragging a native HTTP stack into WASM.

pub mod api;
pub mod config;
pub mod deadline;
pub mod error;
pub mod model;
pub mod remaining;
pub mod route;
pub mod session;
pub mod state;

#[cfg(test)]
mod test_support;

pub use api::TaskApi;
pub use error::{Action, ApiError, UiError};
pub use model::{AuthToken, Credentials, DisplayFilter, List, ListPayload, SignUpRequest, Task, TaskPayload};
pub use route::Route;
pub use session::{MemoryTokenStore, Session, TokenStore};
