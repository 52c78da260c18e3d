//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};
use taskdeck::Session;
use taskdeck::config::ClientConfig;

use crate::net::api::GlooApi;
use crate::pages::{
    edit_list::EditListPage, edit_task::EditTaskPage, home::HomePage, new_list::NewListPage, new_task::NewTaskPage,
    sign_in::SignInPage, sign_up::SignUpPage,
};
use crate::util::cookie::CookieTokenStore;

/// Base URL baked in at build time; falls back to the core default.
fn api_config() -> ClientConfig {
    match option_env!("TASKDECK_API_URL") {
        Some(url) => ClientConfig::default().with_api_url(url),
        None => ClientConfig::default(),
    }
}

/// Root application component.
///
/// Provides the session signal and the API handle, and sets up client-side
/// routing. The session starts signed out; it flips only on a successful
/// sign-in or sign-up.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::default());
    provide_context(session);
    provide_context(GlooApi::new(api_config(), Arc::new(CookieTokenStore)));

    view! {
        <Title text="taskdeck"/>

        <Router>
            <main class="app">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("signin") view=SignInPage/>
                    <Route path=StaticSegment("signup") view=SignUpPage/>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("task"), StaticSegment("new")) view=NewTaskPage/>
                    <Route path=(StaticSegment("list"), StaticSegment("new")) view=NewListPage/>
                    <Route
                        path=(StaticSegment("lists"), ParamSegment("list_id"), StaticSegment("tasks"), ParamSegment("task_id"))
                        view=EditTaskPage
                    />
                    <Route path=(StaticSegment("lists"), ParamSegment("list_id"), StaticSegment("edit")) view=EditListPage/>
                </Routes>
            </main>
        </Router>
    }
}
