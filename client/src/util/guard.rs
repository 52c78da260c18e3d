//! Shared route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page installs the same guard on mount so auth redirects behave
//! identically across routes.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use taskdeck::route::guard_redirect;
use taskdeck::{Route, Session};

/// Redirect away from `current` whenever the session says it is the wrong
/// page. Re-runs when the session signal changes.
pub fn install_route_guard<F>(session: RwSignal<Session>, current: Route, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = guard_redirect(&current, &session.get()) {
            navigate(&target.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Navigate to a route chosen by a page state machine.
pub fn go<F>(navigate: &F, route: &Route)
where
    F: Fn(&str, NavigateOptions),
{
    navigate(&route.path(), NavigateOptions::default());
}
