//! Top bar with the sign-out button.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use taskdeck::Session;
use taskdeck::state::auth::sign_out;

use crate::net::api::GlooApi;
use crate::util::guard::go;

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let api = expect_context::<GlooApi>();
    let navigate = use_navigate();

    let on_sign_out = move |_| {
        let route = session.try_update(|s| sign_out(s, api.tokens()));
        if let Some(route) = route {
            go(&navigate, &route);
        }
    };

    view! {
        <header class="header">
            <h1 class="header__title">"Todoアプリ"</h1>
            <button class="header__sign-out" on:click=on_sign_out>
                "サインアウト"
            </button>
        </header>
    }
}
