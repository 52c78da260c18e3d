//! New-list page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use taskdeck::state::list_form::NewListState;
use taskdeck::{Route, Session, TaskApi};

use crate::components::error_banner::ErrorBanner;
use crate::net::api::GlooApi;
use crate::util::guard::{go, install_route_guard};

#[component]
pub fn NewListPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let api = expect_context::<GlooApi>();
    let navigate = use_navigate();
    install_route_guard(session, Route::NewList, navigate.clone());

    let page = RwSignal::new(NewListState::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        let payload = page.with(NewListState::payload);
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = api.create_list(&payload).await;
            let outcome = page.try_update(|p| p.finish_submit(result));
            busy.set(false);
            if let Some(Ok(route)) = outcome {
                go(&navigate, &route);
            }
        });
    };

    view! {
        <div class="list-form-page">
            <h2>"リスト新規作成"</h2>
            <ErrorBanner error=Signal::derive(move || page.with(|p| p.error.clone()))/>
            <form class="list-form" on:submit=on_submit>
                <label class="list-form__label">
                    "リスト名"
                    <input
                        type="text"
                        class="list-form__input"
                        prop:value=move || page.with(|p| p.title.clone())
                        on:input=move |ev| page.update(|p| p.title = event_target_value(&ev))
                    />
                </label>
                <button type="submit" class="list-form__button" disabled=move || busy.get()>
                    "作成"
                </button>
            </form>
            <a class="list-form-page__back" href=Route::Home.path()>"戻る"</a>
        </div>
    }
}
