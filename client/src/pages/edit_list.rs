//! Edit-list page: rename or delete a list.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use taskdeck::state::list_form::EditListState;
use taskdeck::{Route, Session, TaskApi};

use crate::components::error_banner::ErrorBanner;
use crate::net::api::GlooApi;
use crate::util::guard::{go, install_route_guard};

#[component]
pub fn EditListPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let api = expect_context::<GlooApi>();
    let navigate = use_navigate();
    let params = use_params_map();

    let list_id = params.read_untracked().get("list_id").unwrap_or_default();
    install_route_guard(session, Route::EditList { list_id: list_id.clone() }, navigate.clone());

    let page = RwSignal::new(EditListState::new(&list_id));
    let busy = RwSignal::new(false);

    {
        let api = api.clone();
        Effect::new(move || {
            if !session.get_untracked().is_signed_in() {
                return;
            }
            let api = api.clone();
            let list_id = page.with_untracked(|p| p.list_id.clone());
            leptos::task::spawn_local(async move {
                let list = api.list(&list_id).await;
                page.update(|p| p.apply_list(list));
            });
        });
    }

    let on_submit = {
        let api = api.clone();
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            busy.set(true);
            let (list_id, payload) = page.with(|p| (p.list_id.clone(), p.payload()));
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = api.update_list(&list_id, &payload).await;
                let outcome = page.try_update(|p| p.finish_update(result));
                busy.set(false);
                if let Some(Ok(route)) = outcome {
                    go(&navigate, &route);
                }
            });
        }
    };

    let on_delete = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        let list_id = page.with(|p| p.list_id.clone());
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = api.delete_list(&list_id).await;
            let outcome = page.try_update(|p| p.finish_delete(result));
            busy.set(false);
            if let Some(Ok(route)) = outcome {
                go(&navigate, &route);
            }
        });
    };

    view! {
        <div class="list-form-page">
            <h2>"リスト編集"</h2>
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
                    "更新"
                </button>
            </form>
            <button class="list-form__delete" on:click=on_delete disabled=move || busy.get()>
                "削除"
            </button>
            <a class="list-form-page__back" href=Route::Home.path()>"戻る"</a>
        </div>
    }
}
