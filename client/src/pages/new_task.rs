//! New-task page: pick a list, fill in the form, POST it.

use chrono::{Local, Utc};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use taskdeck::state::task_form::NewTaskState;
use taskdeck::{Route, Session, TaskApi};

use crate::components::error_banner::ErrorBanner;
use crate::net::api::GlooApi;
use crate::util::guard::{go, install_route_guard};

#[component]
pub fn NewTaskPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let api = expect_context::<GlooApi>();
    let navigate = use_navigate();
    install_route_guard(session, Route::NewTask, navigate.clone());

    let page = RwSignal::new(NewTaskState::default());
    let busy = RwSignal::new(false);

    {
        let api = api.clone();
        Effect::new(move || {
            if !session.get_untracked().is_signed_in() {
                return;
            }
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let lists = api.lists().await;
                page.update(|p| p.apply_lists(lists));
            });
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(Ok(list_id)) = page.try_update(NewTaskState::target_list) else {
            return;
        };
        busy.set(true);
        let payload = page.with(|p| p.form.payload());
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = api.create_task(&list_id, &payload).await;
            let outcome = page.try_update(|p| p.finish_submit(result));
            busy.set(false);
            if let Some(Ok(route)) = outcome {
                go(&navigate, &route);
            }
        });
    };

    view! {
        <div class="task-form-page">
            <h2>"タスク新規作成"</h2>
            <ErrorBanner error=Signal::derive(move || page.with(|p| p.error.clone()))/>
            <form class="task-form" on:submit=on_submit>
                <label class="task-form__label">
                    "リスト"
                    <select
                        class="task-form__select"
                        prop:value=move || page.with(|p| p.selected_list_id.clone().unwrap_or_default())
                        on:change=move |ev| page.update(|p| p.select_list(&event_target_value(&ev)))
                    >
                        {move || {
                            page.with(|p| p.lists.clone())
                                .into_iter()
                                .map(|list| view! { <option value=list.id>{list.title}</option> })
                                .collect_view()
                        }}
                    </select>
                </label>
                <label class="task-form__label">
                    "タイトル"
                    <input
                        type="text"
                        class="task-form__input"
                        prop:value=move || page.with(|p| p.form.title.clone())
                        on:input=move |ev| page.update(|p| p.form.title = event_target_value(&ev))
                    />
                </label>
                <label class="task-form__label">
                    "詳細"
                    <textarea
                        class="task-form__textarea"
                        prop:value=move || page.with(|p| p.form.detail.clone())
                        on:input=move |ev| page.update(|p| p.form.detail = event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="task-form__label">
                    "期限"
                    <input
                        type="datetime-local"
                        class="task-form__input"
                        prop:value=move || page.with(|p| p.form.deadline_input(Local))
                        on:change=move |ev| page.update(|p| p.set_deadline_input(&event_target_value(&ev), Local))
                    />
                </label>
                <p class="task-form__remaining">
                    "残り日時: " {move || page.with(|p| p.form.remaining_label(Utc::now()))}
                </p>
                <button type="submit" class="task-form__button" disabled=move || busy.get()>
                    "作成"
                </button>
            </form>
            <a class="task-form-page__back" href=Route::Home.path()>"戻る"</a>
        </div>
    }
}
