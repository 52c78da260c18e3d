//! Edit-task page: pre-populated form with update and delete.

use chrono::{Local, Utc};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use taskdeck::state::task_form::EditTaskState;
use taskdeck::{DisplayFilter, Route, Session, TaskApi};

use crate::components::error_banner::ErrorBanner;
use crate::net::api::GlooApi;
use crate::util::guard::{go, install_route_guard};

#[component]
pub fn EditTaskPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let api = expect_context::<GlooApi>();
    let navigate = use_navigate();
    let params = use_params_map();

    let list_id = params.read_untracked().get("list_id").unwrap_or_default();
    let task_id = params.read_untracked().get("task_id").unwrap_or_default();
    install_route_guard(
        session,
        Route::EditTask { list_id: list_id.clone(), task_id: task_id.clone() },
        navigate.clone(),
    );

    let page = RwSignal::new(EditTaskState::new(&list_id, &task_id));
    let busy = RwSignal::new(false);

    {
        let api = api.clone();
        Effect::new(move || {
            if !session.get_untracked().is_signed_in() {
                return;
            }
            let api = api.clone();
            let (list_id, task_id) = page.with_untracked(|p| (p.list_id.clone(), p.task_id.clone()));
            leptos::task::spawn_local(async move {
                let task = api.task(&list_id, &task_id).await;
                page.update(|p| p.apply_task(task));
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
            let (list_id, task_id, payload) =
                page.with(|p| (p.list_id.clone(), p.task_id.clone(), p.form.payload()));
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = api.update_task(&list_id, &task_id, &payload).await;
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
        let (list_id, task_id) = page.with(|p| (p.list_id.clone(), p.task_id.clone()));
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = api.delete_task(&list_id, &task_id).await;
            let outcome = page.try_update(|p| p.finish_delete(result));
            busy.set(false);
            if let Some(Ok(route)) = outcome {
                go(&navigate, &route);
            }
        });
    };

    let on_status = move |ev: leptos::ev::Event| {
        page.update(|p| p.form.set_status_value(&event_target_value(&ev)));
    };

    view! {
        <div class="task-form-page">
            <h2>"タスク編集"</h2>
            <ErrorBanner error=Signal::derive(move || page.with(|p| p.error.clone()))/>
            <form class="task-form" on:submit=on_submit>
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
                <div class="task-form__status">
                    {DisplayFilter::ALL
                        .into_iter()
                        .map(|status| {
                            let done = status == DisplayFilter::Done;
                            view! {
                                <label class="task-form__status-option">
                                    <input
                                        type="radio"
                                        name="status"
                                        value=status.as_str()
                                        prop:checked=move || page.with(|p| p.form.done == done)
                                        on:change=on_status
                                    />
                                    {status.label()}
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
                <button type="submit" class="task-form__button" disabled=move || busy.get()>
                    "更新"
                </button>
            </form>
            <button class="task-form__delete" on:click=on_delete disabled=move || busy.get()>
                "削除"
            </button>
            <a class="task-form-page__back" href=Route::Home.path()>"戻る"</a>
        </div>
    }
}
