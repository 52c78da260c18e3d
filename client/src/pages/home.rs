//! Home page: list tabs, the selected list's tasks, and the done/todo filter.

use chrono::Utc;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use taskdeck::state::home::{HomeState, TaskRequest, TaskSummary};
use taskdeck::{DisplayFilter, Route, Session, TaskApi};

use crate::components::error_banner::ErrorBanner;
use crate::components::header::Header;
use crate::components::list_tabs::ListTabs;
use crate::components::task_item::TaskItem;
use crate::net::api::GlooApi;
use crate::util::guard::install_route_guard;

/// Fetch tasks for a ticket and hand them back to the state machine, which
/// drops the answer if a newer selection has been made meanwhile.
async fn fetch_tasks(api: GlooApi, home: RwSignal<HomeState>, request: TaskRequest) {
    let tasks = api.tasks(&request.list_id).await;
    home.update(|h| {
        h.finish_tasks(&request, tasks);
    });
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let api = expect_context::<GlooApi>();
    install_route_guard(session, Route::Home, use_navigate());

    let home = RwSignal::new(HomeState::default());

    // Initial load: lists, then the first list's tasks.
    {
        let api = api.clone();
        Effect::new(move || {
            if !session.get_untracked().is_signed_in() {
                return;
            }
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let lists = api.lists().await;
                if let Some(request) = home.try_update(|h| h.apply_lists(lists)).flatten() {
                    fetch_tasks(api, home, request).await;
                }
            });
        });
    }

    let on_select = Callback::new(move |list_id: String| {
        if let Some(request) = home.try_update(|h| h.begin_select(&list_id)) {
            leptos::task::spawn_local(fetch_tasks(api.clone(), home, request));
        }
    });

    let on_filter = move |ev: leptos::ev::Event| {
        let filter = DisplayFilter::from_value(&event_target_value(&ev));
        home.update(|h| h.set_filter(filter));
    };

    let summaries = move || {
        let now = Utc::now();
        home.with(|h| {
            let list_id = h.selected_list_id.clone().unwrap_or_default();
            h.visible_tasks().map(|task| TaskSummary::from_task(&list_id, task, now)).collect::<Vec<_>>()
        })
    };

    let edit_list_href = move || {
        home.with(|h| h.selected_list_id.clone())
            .map(|list_id| Route::EditList { list_id }.path())
            .unwrap_or_default()
    };

    view! {
        <Header/>
        <div class="home-page">
            <ErrorBanner error=Signal::derive(move || home.with(|h| h.error.clone()))/>

            <div class="home-page__list-header">
                <h2>"リスト一覧"</h2>
                <a class="home-page__link" href=Route::NewList.path()>"リスト新規作成"</a>
                <Show when=move || home.with(|h| h.selected_list_id.is_some())>
                    <a class="home-page__link" href=edit_list_href>"選択中のリストを編集"</a>
                </Show>
            </div>
            <ListTabs home=home on_select=on_select/>

            <div class="home-page__task-header">
                <h2>"タスク一覧"</h2>
                <a class="home-page__link" href=Route::NewTask.path()>"タスク新規作成"</a>
            </div>
            <div class="home-page__filter">
                <select
                    class="home-page__filter-select"
                    prop:value=move || home.with(|h| h.filter.as_str())
                    on:change=on_filter
                >
                    {DisplayFilter::ALL
                        .into_iter()
                        .map(|filter| view! { <option value=filter.as_str()>{filter.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            <ul class="task-list">
                {move || {
                    summaries()
                        .into_iter()
                        .map(|summary| view! { <TaskItem summary=summary/> })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
