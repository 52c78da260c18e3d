//! Horizontal list selector on the home page.

use leptos::prelude::*;
use taskdeck::List;
use taskdeck::state::home::HomeState;

/// One tab per list. Clicking a tab or pressing Enter on it calls
/// `on_select` with the list id; the selected tab carries `list-tab--active`.
#[component]
pub fn ListTabs(home: RwSignal<HomeState>, on_select: Callback<String>) -> impl IntoView {
    view! {
        <ul class="list-tabs">
            <For
                each=move || home.with(|h| h.lists.clone())
                key=|list| list.id.clone()
                children=move |list: List| {
                    let id = list.id.clone();
                    let selected = {
                        let id = id.clone();
                        move || home.with(|h| h.is_selected(&id))
                    };
                    let click_id = id.clone();
                    let key_id = id;
                    view! {
                        <li
                            class="list-tab"
                            class:list-tab--active=selected
                            tabindex="0"
                            on:click=move |_| on_select.run(click_id.clone())
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    on_select.run(key_id.clone());
                                }
                            }
                        >
                            {list.title}
                        </li>
                    }
                }
            />
        </ul>
    }
}
