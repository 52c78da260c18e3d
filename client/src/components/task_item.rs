//! One row of the home page task list.

use leptos::prelude::*;
use taskdeck::state::home::TaskSummary;

#[component]
pub fn TaskItem(summary: TaskSummary) -> impl IntoView {
    let href = summary.route.path();
    view! {
        <li class="task-item">
            <a class="task-item__link" href=href>
                <p class="task-item__title">{summary.title}</p>
                <p class="task-item__status">{summary.status}</p>
                <p class="task-item__limit">{summary.limit}</p>
                <p class="task-item__remaining">{summary.remaining}</p>
            </a>
        </li>
    }
}
