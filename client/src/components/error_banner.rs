//! Inline error message shared by every page.

use leptos::prelude::*;
use taskdeck::UiError;

/// Renders the page's current error, if any. The text is always the
/// [`UiError`] presenter's output so every page words failures the same way.
#[component]
pub fn ErrorBanner(#[prop(into)] error: Signal<Option<UiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some)>
            <p class="error-message" role="alert">
                {move || error.with(|e| e.as_ref().map(ToString::to_string).unwrap_or_default())}
            </p>
        </Show>
    }
}
