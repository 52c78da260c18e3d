//! Sign-in page: email + password against `/signin`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use taskdeck::state::auth::{SignInForm, complete_sign_in};
use taskdeck::{Route, Session, TaskApi, UiError};

use crate::components::error_banner::ErrorBanner;
use crate::net::api::GlooApi;
use crate::util::guard::{go, install_route_guard};

#[component]
pub fn SignInPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let api = expect_context::<GlooApi>();
    let navigate = use_navigate();
    install_route_guard(session, Route::SignIn, navigate.clone());

    let form = RwSignal::new(SignInForm::default());
    let error = RwSignal::new(None::<UiError>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        let credentials = form.with(SignInForm::credentials);
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = api.sign_in(&credentials).await;
            let outcome = session.try_update(|s| complete_sign_in(s, api.tokens(), result));
            busy.set(false);
            match outcome {
                Some(Ok(route)) => {
                    error.set(None);
                    go(&navigate, &route);
                }
                Some(Err(e)) => error.set(Some(e)),
                None => {}
            }
        });
    };

    view! {
        <div class="auth-page">
            <h2>"サインイン"</h2>
            <ErrorBanner error=error/>
            <form class="auth-form" on:submit=on_submit>
                <label class="auth-form__label">
                    "メールアドレス"
                    <input
                        type="email"
                        class="auth-form__input"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "パスワード"
                    <input
                        type="password"
                        class="auth-form__input"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                </label>
                <button type="submit" class="auth-form__button" disabled=move || busy.get()>
                    "サインイン"
                </button>
            </form>
            <a class="auth-page__link" href=Route::SignUp.path()>
                "新規作成"
            </a>
        </div>
    }
}
