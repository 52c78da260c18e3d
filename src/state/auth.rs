//! Sign-in, sign-up and sign-out flows.

use crate::api::TaskApi;
use crate::error::{Action, ApiError, ResultExt, UiError};
use crate::model::{AuthToken, Credentials, SignUpRequest};
use crate::route::Route;
use crate::session::{Session, TokenStore};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials { email: self.email.trim().to_owned(), password: self.password.clone() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignUpForm {
    #[must_use]
    pub fn request(&self) -> SignUpRequest {
        SignUpRequest {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
        }
    }
}

/// Finish a sign-in once the auth endpoint has answered.
///
/// On success the token is persisted and the session flips to signed in.
/// On failure the session is left untouched.
///
/// # Errors
///
/// Returns a [`UiError`] for the failed request or a failed token write.
pub fn complete_sign_in(
    session: &mut Session,
    tokens: &dyn TokenStore,
    result: Result<AuthToken, ApiError>,
) -> Result<Route, UiError> {
    complete(Action::SignIn, session, tokens, result)
}

/// Finish a sign-up. Same contract as [`complete_sign_in`].
///
/// # Errors
///
/// Returns a [`UiError`] for the failed request or a failed token write.
pub fn complete_sign_up(
    session: &mut Session,
    tokens: &dyn TokenStore,
    result: Result<AuthToken, ApiError>,
) -> Result<Route, UiError> {
    complete(Action::SignUp, session, tokens, result)
}

fn complete(
    action: Action,
    session: &mut Session,
    tokens: &dyn TokenStore,
    result: Result<AuthToken, ApiError>,
) -> Result<Route, UiError> {
    let AuthToken { token } = result.for_action(action)?;
    tokens.store(&token).for_action(action)?;
    session.sign_in();
    tracing::info!(?action, "signed in");
    Ok(Route::Home)
}

/// # Errors
///
/// Returns a [`UiError`] when the credentials are rejected.
pub async fn sign_in<A: TaskApi + ?Sized>(
    api: &A,
    tokens: &dyn TokenStore,
    session: &mut Session,
    form: &SignInForm,
) -> Result<Route, UiError> {
    let result = api.sign_in(&form.credentials()).await;
    complete_sign_in(session, tokens, result)
}

/// # Errors
///
/// Returns a [`UiError`] when registration fails.
pub async fn sign_up<A: TaskApi + ?Sized>(
    api: &A,
    tokens: &dyn TokenStore,
    session: &mut Session,
    form: &SignUpForm,
) -> Result<Route, UiError> {
    let result = api.sign_up(&form.request()).await;
    complete_sign_up(session, tokens, result)
}

/// Forget the token and mark the session signed out.
///
/// The session is cleared even if the token store fails, so the UI never
/// keeps showing protected pages.
pub fn sign_out(session: &mut Session, tokens: &dyn TokenStore) -> Route {
    if let Err(e) = tokens.clear() {
        tracing::warn!(error = %e, "failed to clear stored token");
    }
    session.sign_out();
    Route::SignIn
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
