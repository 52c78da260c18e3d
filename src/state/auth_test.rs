use super::*;
use crate::session::MemoryTokenStore;
use crate::test_support::{MockApi, PASSWORD, TOKEN};

fn form(password: &str) -> SignInForm {
    SignInForm { email: " user@example.test ".into(), password: password.into() }
}

// =============================================================================
// Sign in
// =============================================================================

#[tokio::test]
async fn sign_in_success_stores_token_and_flips_session() {
    let api = MockApi::new();
    let tokens = MemoryTokenStore::default();
    let mut session = Session::default();

    let route = sign_in(&api, &tokens, &mut session, &form(PASSWORD)).await.unwrap();

    assert_eq!(route, Route::Home);
    assert!(session.is_signed_in());
    assert_eq!(tokens.token().as_deref(), Some(TOKEN));
    assert_eq!(api.calls(), ["sign_in user@example.test"]);
}

#[tokio::test]
async fn sign_in_failure_leaves_session_signed_out() {
    let api = MockApi::new();
    let tokens = MemoryTokenStore::default();
    let mut session = Session::default();

    let err = sign_in(&api, &tokens, &mut session, &form("nope")).await.unwrap_err();

    assert!(!session.is_signed_in());
    assert!(tokens.token().is_none());
    assert_eq!(err.action, Action::SignIn);
    let rendered = err.to_string();
    assert!(!rendered.is_empty());
    assert!(rendered.starts_with("サインインに失敗しました。"));
}

#[test]
fn complete_sign_in_on_network_error() {
    let tokens = MemoryTokenStore::default();
    let mut session = Session::default();

    let err = complete_sign_in(&mut session, &tokens, Err(ApiError::Request("connection refused".into())))
        .unwrap_err();

    assert_eq!(err.code, "E_REQUEST");
    assert!(!session.is_signed_in());
}

// =============================================================================
// Sign up / out
// =============================================================================

#[tokio::test]
async fn sign_up_signs_in_with_returned_token() {
    let api = MockApi::new();
    let tokens = MemoryTokenStore::default();
    let mut session = Session::default();
    let form = SignUpForm { name: "ann".into(), email: "ann@example.test".into(), password: "pw".into() };

    let route = sign_up(&api, &tokens, &mut session, &form).await.unwrap();

    assert_eq!(route, Route::Home);
    assert!(session.is_signed_in());
    assert_eq!(tokens.token().as_deref(), Some("new-ann"));
}

#[tokio::test]
async fn sign_up_failure_uses_sign_up_prefix() {
    let api = MockApi::new();
    api.fail("sign_up");
    let tokens = MemoryTokenStore::default();
    let mut session = Session::default();

    let err = sign_up(&api, &tokens, &mut session, &SignUpForm::default()).await.unwrap_err();

    assert_eq!(err.action, Action::SignUp);
    assert!(!session.is_signed_in());
}

#[test]
fn sign_out_clears_token_and_session() {
    let tokens = MemoryTokenStore::with_token(TOKEN);
    let mut session = Session::default();
    session.sign_in();

    assert_eq!(sign_out(&mut session, &tokens), Route::SignIn);
    assert!(!session.is_signed_in());
    assert!(tokens.token().is_none());
}
