use super::*;

#[test]
fn ui_error_joins_prefix_and_message() {
    let err = UiError::new(Action::SignIn, &ApiError::Status { status: 401, body: "unauthorized".into() });
    assert_eq!(err.code, "E_STATUS");
    assert_eq!(err.to_string(), "サインインに失敗しました。API returned status 401: unauthorized");
}

#[test]
fn every_action_has_a_prefix() {
    let actions = [
        Action::SignIn,
        Action::SignUp,
        Action::FetchLists,
        Action::FetchList,
        Action::FetchTasks,
        Action::FetchTask,
        Action::CreateTask,
        Action::UpdateTask,
        Action::DeleteTask,
        Action::CreateList,
        Action::UpdateList,
        Action::DeleteList,
    ];
    for action in actions {
        assert!(action.failure_prefix().ends_with('。'), "{action:?}");
    }
}

#[test]
fn error_codes_are_distinct() {
    let errors = [
        ApiError::MissingToken,
        ApiError::Request("x".into()),
        ApiError::Status { status: 500, body: String::new() },
        ApiError::Decode("x".into()),
        ApiError::Validation("x".into()),
        ApiError::Deadline(DeadlineError::Invalid("x".into())),
        ApiError::Storage("x".into()),
    ];
    for (i, a) in errors.iter().enumerate() {
        for (j, b) in errors.iter().enumerate() {
            if i != j {
                assert_ne!(a.error_code(), b.error_code());
            }
        }
    }
}

#[test]
fn retryable_covers_transport_and_server_errors() {
    assert!(ApiError::Request("timeout".into()).retryable());
    assert!(ApiError::Status { status: 503, body: String::new() }.retryable());
    assert!(ApiError::Status { status: 429, body: String::new() }.retryable());
    assert!(!ApiError::Status { status: 404, body: String::new() }.retryable());
    assert!(!ApiError::MissingToken.retryable());
}

#[test]
fn unauthorized_detection() {
    assert!(ApiError::MissingToken.is_unauthorized());
    assert!(ApiError::Status { status: 401, body: String::new() }.is_unauthorized());
    assert!(!ApiError::Status { status: 403, body: String::new() }.is_unauthorized());
}

#[test]
fn for_action_tags_errors_only() {
    let ok: Result<u8, ApiError> = Ok(3);
    assert_eq!(ok.for_action(Action::FetchLists).unwrap(), 3);

    let failed: Result<u8, ApiError> = Err(ApiError::MissingToken);
    let err = failed.for_action(Action::FetchLists).unwrap_err();
    assert_eq!(err.action, Action::FetchLists);
    assert!(err.to_string().starts_with("リストの取得に失敗しました。"));
}
