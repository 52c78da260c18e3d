use super::*;
use crate::test_support::{MockApi, task};

#[tokio::test]
async fn new_list_is_created_with_trimmed_title() {
    let api = MockApi::new();
    let mut page = NewListState { title: "  groceries ".into(), ..NewListState::default() };

    assert_eq!(page.submit(&api).await.unwrap(), Route::Home);

    let lists = api.stored_lists();
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0].title, "groceries");
}

#[tokio::test]
async fn new_list_failure_sets_error() {
    let api = MockApi::new();
    api.fail("create_list");
    let mut page = NewListState::default();

    let err = page.submit(&api).await.unwrap_err();
    assert!(err.to_string().starts_with("リストの作成に失敗しました。"));
    assert_eq!(page.error, Some(err));
}

#[tokio::test]
async fn edit_list_loads_and_renames() {
    let api = MockApi::new().with_list("l1", "inbox", Vec::new());
    let mut page = EditListState::new("l1");

    page.load(&api).await;
    assert_eq!(page.title, "inbox");

    page.title = "today".into();
    assert_eq!(page.submit(&api).await.unwrap(), Route::Home);
    assert_eq!(api.stored_lists()[0].title, "today");
}

#[tokio::test]
async fn edit_list_delete_removes_list_and_tasks() {
    let api = MockApi::new()
        .with_list("l1", "inbox", vec![task("a", "read", false)])
        .with_list("l2", "later", Vec::new());
    let mut page = EditListState::new("l1");

    assert_eq!(page.delete(&api).await.unwrap(), Route::Home);

    assert_eq!(api.stored_lists().len(), 1);
    assert!(api.stored_tasks("l1").is_empty());
}

#[tokio::test]
async fn edit_list_missing_list_reports_fetch_error() {
    let api = MockApi::new();
    let mut page = EditListState::new("ghost");

    page.load(&api).await;

    assert_eq!(page.error.map(|e| e.action), Some(Action::FetchList));
}
