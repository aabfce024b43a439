use super::*;
use crate::state::test_helpers::{dummy_page, seed_page, test_app_state};

#[tokio::test]
async fn list_returns_paginated_summaries() {
    let state = test_app_state();
    for slug in ["a", "b", "c"] {
        seed_page(&state, dummy_page(slug)).await;
    }

    let Json(listed) = list_pages(
        State(state),
        Query(ListParams { page: 1, limit: 2 }),
    )
    .await;

    assert!(listed.success);
    assert_eq!(listed.data.len(), 2);
    assert_eq!(listed.data[0].slug, "a");
    assert_eq!(listed.data[0].widget_count, 1);
    assert_eq!(listed.meta.total, 3);
    assert_eq!(listed.meta.total_pages, 2);
}

#[tokio::test]
async fn get_wraps_page_in_success_envelope() {
    let state = test_app_state();
    seed_page(&state, dummy_page("home")).await;

    let Json(body) = get_page(State(state), Path("home".to_owned())).await.unwrap();
    assert!(body.success);
    assert_eq!(body.data.slug, "home");
}

#[tokio::test]
async fn get_unknown_slug_is_404_with_error_envelope() {
    let state = test_app_state();

    let (status, Json(body)) =
        get_page(State(state), Path("missing".to_owned())).await.unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(!body.success);
    assert_eq!(body.error.code, "E_PAGE_NOT_FOUND");
}

#[tokio::test]
async fn put_with_stale_version_is_409() {
    let state = test_app_state();
    let mut page = dummy_page("home");
    page.version = 7;
    seed_page(&state, page).await;

    let (status, Json(body)) = update_page(
        State(state),
        Path("home".to_owned()),
        Json(UpdatePageBody { widgets: Vec::new(), version: 2 }),
    )
    .await
    .unwrap_err();

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body.error.code, "E_STALE_UPDATE");
}

#[tokio::test]
async fn put_replaces_widgets() {
    let state = test_app_state();
    seed_page(&state, dummy_page("home")).await;

    let Json(body) = update_page(
        State(state.clone()),
        Path("home".to_owned()),
        Json(UpdatePageBody { widgets: Vec::new(), version: 1 }),
    )
    .await
    .unwrap();

    assert!(body.data.widgets.is_empty());
    assert_eq!(body.data.version, 2);
}

#[test]
fn list_params_default_sensibly() {
    let params: ListParams = serde_json::from_str("{}").unwrap();
    assert_eq!(params.page, 1);
    assert_eq!(params.limit, DEFAULT_LIMIT);
}
