use super::*;
use crate::state::test_helpers::{dummy_page, seed_page, test_app_state};
use widgets::{QuickLinksProps, WidgetProps};

#[tokio::test]
async fn list_pages_is_ordered_by_slug() {
    let state = test_app_state();
    seed_page(&state, dummy_page("zebra")).await;
    seed_page(&state, dummy_page("apple")).await;
    seed_page(&state, dummy_page("mango")).await;

    let slugs: Vec<String> = list_pages(&state).await.into_iter().map(|p| p.slug).collect();
    assert_eq!(slugs, vec!["apple", "mango", "zebra"]);
}

#[tokio::test]
async fn get_page_unknown_slug_is_not_found() {
    let state = test_app_state();
    let err = get_page(&state, "nope").await.unwrap_err();
    assert!(matches!(err, PageError::NotFound(slug) if slug == "nope"));
}

#[tokio::test]
async fn update_replaces_widgets_and_bumps_version() {
    let state = test_app_state();
    seed_page(&state, dummy_page("home")).await;

    let widgets = vec![Widget::new(WidgetProps::QuickLinks(QuickLinksProps {
        title: None,
        links: Vec::new(),
    }))];
    let updated = update_widgets(&state, "home", widgets, 1).await.unwrap();

    assert_eq!(updated.version, 2);
    assert_eq!(updated.widgets.len(), 1);
    assert!(matches!(updated.widgets[0].props, WidgetProps::QuickLinks(_)));

    let stored = get_page(&state, "home").await.unwrap();
    assert_eq!(stored.version, 2);
}

#[tokio::test]
async fn stale_version_is_rejected() {
    let state = test_app_state();
    let mut page = dummy_page("home");
    page.version = 5;
    seed_page(&state, page).await;

    let err = update_widgets(&state, "home", Vec::new(), 4).await.unwrap_err();
    assert!(matches!(err, PageError::StaleUpdate { incoming: 4, current: 5 }));

    // Rejected updates leave the page untouched.
    let stored = get_page(&state, "home").await.unwrap();
    assert_eq!(stored.version, 5);
    assert_eq!(stored.widgets.len(), 1);
}

#[tokio::test]
async fn equal_version_wins() {
    let state = test_app_state();
    let mut page = dummy_page("home");
    page.version = 3;
    seed_page(&state, page).await;

    let updated = update_widgets(&state, "home", Vec::new(), 3).await.unwrap();
    assert_eq!(updated.version, 4);
    assert!(updated.widgets.is_empty());
}

#[tokio::test]
async fn newer_incoming_version_cannot_jump_the_stored_counter() {
    let state = test_app_state();
    seed_page(&state, dummy_page("home")).await;

    // The bump is always current + 1, even for i64::MAX input.
    let updated = update_widgets(&state, "home", Vec::new(), i64::MAX).await.unwrap();
    assert_eq!(updated.version, 2);
}

#[test]
fn error_codes_are_stable() {
    use schema::ErrorCode;

    assert_eq!(PageError::NotFound("x".to_owned()).error_code(), "E_PAGE_NOT_FOUND");
    assert_eq!(
        PageError::StaleUpdate { incoming: 1, current: 2 }.error_code(),
        "E_STALE_UPDATE"
    );
}
