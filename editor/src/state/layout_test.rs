use super::*;

#[test]
fn defaults_open_sidebar_closed_user_menu() {
    let state = LayoutState::default();
    assert!(state.sidebar_open);
    assert!(!state.user_menu_open);
    assert!(state.expanded.is_empty());
    assert!(state.active.is_none());
}

#[test]
fn toggle_sidebar_flips_and_set_is_absolute() {
    let state = LayoutState::default();
    let closed = reduce(&state, &LayoutAction::ToggleSidebar);
    assert!(!closed.sidebar_open);

    let still_closed = reduce(&closed, &LayoutAction::SetSidebar(false));
    assert!(!still_closed.sidebar_open);

    let open = reduce(&still_closed, &LayoutAction::SetSidebar(true));
    assert!(open.sidebar_open);
}

#[test]
fn toggle_menu_item_twice_round_trips() {
    let state = LayoutState::default();
    let action = LayoutAction::ToggleMenuItem("pages".to_owned());

    let expanded = reduce(&state, &action);
    assert!(expanded.expanded.contains("pages"));

    let collapsed = reduce(&expanded, &action);
    assert_eq!(collapsed.expanded, state.expanded);
}

#[test]
fn expansion_is_not_exclusive() {
    let state = LayoutState::default();
    let one = reduce(&state, &LayoutAction::ToggleMenuItem("pages".to_owned()));
    let both = reduce(&one, &LayoutAction::ToggleMenuItem("settings".to_owned()));

    assert!(both.expanded.contains("pages"));
    assert!(both.expanded.contains("settings"));
    assert_eq!(both.expanded.len(), 2);
}

#[test]
fn active_selection_is_exclusive() {
    let state = LayoutState::default();
    let first = reduce(&state, &LayoutAction::SetActiveItem("dashboard".to_owned()));
    assert_eq!(first.active.as_deref(), Some("dashboard"));

    let second = reduce(&first, &LayoutAction::SetActiveItem("pages-all".to_owned()));
    assert_eq!(second.active.as_deref(), Some("pages-all"));
}

#[test]
fn user_menu_toggle_and_set() {
    let state = LayoutState::default();
    let open = reduce(&state, &LayoutAction::ToggleUserMenu);
    assert!(open.user_menu_open);

    let dismissed = reduce(&open, &LayoutAction::SetUserMenu(false));
    assert!(!dismissed.user_menu_open);
}

#[test]
fn reduce_never_touches_unrelated_fields() {
    let mut state = LayoutState::default();
    state.expanded.insert("pages".to_owned());
    state.active = Some("dashboard".to_owned());

    let next = reduce(&state, &LayoutAction::ToggleSidebar);
    assert_eq!(next.expanded, state.expanded);
    assert_eq!(next.active, state.active);
    assert_eq!(next.user_menu_open, state.user_menu_open);
}

#[test]
fn reduce_is_total_and_deterministic() {
    let state = LayoutState::default();
    let actions = [
        LayoutAction::ToggleSidebar,
        LayoutAction::SetSidebar(true),
        LayoutAction::ToggleUserMenu,
        LayoutAction::SetUserMenu(true),
        LayoutAction::ToggleMenuItem("x".to_owned()),
        LayoutAction::SetActiveItem("y".to_owned()),
    ];
    for action in &actions {
        assert_eq!(reduce(&state, action), reduce(&state, action));
    }
}
