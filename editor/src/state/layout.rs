//! Layout shell state machine.
//!
//! DESIGN
//! ======
//! One `LayoutState` owned by the shell, mutated only through the fixed
//! action vocabulary below. `reduce` is a pure, total function over
//! state x action — no action is ever rejected. Descendant components get a
//! read/dispatch handle via context; they never mutate fields directly.
//!
//! Expansion is a set (no accordion exclusivity); active selection is
//! exclusive and only ever points at a leaf item.

use std::collections::HashSet;

use leptos::prelude::*;

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

/// Open/expanded UI regions of the admin layout shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutState {
    pub sidebar_open: bool,
    pub user_menu_open: bool,
    /// Ids of menu branches currently expanded. Independent toggles.
    pub expanded: HashSet<String>,
    /// Id of the active (selected) leaf item, if any.
    pub active: Option<String>,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self { sidebar_open: true, user_menu_open: false, expanded: HashSet::new(), active: None }
    }
}

/// The complete action vocabulary of the layout shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutAction {
    ToggleSidebar,
    SetSidebar(bool),
    ToggleUserMenu,
    SetUserMenu(bool),
    ToggleMenuItem(String),
    SetActiveItem(String),
}

/// Apply one action. Pure: same state + action always yields the same result.
#[must_use]
pub fn reduce(state: &LayoutState, action: &LayoutAction) -> LayoutState {
    let mut next = state.clone();
    match action {
        LayoutAction::ToggleSidebar => next.sidebar_open = !next.sidebar_open,
        LayoutAction::SetSidebar(open) => next.sidebar_open = *open,
        LayoutAction::ToggleUserMenu => next.user_menu_open = !next.user_menu_open,
        LayoutAction::SetUserMenu(open) => next.user_menu_open = *open,
        LayoutAction::ToggleMenuItem(id) => {
            if !next.expanded.remove(id) {
                next.expanded.insert(id.clone());
            }
        }
        LayoutAction::SetActiveItem(id) => next.active = Some(id.clone()),
    }
    next
}

/// Apply an action to the shared layout signal.
pub fn dispatch(layout: RwSignal<LayoutState>, action: &LayoutAction) {
    layout.update(|state| *state = reduce(state, action));
}
