//! Top bar with the sidebar toggle and the user menu.

use leptos::prelude::*;

use crate::state::{LayoutAction, LayoutState, dispatch};

/// Header row. The user menu is an overlay: a full-viewport backdrop sits
/// behind the dropdown so any outside click dismisses it.
#[component]
pub fn Header(#[prop(into)] title: String) -> impl IntoView {
    let layout = expect_context::<RwSignal<LayoutState>>();

    let user_menu_open = move || layout.get().user_menu_open;

    view! {
        <header class="header">
            <button
                class="header__sidebar-toggle"
                type="button"
                aria-label="Toggle sidebar"
                on:click=move |_| dispatch(layout, &LayoutAction::ToggleSidebar)
            >
                "☰"
            </button>
            <span class="header__title">{title}</span>
            <div class="header__spacer"></div>
            <div class="header__user">
                <button
                    class="header__user-button"
                    type="button"
                    aria-expanded=move || user_menu_open().to_string()
                    on:click=move |_| dispatch(layout, &LayoutAction::ToggleUserMenu)
                >
                    "Account"
                </button>
                <Show when=user_menu_open>
                    <div
                        class="header__backdrop"
                        on:click=move |_| dispatch(layout, &LayoutAction::SetUserMenu(false))
                    ></div>
                    <div class="header__user-menu">
                        <a class="header__user-menu-item" href="/admin/profile">"Profile"</a>
                        <a class="header__user-menu-item" href="/admin/settings">"Settings"</a>
                        <a class="header__user-menu-item" href="/logout">"Sign out"</a>
                    </div>
                </Show>
            </div>
        </header>
    }
}
