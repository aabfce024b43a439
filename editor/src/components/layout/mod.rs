//! Admin layout shell: header, collapsible sidebar, content area.
//!
//! ARCHITECTURE
//! ============
//! `LayoutShell` owns the `RwSignal<LayoutState>` and provides it as
//! context; header, sidebar, and menu nodes all dispatch actions against
//! the same reducer instead of holding private open/closed flags.

pub mod header;
pub mod menu_tree;
pub mod sidebar;

pub use header::Header;
pub use menu_tree::MenuTree;
pub use sidebar::Sidebar;

use leptos::prelude::*;

use crate::state::{LayoutState, MenuItem, default_admin_menu};

/// Top-level admin chrome wrapping the routed content.
#[component]
pub fn LayoutShell(
    children: Children,
    #[prop(optional)] menu: Option<Vec<MenuItem>>,
    #[prop(optional, into)] title: Option<String>,
) -> impl IntoView {
    let layout = RwSignal::new(LayoutState::default());
    provide_context(layout);

    let menu = menu.unwrap_or_else(default_admin_menu);

    view! {
        <div class="layout-shell">
            <Header title=title.unwrap_or_else(|| "PageCraft".to_owned())/>
            <div class="layout-shell__body">
                <Sidebar items=menu/>
                <main class="layout-shell__content">{children()}</main>
            </div>
        </div>
    }
}
