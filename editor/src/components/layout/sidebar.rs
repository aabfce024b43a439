//! Collapsible navigation sidebar.

use leptos::prelude::*;

use super::menu_tree::MenuTree;
use crate::state::{LayoutState, MenuItem};

#[component]
pub fn Sidebar(items: Vec<MenuItem>) -> impl IntoView {
    let layout = expect_context::<RwSignal<LayoutState>>();
    let collapsed = move || !layout.get().sidebar_open;

    view! {
        <aside class="sidebar" class:sidebar--collapsed=collapsed>
            <nav class="sidebar__nav">
                <MenuTree items=items/>
            </nav>
        </aside>
    }
}
