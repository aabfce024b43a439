//! Recursive navigation tree.
//!
//! DESIGN
//! ======
//! Nodes return `AnyView` so the recursion has a concrete type to bottom
//! out on. Expanded-sidebar nodes render inline children indented per
//! depth; with the sidebar collapsed, top-level parents open a flyout
//! driven by the hover-intent state machine and leaves fall back to a
//! native tooltip.

use leptos::prelude::*;

use crate::hover::{FlyoutTiming, HoverIntent};
use crate::state::{LayoutState, MenuItem, action_for_click, dispatch};

#[cfg(test)]
#[path = "menu_tree_test.rs"]
mod menu_tree_test;

const BASE_INDENT_PX: usize = 12;
const INDENT_STEP_PX: usize = 16;

#[cfg(feature = "hydrate")]
fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(feature = "hydrate"))]
fn now_ms() -> u64 {
    0
}

#[cfg(feature = "hydrate")]
fn schedule(delay_ms: u64, f: impl FnOnce() + 'static) {
    let delay = u32::try_from(delay_ms).unwrap_or(u32::MAX);
    gloo_timers::callback::Timeout::new(delay, f).forget();
}

#[cfg(not(feature = "hydrate"))]
fn schedule(_delay_ms: u64, _f: impl FnOnce() + 'static) {}

/// Root list of the navigation tree.
#[component]
pub fn MenuTree(items: Vec<MenuItem>) -> impl IntoView {
    view! {
        <ul class="menu-tree">
            {items
                .into_iter()
                .map(|item| view! { <MenuNode item=item depth=0/> })
                .collect_view()}
        </ul>
    }
}

#[component]
fn MenuNode(item: MenuItem, depth: usize) -> AnyView {
    let layout = expect_context::<RwSignal<LayoutState>>();

    let id = item.id.clone();
    let label = item.label.clone();
    let icon = item.icon.clone();
    let children = item.children.clone();
    let has_children = !children.is_empty();
    let action = action_for_click(&item);
    let indent = BASE_INDENT_PX + depth * INDENT_STEP_PX;

    let expanded = {
        let id = id.clone();
        move || layout.get().expanded.contains(&id)
    };
    let active = {
        let id = id.clone();
        move || layout.get().active.as_deref() == Some(id.as_str())
    };
    let collapsed = move || !layout.get().sidebar_open;

    // Flyout for collapsed top-level parents.
    let intent = RwSignal::new(HoverIntent::default());
    let flyout_open = RwSignal::new(false);
    let timing = FlyoutTiming::default();
    let uses_flyout = depth == 0 && has_children;

    let sync_flyout = move || {
        if let Some(open) = intent.try_update(|i| i.poll(now_ms())) {
            let _ = flyout_open.try_set(open);
        }
    };
    let hover_enter = move |_| {
        if uses_flyout && !layout.get().sidebar_open {
            intent.update(|i| i.on_enter(now_ms()));
            schedule(timing.open_delay_ms, sync_flyout);
        }
    };
    let hover_leave = move |_| {
        if uses_flyout {
            intent.update(|i| i.on_leave(now_ms()));
            schedule(timing.close_delay_ms, sync_flyout);
        }
    };

    let on_click = move |_| dispatch(layout, &action);

    let flyout_children = children.clone();
    let caret_expanded = expanded.clone();
    let title = label.clone();

    view! {
        <li class="menu-node" on:mouseenter=hover_enter on:mouseleave=hover_leave>
            <button
                class="menu-node__button"
                class:menu-node__button--active=active
                type="button"
                style=format!("padding-left:{indent}px;")
                title=title
                on:click=on_click
            >
                {icon.map(|icon| view! { <span class=format!("menu-node__icon icon-{icon}")></span> })}
                <span class="menu-node__label">{label}</span>
                <Show when=move || has_children && !collapsed()>
                    <span
                        class="menu-node__caret"
                        class:menu-node__caret--expanded=caret_expanded.clone()
                    ></span>
                </Show>
            </button>
            <Show when=move || has_children && expanded() && !collapsed()>
                <ul class="menu-node__children">
                    {children
                        .clone()
                        .into_iter()
                        .map(|child| view! { <MenuNode item=child depth=depth + 1/> })
                        .collect_view()}
                </ul>
            </Show>
            <Show when=move || flyout_open.get() && collapsed()>
                <div class="menu-node__flyout">
                    {flyout_children
                        .clone()
                        .into_iter()
                        .map(|child| {
                            let child_action = action_for_click(&child);
                            view! {
                                <button
                                    class="menu-node__flyout-item"
                                    type="button"
                                    on:click=move |_| {
                                        intent.update(HoverIntent::dismiss);
                                        flyout_open.set(false);
                                        dispatch(layout, &child_action);
                                    }
                                >
                                    {child.label.clone()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </li>
    }
    .into_any()
}
