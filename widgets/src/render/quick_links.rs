//! Quick links renderer.

use leptos::prelude::*;

use crate::common::CommonProps;
use crate::model::QuickLinksProps;

/// Strip of navigation shortcuts with optional icons.
#[component]
pub fn QuickLinksView(props: QuickLinksProps, common: CommonProps) -> impl IntoView {
    view! {
        <nav class="widget widget--quick-links" style=common.inline_style()>
            {props.title.map(|title| view! {
                <h2 class="quick-links__title">{title}</h2>
            })}
            <ul class="quick-links__list">
                {props
                    .links
                    .into_iter()
                    .map(|link| view! {
                        <li class="quick-links__item">
                            <a class="quick-links__link" href=link.url>
                                {link.icon.map(|icon| view! {
                                    <span class="quick-links__icon" data-icon=icon></span>
                                })}
                                {link.label}
                            </a>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
