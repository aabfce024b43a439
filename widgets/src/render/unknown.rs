//! Fallback renderer for unrecognized widget types.

use leptos::prelude::*;

use crate::common::CommonProps;

/// Visibly flagged placeholder for a widget whose type tag no running
/// renderer recognizes (corrupted or future-versioned content). Names the
/// offending type so operators can find the source record.
#[component]
pub fn UnknownWidget(kind: String, common: CommonProps) -> impl IntoView {
    view! {
        <div class="widget widget--unknown" style=common.inline_style() data-widget-type=kind.clone()>
            <span class="widget--unknown__label">{format!("Unknown widget type: {kind}")}</span>
        </div>
    }
}
