//! Four-sided spacing editor.
//!
//! Emits a [`SpacingPatch`] per edited side instead of a whole `Spacing`,
//! so a parent holding stale state for the other sides cannot clobber them:
//! it merges the patch into whatever it currently has.

use leptos::prelude::*;
use widgets::{Spacing, SpacingPatch};

use super::number_field::NumberField;

/// Controlled spacing field composed of one number input per side.
#[component]
pub fn SpacingField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<Spacing>,
    on_change: Callback<SpacingPatch>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] error: MaybeProp<String>,
) -> impl IntoView {
    let top = Signal::derive(move || value.get().top);
    let right = Signal::derive(move || value.get().right);
    let bottom = Signal::derive(move || value.get().bottom);
    let left = Signal::derive(move || value.get().left);

    view! {
        <div class="field field--spacing" class:field--error=move || error.get().is_some()>
            <span class="field__label">
                {label}
                <Show when=move || required>
                    <span class="field__required">"*"</span>
                </Show>
            </span>
            <div class="spacing-field__grid">
                <NumberField
                    label="Top"
                    value=top
                    min=0.0
                    on_change=Callback::new(move |v| on_change.run(SpacingPatch::top(v)))
                />
                <NumberField
                    label="Right"
                    value=right
                    min=0.0
                    on_change=Callback::new(move |v| on_change.run(SpacingPatch::right(v)))
                />
                <NumberField
                    label="Bottom"
                    value=bottom
                    min=0.0
                    on_change=Callback::new(move |v| on_change.run(SpacingPatch::bottom(v)))
                />
                <NumberField
                    label="Left"
                    value=left
                    min=0.0
                    on_change=Callback::new(move |v| on_change.run(SpacingPatch::left(v)))
                />
            </div>
            <Show when=move || error.get().is_some()>
                <span class="field__error">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </div>
    }
}
