//! Boolean toggle rendered as a labelled checkbox.

use leptos::prelude::*;

/// Controlled checkbox field.
#[component]
pub fn CheckboxField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<bool>,
    on_change: Callback<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] error: MaybeProp<String>,
) -> impl IntoView {
    let field_id = format!("field-{}", label.to_lowercase().replace(' ', "-"));

    view! {
        <div class="field field--checkbox" class:field--error=move || error.get().is_some()>
            <input
                id=field_id.clone()
                class="field__checkbox"
                type="checkbox"
                prop:checked=move || value.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <label class="field__label" for=field_id>
                {label}
                <Show when=move || required>
                    <span class="field__required">"*"</span>
                </Show>
            </label>
            <Show when=move || error.get().is_some()>
                <span class="field__error">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </div>
    }
}
