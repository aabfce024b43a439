//! Single-line text input.

use leptos::prelude::*;

/// Controlled text field. Emits every keystroke through `on_change`.
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] error: MaybeProp<String>,
) -> impl IntoView {
    let field_id = format!("field-{}", label.to_lowercase().replace(' ', "-"));

    view! {
        <div class="field field--text" class:field--error=move || error.get().is_some()>
            <label class="field__label" for=field_id.clone()>
                {label}
                <Show when=move || required>
                    <span class="field__required">"*"</span>
                </Show>
            </label>
            <input
                id=field_id
                class="field__input"
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || error.get().is_some()>
                <span class="field__error">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </div>
    }
}
