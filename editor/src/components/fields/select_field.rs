//! Dropdown select over a fixed option list.

use leptos::prelude::*;

/// One selectable option. `value` is what `on_change` reports, `label` is
/// what the user sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }
}

/// Controlled select field.
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    options: Vec<SelectOption>,
    on_change: Callback<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] error: MaybeProp<String>,
) -> impl IntoView {
    let field_id = format!("field-{}", label.to_lowercase().replace(' ', "-"));

    view! {
        <div class="field field--select" class:field--error=move || error.get().is_some()>
            <label class="field__label" for=field_id.clone()>
                {label}
                <Show when=move || required>
                    <span class="field__required">"*"</span>
                </Show>
            </label>
            <select
                id=field_id
                class="field__input"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|opt| {
                        let opt_value = opt.value.clone();
                        view! {
                            <option
                                value=opt.value
                                selected=move || value.get() == opt_value
                            >
                                {opt.label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <Show when=move || error.get().is_some()>
                <span class="field__error">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </div>
    }
}
