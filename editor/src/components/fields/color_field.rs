//! Color picker with preset swatches and a clear action.

use leptos::prelude::*;

#[cfg(test)]
#[path = "color_field_test.rs"]
mod color_field_test;

const PRESETS: [&str; 8] = [
    "#ffffff", "#f3f4f6", "#1f2937", "#dc2626", "#ea580c", "#16a34a", "#2563eb", "#7c3aed",
];

const FALLBACK: &str = "#ffffff";

/// Normalize user input to a lowercase `#rrggbb` value, or `None` when it
/// is not a hex color.
fn normalize_hex(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('#')?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    Some(format!("#{}", digits.to_ascii_lowercase()))
}

/// Controlled color field. `value` is optional: `None` means "unset", and
/// the clear button reports `None` back through `on_change`.
#[component]
pub fn ColorField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<Option<String>>,
    on_change: Callback<Option<String>>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] error: MaybeProp<String>,
) -> impl IntoView {
    let picker_open = RwSignal::new(false);
    let field_id = format!("field-{}", label.to_lowercase().replace(' ', "-"));

    let swatch_color = move || value.get().unwrap_or_else(|| FALLBACK.to_owned());

    view! {
        <div class="field field--color" class:field--error=move || error.get().is_some()>
            <label class="field__label" for=field_id.clone()>
                {label}
                <Show when=move || required>
                    <span class="field__required">"*"</span>
                </Show>
            </label>
            <div class="color-field">
                <button
                    id=field_id
                    class="color-field__swatch"
                    type="button"
                    style=move || format!("background-color:{};", swatch_color())
                    on:click=move |_| picker_open.update(|open| *open = !*open)
                />
                <Show when=move || value.get().is_some()>
                    <button
                        class="color-field__clear"
                        type="button"
                        on:click=move |_| {
                            picker_open.set(false);
                            on_change.run(None);
                        }
                    >
                        "Clear"
                    </button>
                </Show>
            </div>
            <Show when=move || picker_open.get()>
                <div class="color-field__popover">
                    {PRESETS
                        .iter()
                        .map(|&preset| {
                            view! {
                                <button
                                    class="color-field__preset"
                                    type="button"
                                    style=format!("background-color:{preset};")
                                    on:click=move |_| {
                                        picker_open.set(false);
                                        on_change.run(Some(preset.to_owned()));
                                    }
                                />
                            }
                        })
                        .collect_view()}
                    <input
                        class="color-field__custom"
                        type="text"
                        placeholder="#rrggbb"
                        prop:value=move || value.get().unwrap_or_default()
                        on:change=move |ev| {
                            if let Some(hex) = normalize_hex(&event_target_value(&ev)) {
                                picker_open.set(false);
                                on_change.run(Some(hex));
                            }
                        }
                    />
                </div>
            </Show>
            <Show when=move || error.get().is_some()>
                <span class="field__error">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </div>
    }
}
