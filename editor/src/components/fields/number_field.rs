//! Numeric input with optional clamping.

use leptos::prelude::*;

#[cfg(test)]
#[path = "number_field_test.rs"]
mod number_field_test;

/// Parse raw input into a number, clamped to the given bounds. Returns
/// `None` for input that is not a number; callers ignore those edits so the
/// field snaps back to the controlled value.
fn parse_clamped(raw: &str, min: Option<f64>, max: Option<f64>) -> Option<f64> {
    let mut value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    if let Some(min) = min {
        value = value.max(min);
    }
    if let Some(max) = max {
        value = value.min(max);
    }
    Some(value)
}

/// Format a number for display: integers without a trailing `.0`.
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Controlled number field. Unparseable edits are dropped rather than
/// forwarded, so the parent never sees a NaN.
#[component]
pub fn NumberField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<f64>,
    on_change: Callback<f64>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] min: Option<f64>,
    #[prop(optional, into)] max: Option<f64>,
    #[prop(optional, into)] step: Option<f64>,
    #[prop(optional, into)] error: MaybeProp<String>,
) -> impl IntoView {
    let field_id = format!("field-{}", label.to_lowercase().replace(' ', "-"));

    view! {
        <div class="field field--number" class:field--error=move || error.get().is_some()>
            <label class="field__label" for=field_id.clone()>
                {label}
                <Show when=move || required>
                    <span class="field__required">"*"</span>
                </Show>
            </label>
            <input
                id=field_id
                class="field__input"
                type="number"
                inputmode="decimal"
                min=min.map(format_value)
                max=max.map(format_value)
                step=step.map(format_value)
                prop:value=move || format_value(value.get())
                on:input=move |ev| {
                    if let Some(next) = parse_clamped(&event_target_value(&ev), min, max) {
                        on_change.run(next);
                    }
                }
            />
            <Show when=move || error.get().is_some()>
                <span class="field__error">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </div>
    }
}
