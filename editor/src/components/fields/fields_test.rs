use leptos::prelude::*;
use widgets::{Spacing, SpacingPatch};

use super::*;

fn with_owner<T>(f: impl FnOnce() -> T) -> T {
    let owner = Owner::new();
    owner.set();
    f()
}

#[test]
fn text_field_renders_required_marker_and_error() {
    let html = with_owner(|| {
        view! {
            <TextField
                label="Title"
                value=Signal::derive(|| "Summer sale".to_owned())
                on_change=Callback::new(|_: String| {})
                required=true
                error="Title is required".to_owned()
            />
        }
        .to_html()
    });

    assert!(html.contains("field__required"));
    assert!(html.contains("field--error"));
    assert!(html.contains("Title is required"));
}

#[test]
fn number_field_renders_required_marker_and_error() {
    let html = with_owner(|| {
        view! {
            <NumberField
                label="Columns"
                value=Signal::derive(|| 4.0)
                on_change=Callback::new(|_: f64| {})
                required=true
                error="Out of range".to_owned()
            />
        }
        .to_html()
    });

    assert!(html.contains("field__required"));
    assert!(html.contains("Out of range"));
}

#[test]
fn select_field_renders_required_marker() {
    let html = with_owner(|| {
        view! {
            <SelectField
                label="Layout"
                value=Signal::derive(|| "grid".to_owned())
                options=vec![SelectOption::new("grid", "Grid"), SelectOption::new("list", "List")]
                on_change=Callback::new(|_: String| {})
                required=true
            />
        }
        .to_html()
    });

    assert!(html.contains("field__required"));
}

#[test]
fn checkbox_field_renders_required_marker_and_error() {
    let html = with_owner(|| {
        view! {
            <CheckboxField
                label="Visible"
                value=Signal::derive(|| true)
                on_change=Callback::new(|_: bool| {})
                required=true
                error="Pick one".to_owned()
            />
        }
        .to_html()
    });

    assert!(html.contains("field__required"));
    assert!(html.contains("field--error"));
    assert!(html.contains("Pick one"));
}

#[test]
fn color_field_renders_required_marker_and_error() {
    let html = with_owner(|| {
        view! {
            <ColorField
                label="Background"
                value=Signal::derive(|| None::<String>)
                on_change=Callback::new(|_: Option<String>| {})
                required=true
                error="Not a color".to_owned()
            />
        }
        .to_html()
    });

    assert!(html.contains("field__required"));
    assert!(html.contains("Not a color"));
}

#[test]
fn spacing_field_renders_required_marker_and_error() {
    let html = with_owner(|| {
        view! {
            <SpacingField
                label="Margin"
                value=Signal::derive(Spacing::default)
                on_change=Callback::new(|_: SpacingPatch| {})
                required=true
                error="Negative spacing".to_owned()
            />
        }
        .to_html()
    });

    assert!(html.contains("field__required"));
    assert!(html.contains("Negative spacing"));
}

#[test]
fn required_and_error_default_off() {
    let html = with_owner(|| {
        view! {
            <TextField
                label="Title"
                value=Signal::derive(String::new)
                on_change=Callback::new(|_: String| {})
            />
        }
        .to_html()
    });

    assert!(!html.contains("field__required"));
    assert!(!html.contains("field__error"));
    assert!(!html.contains("field--error"));
}
