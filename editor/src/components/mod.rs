//! Leptos components for the admin editor.

pub mod fields;
pub mod layout;
pub mod property_panel;
