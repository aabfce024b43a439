//! Controlled form fields for the property panel.
//!
//! DESIGN
//! ======
//! Every field is fully controlled: the displayed value comes from the
//! `value` signal and edits are reported through `on_change` without being
//! stored locally. Parents own the data; a field never drifts from it.
//! Fields share the same prop shape (label, value, on_change, optional
//! required flag and error message) so the property panel can stack them
//! uniformly.

#[cfg(test)]
#[path = "fields_test.rs"]
mod fields_test;

pub mod checkbox_field;
pub mod color_field;
pub mod number_field;
pub mod select_field;
pub mod spacing_field;
pub mod text_field;

pub use checkbox_field::CheckboxField;
pub use color_field::ColorField;
pub use number_field::NumberField;
pub use select_field::{SelectField, SelectOption};
pub use spacing_field::SpacingField;
pub use text_field::TextField;
