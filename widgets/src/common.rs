//! Style props shared by every widget variant.

use serde::{Deserialize, Serialize};

/// Per-side spacing in logical pixels. Unset sides default to 0 on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Spacing {
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub right: f64,
    #[serde(default)]
    pub bottom: f64,
    #[serde(default)]
    pub left: f64,
}

/// Partial spacing update produced by the editor's spacing field.
///
/// Only the sides the user touched are present; merging preserves the rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpacingPatch {
    pub top: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
    pub left: Option<f64>,
}

impl Spacing {
    /// Apply a partial patch over this spacing, keeping untouched sides.
    #[must_use]
    pub fn merged(self, patch: &SpacingPatch) -> Self {
        Self {
            top: patch.top.unwrap_or(self.top),
            right: patch.right.unwrap_or(self.right),
            bottom: patch.bottom.unwrap_or(self.bottom),
            left: patch.left.unwrap_or(self.left),
        }
    }
}

impl SpacingPatch {
    #[must_use]
    pub fn top(value: f64) -> Self {
        Self { top: Some(value), ..Self::default() }
    }

    #[must_use]
    pub fn right(value: f64) -> Self {
        Self { right: Some(value), ..Self::default() }
    }

    #[must_use]
    pub fn bottom(value: f64) -> Self {
        Self { bottom: Some(value), ..Self::default() }
    }

    #[must_use]
    pub fn left(value: f64) -> Self {
        Self { left: Some(value), ..Self::default() }
    }
}

/// Style attributes applied to every widget before variant rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonProps {
    #[serde(default)]
    pub spacing: Spacing,
    /// Background color as a CSS color string. `None` means "unset", which is
    /// distinct from any defined color. Accepts the legacy wire key `color`
    /// on input; output always uses `background`.
    #[serde(default, alias = "color", skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl Default for CommonProps {
    fn default() -> Self {
        Self { spacing: Spacing::default(), background: None, visible: true }
    }
}

impl CommonProps {
    /// Render the shared props as an inline CSS style string.
    #[must_use]
    pub fn inline_style(&self) -> String {
        let s = self.spacing;
        let mut style = format!("padding:{}px {}px {}px {}px;", s.top, s.right, s.bottom, s.left);
        if let Some(background) = &self.background {
            style.push_str(&format!("background-color:{background};"));
        }
        style
    }
}
