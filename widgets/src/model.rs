//! The widget tagged union and its wire format.
//!
//! WIRE SHAPE
//! ==========
//! `{ "type": "<variant>", "props": { ... }, "commonProps": { ... } }`
//! with snake_case type tags and camelCase prop keys.
//!
//! DESIGN
//! ======
//! `Widget` carries a closed `WidgetProps` sum so rendering dispatch is
//! checked by the compiler. Deserialization is manual: a recognized tag with
//! malformed props is a hard error, but an unrecognized tag becomes
//! `Unknown` — stored content from a newer build must degrade at render
//! time, not fail the whole page.

use serde::de::Error as DeError;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::common::CommonProps;

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

// =============================================================================
// VARIANT PROPS
// =============================================================================

/// Full-width banner with a headline and optional call to action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroBannerProps {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_url: Option<String>,
}

/// Time-boxed promotion over a fixed set of products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashSaleProps {
    pub title: String,
    /// Sale end as an RFC 3339 timestamp string; rendering treats it as opaque.
    pub ends_at: String,
    pub discount_pct: u8,
    #[serde(default)]
    pub product_ids: Vec<String>,
}

/// Grid of product cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductGridProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub product_ids: Vec<String>,
    #[serde(default = "default_columns")]
    pub columns: u8,
}

fn default_columns() -> u8 {
    4
}

/// One entry in a quick-links strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickLink {
    pub label: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Strip of navigation shortcuts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickLinksProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub links: Vec<QuickLink>,
}

// =============================================================================
// TAGGED UNION
// =============================================================================

/// Variant-specific widget payload. `type` uniquely determines the shape.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetProps {
    HeroBanner(HeroBannerProps),
    FlashSale(FlashSaleProps),
    ProductGrid(ProductGridProps),
    QuickLinks(QuickLinksProps),
    /// Unrecognized tag from externally-sourced content. Kept verbatim so the
    /// renderer can flag it and round-trips preserve the original payload.
    Unknown { kind: String, props: Value },
}

impl WidgetProps {
    /// The wire type tag for this variant.
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::HeroBanner(_) => "hero_banner",
            Self::FlashSale(_) => "flash_sale",
            Self::ProductGrid(_) => "product_grid",
            Self::QuickLinks(_) => "quick_links",
            Self::Unknown { kind, .. } => kind,
        }
    }

    /// Decode a variant from its wire tag and raw props.
    ///
    /// A recognized tag with malformed props is an error; an unrecognized tag
    /// is `Unknown`, never an error.
    ///
    /// # Errors
    ///
    /// Returns the underlying serde error when props do not match the shape
    /// the tag demands.
    pub fn from_parts(kind: &str, props: Value) -> Result<Self, serde_json::Error> {
        match kind {
            "hero_banner" => Ok(Self::HeroBanner(serde_json::from_value(props)?)),
            "flash_sale" => Ok(Self::FlashSale(serde_json::from_value(props)?)),
            "product_grid" => Ok(Self::ProductGrid(serde_json::from_value(props)?)),
            "quick_links" => Ok(Self::QuickLinks(serde_json::from_value(props)?)),
            other => Ok(Self::Unknown { kind: other.to_owned(), props }),
        }
    }

    fn props_value(&self) -> Result<Value, serde_json::Error> {
        match self {
            Self::HeroBanner(p) => serde_json::to_value(p),
            Self::FlashSale(p) => serde_json::to_value(p),
            Self::ProductGrid(p) => serde_json::to_value(p),
            Self::QuickLinks(p) => serde_json::to_value(p),
            Self::Unknown { props, .. } => Ok(props.clone()),
        }
    }
}

// =============================================================================
// WIDGET
// =============================================================================

/// A discrete content block within a page.
#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    pub props: WidgetProps,
    pub common: CommonProps,
}

impl Widget {
    #[must_use]
    pub fn new(props: WidgetProps) -> Self {
        Self { props, common: CommonProps::default() }
    }

    #[must_use]
    pub fn with_common(mut self, common: CommonProps) -> Self {
        self.common = common;
        self
    }
}

#[derive(Deserialize)]
struct RawWidget {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    props: Value,
    #[serde(rename = "commonProps", default)]
    common: CommonProps,
}

impl<'de> Deserialize<'de> for Widget {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawWidget::deserialize(deserializer)?;
        let props = WidgetProps::from_parts(&raw.kind, raw.props).map_err(D::Error::custom)?;
        Ok(Self { props, common: raw.common })
    }
}

impl Serialize for Widget {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let props = self
            .props
            .props_value()
            .map_err(serde::ser::Error::custom)?;
        let mut state = serializer.serialize_struct("Widget", 3)?;
        state.serialize_field("type", self.props.kind())?;
        state.serialize_field("props", &props)?;
        state.serialize_field("commonProps", &self.common)?;
        state.end()
    }
}
