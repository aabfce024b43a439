//! Widget data model and renderers for PageCraft pages.
//!
//! ARCHITECTURE
//! ============
//! A page is an ordered list of widgets. Each widget is a tagged union over
//! variant kinds (`hero_banner`, `flash_sale`, `product_grid`, `quick_links`)
//! plus shared style props applied uniformly before variant rendering.
//!
//! The union is closed for Rust code — every dispatch site matches
//! exhaustively — but content crosses a trust boundary (stored JSON written
//! by older or newer builds), so deserialization keeps an `Unknown` variant
//! that renders as a visible placeholder instead of failing the whole page.

pub mod common;
pub mod model;
pub mod render;

pub use common::{CommonProps, Spacing, SpacingPatch};
pub use model::{
    FlashSaleProps, HeroBannerProps, ProductGridProps, QuickLink, QuickLinksProps, Widget, WidgetProps,
};
pub use render::{WidgetList, WidgetView};
