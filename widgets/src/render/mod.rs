//! Widget rendering — dispatch from the tagged union to variant renderers.
//!
//! DESIGN
//! ======
//! [`WidgetView`] is the factory: it matches exhaustively on the variant and
//! delegates to exactly one renderer per kind, handing the variant props
//! together with the shared style props. Unknown variants render a visibly
//! flagged placeholder naming the offending type string — one bad widget
//! degrades, it never takes down the page.
//!
//! Rendering is a pure function of the widget: no side effects, no network.

pub mod flash_sale;
pub mod hero_banner;
pub mod product_grid;
pub mod quick_links;
pub mod unknown;

use leptos::prelude::*;

use crate::model::{Widget, WidgetProps};

pub use flash_sale::FlashSaleView;
pub use hero_banner::HeroBannerView;
pub use product_grid::ProductGridView;
pub use quick_links::QuickLinksView;
pub use unknown::UnknownWidget;

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

/// Render a single widget by dispatching on its variant.
#[component]
pub fn WidgetView(widget: Widget) -> impl IntoView {
    if !widget.common.visible {
        return ().into_any();
    }

    let common = widget.common;
    match widget.props {
        WidgetProps::HeroBanner(props) => view! { <HeroBannerView props=props common=common/> }.into_any(),
        WidgetProps::FlashSale(props) => view! { <FlashSaleView props=props common=common/> }.into_any(),
        WidgetProps::ProductGrid(props) => view! { <ProductGridView props=props common=common/> }.into_any(),
        WidgetProps::QuickLinks(props) => view! { <QuickLinksView props=props common=common/> }.into_any(),
        WidgetProps::Unknown { kind, .. } => view! { <UnknownWidget kind=kind common=common/> }.into_any(),
    }
}

/// Render an ordered list of widgets, the body of a published page.
#[component]
pub fn WidgetList(widgets: Vec<Widget>) -> impl IntoView {
    widgets
        .into_iter()
        .map(|widget| view! { <WidgetView widget=widget/> })
        .collect_view()
}
