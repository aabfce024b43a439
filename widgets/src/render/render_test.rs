use leptos::prelude::*;

use super::*;
use crate::common::{CommonProps, Spacing};
use crate::model::{
    FlashSaleProps, HeroBannerProps, ProductGridProps, QuickLink, QuickLinksProps, Widget, WidgetProps,
};

fn render(widget: Widget) -> String {
    view! { <WidgetView widget=widget/> }.to_html()
}

fn hero_widget() -> Widget {
    Widget::new(WidgetProps::HeroBanner(HeroBannerProps {
        title: "Summer Sale".to_owned(),
        subtitle: Some("Up to 50% off".to_owned()),
        image_url: "/img/hero.jpg".to_owned(),
        cta_label: Some("Shop now".to_owned()),
        cta_url: Some("/sale".to_owned()),
    }))
}

#[test]
fn hero_banner_renders_dedicated_renderer() {
    let html = render(hero_widget());
    assert!(html.contains("widget--hero-banner"), "html: {html}");
    assert!(html.contains("Summer Sale"));
    assert!(html.contains("Shop now"));
    assert!(!html.contains("widget--unknown"));
}

#[test]
fn flash_sale_renders_dedicated_renderer() {
    let widget = Widget::new(WidgetProps::FlashSale(FlashSaleProps {
        title: "Lightning deal".to_owned(),
        ends_at: "2026-09-01T00:00:00Z".to_owned(),
        discount_pct: 30,
        product_ids: vec!["p1".to_owned(), "p2".to_owned()],
    }));
    let html = render(widget);
    assert!(html.contains("widget--flash-sale"));
    assert!(html.contains("-30%"));
    assert!(html.contains("data-product-id=\"p1\""));
    assert!(!html.contains("widget--unknown"));
}

#[test]
fn product_grid_renders_dedicated_renderer() {
    let widget = Widget::new(WidgetProps::ProductGrid(ProductGridProps {
        title: Some("Best sellers".to_owned()),
        product_ids: vec!["a".to_owned(), "b".to_owned(), "c".to_owned()],
        columns: 3,
    }));
    let html = render(widget);
    assert!(html.contains("widget--product-grid"));
    assert!(html.contains("repeat(3,1fr)"));
    assert!(!html.contains("widget--unknown"));
}

#[test]
fn quick_links_renders_dedicated_renderer() {
    let widget = Widget::new(WidgetProps::QuickLinks(QuickLinksProps {
        title: None,
        links: vec![QuickLink {
            label: "New arrivals".to_owned(),
            url: "/new".to_owned(),
            icon: Some("sparkle".to_owned()),
        }],
    }));
    let html = render(widget);
    assert!(html.contains("widget--quick-links"));
    assert!(html.contains("href=\"/new\""));
    assert!(html.contains("data-icon=\"sparkle\""));
    assert!(!html.contains("widget--unknown"));
}

#[test]
fn unknown_type_renders_fallback_naming_the_type() {
    let widget = Widget::new(WidgetProps::Unknown {
        kind: "countdown_timer".to_owned(),
        props: serde_json::json!({ "target": "2027-01-01" }),
    });
    let html = render(widget);
    assert!(html.contains("widget--unknown"));
    assert!(html.contains("Unknown widget type: countdown_timer"));
    assert!(html.contains("data-widget-type=\"countdown_timer\""));
}

#[test]
fn invisible_widget_renders_nothing() {
    let widget = hero_widget().with_common(CommonProps {
        spacing: Spacing::default(),
        background: None,
        visible: false,
    });
    let html = render(widget);
    assert!(!html.contains("widget--hero-banner"), "html: {html}");
}

#[test]
fn common_props_style_applies_before_variant_rendering() {
    let widget = hero_widget().with_common(CommonProps {
        spacing: Spacing { top: 24.0, right: 0.0, bottom: 24.0, left: 0.0 },
        background: Some("#fff7ed".to_owned()),
        visible: true,
    });
    let html = render(widget);
    assert!(html.contains("padding:24px 0px 24px 0px;"));
    assert!(html.contains("background-color:#fff7ed;"));
}

#[test]
fn widget_list_renders_each_widget_in_order() {
    let widgets = vec![
        hero_widget(),
        Widget::new(WidgetProps::Unknown { kind: "mystery".to_owned(), props: serde_json::Value::Null }),
    ];
    let html = view! { <WidgetList widgets=widgets/> }.to_html();
    let hero_at = html.find("widget--hero-banner").expect("hero rendered");
    let unknown_at = html.find("widget--unknown").expect("fallback rendered");
    assert!(hero_at < unknown_at);
}
