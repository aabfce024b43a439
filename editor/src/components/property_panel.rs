//! Property editor for the selected widget.
//!
//! ARCHITECTURE
//! ============
//! The panel is stateless: it reads the selected widget from a signal and
//! emits a whole updated `Widget` through `on_change` for every edit. The
//! page editor owns the widget list and decides when to persist. Spacing is
//! the one partial case: the field reports a per-side patch which is merged
//! into the current value here, so concurrent edits to other sides survive.

use leptos::prelude::*;
use widgets::{
    FlashSaleProps, HeroBannerProps, ProductGridProps, QuickLink, QuickLinksProps, SpacingPatch,
    Widget, WidgetProps,
};

use super::fields::{
    CheckboxField, ColorField, NumberField, SelectField, SelectOption, SpacingField, TextField,
};

#[cfg(test)]
#[path = "property_panel_test.rs"]
mod property_panel_test;

/// Parse a comma-separated id list, dropping blanks.
fn split_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
        .collect()
}

fn join_ids(ids: &[String]) -> String {
    ids.join(", ")
}

/// Map an empty string to `None` for optional text props.
fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() { None } else { Some(value) }
}

/// Inspector panel for one widget.
#[component]
pub fn PropertyPanel(
    #[prop(into)] widget: Signal<Widget>,
    on_change: Callback<Widget>,
) -> impl IntoView {
    let kind_label = move || widget.get().props.kind().replace('_', " ");

    let variant_fields = move || match widget.get().props {
        WidgetProps::HeroBanner(_) => {
            view! { <HeroBannerFields widget=widget on_change=on_change/> }.into_any()
        }
        WidgetProps::FlashSale(_) => {
            view! { <FlashSaleFields widget=widget on_change=on_change/> }.into_any()
        }
        WidgetProps::ProductGrid(_) => {
            view! { <ProductGridFields widget=widget on_change=on_change/> }.into_any()
        }
        WidgetProps::QuickLinks(_) => {
            view! { <QuickLinksFields widget=widget on_change=on_change/> }.into_any()
        }
        WidgetProps::Unknown { kind, .. } => view! {
            <div class="property-panel__unknown">
                {format!("No editable properties for unknown widget type \"{kind}\"")}
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="property-panel">
            <div class="property-panel__section">
                <span class="property-panel__kind">{kind_label}</span>
            </div>

            <div class="property-panel__section">
                {variant_fields}
            </div>

            <div class="property-panel__section">
                <span class="property-panel__section-title">"Layout"</span>
                <CommonFields widget=widget on_change=on_change/>
            </div>
        </div>
    }
}

/// Fields shared by every widget: spacing, background, visibility.
#[component]
fn CommonFields(widget: Signal<Widget>, on_change: Callback<Widget>) -> impl IntoView {
    let spacing = Signal::derive(move || widget.get().common.spacing);
    let background = Signal::derive(move || widget.get().common.background);
    let visible = Signal::derive(move || widget.get().common.visible);

    let set_spacing = Callback::new(move |patch: SpacingPatch| {
        let mut next = widget.get();
        next.common.spacing = next.common.spacing.merged(&patch);
        on_change.run(next);
    });
    let set_background = Callback::new(move |color: Option<String>| {
        let mut next = widget.get();
        next.common.background = color;
        on_change.run(next);
    });
    let set_visible = Callback::new(move |visible: bool| {
        let mut next = widget.get();
        next.common.visible = visible;
        on_change.run(next);
    });

    view! {
        <SpacingField label="Spacing" value=spacing on_change=set_spacing/>
        <ColorField label="Background" value=background on_change=set_background/>
        <CheckboxField label="Visible" value=visible on_change=set_visible/>
    }
}

fn hero_props(widget: &Widget) -> HeroBannerProps {
    match &widget.props {
        WidgetProps::HeroBanner(props) => props.clone(),
        _ => HeroBannerProps {
            title: String::new(),
            subtitle: None,
            image_url: String::new(),
            cta_label: None,
            cta_url: None,
        },
    }
}

#[component]
fn HeroBannerFields(widget: Signal<Widget>, on_change: Callback<Widget>) -> impl IntoView {
    let commit = move |apply: &dyn Fn(&mut HeroBannerProps)| {
        let mut next = widget.get();
        if let WidgetProps::HeroBanner(props) = &mut next.props {
            apply(props);
            on_change.run(next);
        }
    };

    let title = Signal::derive(move || hero_props(&widget.get()).title);
    let subtitle = Signal::derive(move || hero_props(&widget.get()).subtitle.unwrap_or_default());
    let image_url = Signal::derive(move || hero_props(&widget.get()).image_url);
    let cta_label = Signal::derive(move || hero_props(&widget.get()).cta_label.unwrap_or_default());
    let cta_url = Signal::derive(move || hero_props(&widget.get()).cta_url.unwrap_or_default());

    view! {
        <TextField
            label="Title"
            value=title
            required=true
            on_change=Callback::new(move |v: String| commit(&|p| p.title = v.clone()))
        />
        <TextField
            label="Subtitle"
            value=subtitle
            on_change=Callback::new(move |v: String| commit(&|p| p.subtitle = non_empty(v.clone())))
        />
        <TextField
            label="Image URL"
            value=image_url
            required=true
            on_change=Callback::new(move |v: String| commit(&|p| p.image_url = v.clone()))
        />
        <TextField
            label="CTA Label"
            value=cta_label
            on_change=Callback::new(move |v: String| commit(&|p| p.cta_label = non_empty(v.clone())))
        />
        <TextField
            label="CTA URL"
            value=cta_url
            on_change=Callback::new(move |v: String| commit(&|p| p.cta_url = non_empty(v.clone())))
        />
    }
}

fn flash_sale_props(widget: &Widget) -> FlashSaleProps {
    match &widget.props {
        WidgetProps::FlashSale(props) => props.clone(),
        _ => FlashSaleProps {
            title: String::new(),
            ends_at: String::new(),
            discount_pct: 0,
            product_ids: Vec::new(),
        },
    }
}

#[component]
fn FlashSaleFields(widget: Signal<Widget>, on_change: Callback<Widget>) -> impl IntoView {
    let commit = move |apply: &dyn Fn(&mut FlashSaleProps)| {
        let mut next = widget.get();
        if let WidgetProps::FlashSale(props) = &mut next.props {
            apply(props);
            on_change.run(next);
        }
    };

    let title = Signal::derive(move || flash_sale_props(&widget.get()).title);
    let ends_at = Signal::derive(move || flash_sale_props(&widget.get()).ends_at);
    let discount = Signal::derive(move || f64::from(flash_sale_props(&widget.get()).discount_pct));
    let product_ids =
        Signal::derive(move || join_ids(&flash_sale_props(&widget.get()).product_ids));

    view! {
        <TextField
            label="Title"
            value=title
            required=true
            on_change=Callback::new(move |v: String| commit(&|p| p.title = v.clone()))
        />
        <TextField
            label="Ends At"
            value=ends_at
            required=true
            placeholder="2026-12-31T23:59:59Z"
            on_change=Callback::new(move |v: String| commit(&|p| p.ends_at = v.clone()))
        />
        <NumberField
            label="Discount %"
            value=discount
            min=0.0
            max=100.0
            step=1.0
            on_change=Callback::new(move |v: f64| commit(&|p| p.discount_pct = v.round() as u8))
        />
        <TextField
            label="Product IDs"
            value=product_ids
            placeholder="sku-1, sku-2"
            on_change=Callback::new(move |v: String| commit(&|p| p.product_ids = split_ids(&v)))
        />
    }
}

fn product_grid_props(widget: &Widget) -> ProductGridProps {
    match &widget.props {
        WidgetProps::ProductGrid(props) => props.clone(),
        _ => ProductGridProps { title: None, product_ids: Vec::new(), columns: 4 },
    }
}

#[component]
fn ProductGridFields(widget: Signal<Widget>, on_change: Callback<Widget>) -> impl IntoView {
    let commit = move |apply: &dyn Fn(&mut ProductGridProps)| {
        let mut next = widget.get();
        if let WidgetProps::ProductGrid(props) = &mut next.props {
            apply(props);
            on_change.run(next);
        }
    };

    let title = Signal::derive(move || product_grid_props(&widget.get()).title.unwrap_or_default());
    let columns = Signal::derive(move || product_grid_props(&widget.get()).columns.to_string());
    let product_ids =
        Signal::derive(move || join_ids(&product_grid_props(&widget.get()).product_ids));

    let column_options = (1..=6u8)
        .map(|n| SelectOption::new(n.to_string(), format!("{n} columns")))
        .collect::<Vec<_>>();

    view! {
        <TextField
            label="Title"
            value=title
            on_change=Callback::new(move |v: String| commit(&|p| p.title = non_empty(v.clone())))
        />
        <SelectField
            label="Columns"
            value=columns
            options=column_options
            on_change=Callback::new(move |v: String| {
                if let Ok(columns) = v.parse::<u8>() {
                    commit(&|p| p.columns = columns);
                }
            })
        />
        <TextField
            label="Product IDs"
            value=product_ids
            placeholder="sku-1, sku-2"
            on_change=Callback::new(move |v: String| commit(&|p| p.product_ids = split_ids(&v)))
        />
    }
}

fn quick_links_props(widget: &Widget) -> QuickLinksProps {
    match &widget.props {
        WidgetProps::QuickLinks(props) => props.clone(),
        _ => QuickLinksProps { title: None, links: Vec::new() },
    }
}

#[component]
fn QuickLinksFields(widget: Signal<Widget>, on_change: Callback<Widget>) -> impl IntoView {
    let commit = move |apply: &dyn Fn(&mut QuickLinksProps)| {
        let mut next = widget.get();
        if let WidgetProps::QuickLinks(props) = &mut next.props {
            apply(props);
            on_change.run(next);
        }
    };

    let title = Signal::derive(move || quick_links_props(&widget.get()).title.unwrap_or_default());
    let link_count = move || quick_links_props(&widget.get()).links.len();

    let link_rows = move || {
        (0..link_count())
            .map(|index| {
                let label = Signal::derive(move || {
                    quick_links_props(&widget.get())
                        .links
                        .get(index)
                        .map(|link| link.label.clone())
                        .unwrap_or_default()
                });
                let url = Signal::derive(move || {
                    quick_links_props(&widget.get())
                        .links
                        .get(index)
                        .map(|link| link.url.clone())
                        .unwrap_or_default()
                });

                view! {
                    <div class="property-panel__link-row">
                        <TextField
                            label=format!("Link {} Label", index + 1)
                            value=label
                            on_change=Callback::new(move |v: String| {
                                commit(&|p| {
                                    if let Some(link) = p.links.get_mut(index) {
                                        link.label = v.clone();
                                    }
                                });
                            })
                        />
                        <TextField
                            label=format!("Link {} URL", index + 1)
                            value=url
                            on_change=Callback::new(move |v: String| {
                                commit(&|p| {
                                    if let Some(link) = p.links.get_mut(index) {
                                        link.url = v.clone();
                                    }
                                });
                            })
                        />
                        <button
                            class="property-panel__link-remove"
                            type="button"
                            on:click=move |_| {
                                commit(&|p| {
                                    if index < p.links.len() {
                                        p.links.remove(index);
                                    }
                                });
                            }
                        >
                            "Remove"
                        </button>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <TextField
            label="Title"
            value=title
            on_change=Callback::new(move |v: String| commit(&|p| p.title = non_empty(v.clone())))
        />
        {link_rows}
        <button
            class="property-panel__link-add"
            type="button"
            on:click=move |_| {
                commit(&|p| {
                    p.links.push(QuickLink {
                        label: "New link".to_owned(),
                        url: "/".to_owned(),
                        icon: None,
                    });
                });
            }
        >
            "Add link"
        </button>
    }
}
