//! Flash sale renderer.

use leptos::prelude::*;

use crate::common::CommonProps;
use crate::model::FlashSaleProps;

/// Time-boxed promotion strip. Product slots are rendered as placeholders
/// carrying `data-product-id`; hydration fills them from the catalog.
#[component]
pub fn FlashSaleView(props: FlashSaleProps, common: CommonProps) -> impl IntoView {
    view! {
        <section class="widget widget--flash-sale" style=common.inline_style()>
            <header class="flash-sale__header">
                <h2 class="flash-sale__title">{props.title}</h2>
                <span class="flash-sale__discount">{format!("-{}%", props.discount_pct)}</span>
                <time class="flash-sale__ends" datetime=props.ends_at.clone()>
                    {format!("Ends {}", props.ends_at)}
                </time>
            </header>
            <ul class="flash-sale__products">
                {props
                    .product_ids
                    .into_iter()
                    .map(|id| view! {
                        <li class="flash-sale__product product-slot" data-product-id=id></li>
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
