//! Product grid renderer.

use leptos::prelude::*;

use crate::common::CommonProps;
use crate::model::ProductGridProps;

/// Grid of product card placeholders, `columns` wide.
#[component]
pub fn ProductGridView(props: ProductGridProps, common: CommonProps) -> impl IntoView {
    let columns = props.columns.max(1);
    let grid_style = format!("grid-template-columns:repeat({columns},1fr);");

    view! {
        <section class="widget widget--product-grid" style=common.inline_style()>
            {props.title.map(|title| view! {
                <h2 class="product-grid__title">{title}</h2>
            })}
            <div class="product-grid__items" style=grid_style>
                {props
                    .product_ids
                    .into_iter()
                    .map(|id| view! {
                        <div class="product-grid__item product-slot" data-product-id=id></div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
