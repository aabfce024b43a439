//! Hero banner renderer.

use leptos::prelude::*;

use crate::common::CommonProps;
use crate::model::HeroBannerProps;

/// Full-width banner with headline, optional subtitle, and optional CTA.
#[component]
pub fn HeroBannerView(props: HeroBannerProps, common: CommonProps) -> impl IntoView {
    let cta = match (props.cta_label, props.cta_url) {
        (Some(label), Some(url)) => Some(view! {
            <a class="hero-banner__cta" href=url>{label}</a>
        }),
        _ => None,
    };

    view! {
        <section class="widget widget--hero-banner" style=common.inline_style()>
            <img class="hero-banner__image" src=props.image_url alt=props.title.clone()/>
            <div class="hero-banner__copy">
                <h2 class="hero-banner__title">{props.title}</h2>
                {props.subtitle.map(|subtitle| view! {
                    <p class="hero-banner__subtitle">{subtitle}</p>
                })}
                {cta}
            </div>
        </section>
    }
}
