//! Page content seeding.
//!
//! The store starts from a JSON content file (`CONTENT_FILE`) when one is
//! configured, and falls back to built-in demo pages otherwise. Content is
//! untrusted input: a widget with an unknown `type` loads as the `Unknown`
//! variant and renders degraded, it never fails the seed.

use std::path::Path;

use uuid::Uuid;
use widgets::{
    FlashSaleProps, HeroBannerProps, ProductGridProps, QuickLink, QuickLinksProps, Widget,
    WidgetProps,
};

use crate::state::{AppState, Page, epoch_seconds};

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content file unreadable: {0}")]
    Io(#[from] std::io::Error),
    #[error("content file malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load pages from a JSON content file: a top-level array of pages.
///
/// # Errors
///
/// Returns `Io` when the file cannot be read and `Parse` when it is not a
/// valid page array. A recognized widget type with malformed props is a
/// parse error; an unrecognized type is not.
pub fn load_content_file(path: &Path) -> Result<Vec<Page>, ContentError> {
    let raw = std::fs::read_to_string(path)?;
    let pages: Vec<Page> = serde_json::from_str(&raw)?;
    Ok(pages)
}

/// Insert pages into the store, keyed by slug. Later entries win on
/// duplicate slugs.
pub async fn seed(state: &AppState, pages: Vec<Page>) {
    let count = pages.len();
    let mut store = state.pages.write().await;
    for page in pages {
        store.insert(page.slug.clone(), page);
    }
    tracing::info!(count, "page store seeded");
}

/// Built-in demo content used when no content file is configured.
#[must_use]
pub fn demo_pages() -> Vec<Page> {
    let home = Page {
        id: Uuid::new_v4(),
        slug: "home".to_owned(),
        title: "Home".to_owned(),
        widgets: vec![
            Widget::new(WidgetProps::HeroBanner(HeroBannerProps {
                title: "Summer Collection".to_owned(),
                subtitle: Some("New arrivals every week".to_owned()),
                image_url: "/img/hero-summer.jpg".to_owned(),
                cta_label: Some("Shop now".to_owned()),
                cta_url: Some("/p/sale".to_owned()),
            })),
            Widget::new(WidgetProps::QuickLinks(QuickLinksProps {
                title: Some("Browse".to_owned()),
                links: vec![
                    QuickLink { label: "New in".to_owned(), url: "/p/new".to_owned(), icon: None },
                    QuickLink { label: "Sale".to_owned(), url: "/p/sale".to_owned(), icon: None },
                ],
            })),
            Widget::new(WidgetProps::ProductGrid(ProductGridProps {
                title: Some("Bestsellers".to_owned()),
                product_ids: vec!["sku-101".to_owned(), "sku-102".to_owned(), "sku-103".to_owned()],
                columns: 3,
            })),
        ],
        version: 1,
        updated_at: epoch_seconds(),
    };

    let sale = Page {
        id: Uuid::new_v4(),
        slug: "sale".to_owned(),
        title: "Flash Sale".to_owned(),
        widgets: vec![Widget::new(WidgetProps::FlashSale(FlashSaleProps {
            title: "48 Hour Flash Sale".to_owned(),
            ends_at: "2026-09-01T00:00:00Z".to_owned(),
            discount_pct: 30,
            product_ids: vec!["sku-201".to_owned(), "sku-202".to_owned()],
        }))],
        version: 1,
        updated_at: epoch_seconds(),
    };

    vec![home, sale]
}
