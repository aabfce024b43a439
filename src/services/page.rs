//! Page service — list, fetch, and update pages with LWW versioning.
//!
//! DESIGN
//! ======
//! Mutations update the in-memory store and return the updated page. LWW
//! conflict resolution: the incoming version must be >= the current
//! version, otherwise the update is rejected as stale and the caller must
//! refetch before retrying.

use widgets::Widget;

use crate::state::{AppState, Page, epoch_seconds};

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("page not found: {0}")]
    NotFound(String),
    #[error("stale update: incoming version {incoming} < current {current}")]
    StaleUpdate { incoming: i64, current: i64 },
}

impl schema::ErrorCode for PageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "E_PAGE_NOT_FOUND",
            Self::StaleUpdate { .. } => "E_STALE_UPDATE",
        }
    }
}

/// All pages ordered by slug for stable pagination.
pub async fn list_pages(state: &AppState) -> Vec<Page> {
    let pages = state.pages.read().await;
    let mut all: Vec<Page> = pages.values().cloned().collect();
    all.sort_by(|a, b| a.slug.cmp(&b.slug));
    all
}

/// Fetch one page by slug.
///
/// # Errors
///
/// Returns `NotFound` for an unknown slug.
pub async fn get_page(state: &AppState, slug: &str) -> Result<Page, PageError> {
    let pages = state.pages.read().await;
    pages
        .get(slug)
        .cloned()
        .ok_or_else(|| PageError::NotFound(slug.to_owned()))
}

/// Replace a page's widgets.
///
/// # Errors
///
/// Returns `NotFound` for an unknown slug and `StaleUpdate` when
/// `incoming_version` is older than the stored version.
pub async fn update_widgets(
    state: &AppState,
    slug: &str,
    widgets: Vec<Widget>,
    incoming_version: i64,
) -> Result<Page, PageError> {
    let mut pages = state.pages.write().await;
    let page = pages
        .get_mut(slug)
        .ok_or_else(|| PageError::NotFound(slug.to_owned()))?;

    // LWW: reject stale updates.
    if incoming_version < page.version {
        return Err(PageError::StaleUpdate { incoming: incoming_version, current: page.version });
    }

    page.widgets = widgets;
    page.version += 1;
    page.updated_at = epoch_seconds();

    tracing::debug!(slug, version = page.version, "page widgets updated");
    Ok(page.clone())
}
