//! Page REST routes, all answering in schema envelopes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use schema::{ApiError, ApiSuccess, Paginated, paginate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use widgets::Widget;

use crate::services::page::{self, PageError};
use crate::state::{AppState, Page};

#[cfg(test)]
#[path = "pages_test.rs"]
mod pages_test;

const DEFAULT_LIMIT: u32 = 20;

// =============================================================================
// WIRE TYPES
// =============================================================================

/// Listing row: page identity without the widget payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub version: i64,
    pub widget_count: usize,
    pub updated_at: u64,
}

fn to_summary(page: &Page) -> PageSummary {
    PageSummary {
        id: page.id,
        slug: page.slug.clone(),
        title: page.title.clone(),
        version: page.version,
        widget_count: page.widgets.len(),
        updated_at: page.updated_at,
    }
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

#[derive(Debug, Deserialize)]
pub struct UpdatePageBody {
    pub widgets: Vec<Widget>,
    pub version: i64,
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/pages` — paginated page summaries.
pub async fn list_pages(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<Paginated<PageSummary>> {
    let pages = page::list_pages(&state).await;
    let summaries: Vec<PageSummary> = pages.iter().map(to_summary).collect();
    Json(paginate(&summaries, params.page, params.limit))
}

/// `GET /api/pages/{slug}` — full page with widgets.
pub async fn get_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ApiSuccess<Page>>, (StatusCode, Json<ApiError>)> {
    let page = page::get_page(&state, &slug).await.map_err(error_response)?;
    Ok(Json(ApiSuccess::new(page)))
}

/// `PUT /api/pages/{slug}` — replace widgets with optimistic versioning.
pub async fn update_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(body): Json<UpdatePageBody>,
) -> Result<Json<ApiSuccess<Page>>, (StatusCode, Json<ApiError>)> {
    let updated = page::update_widgets(&state, &slug, body.widgets, body.version)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiSuccess::new(updated)))
}

pub(crate) fn error_response(err: PageError) -> (StatusCode, Json<ApiError>) {
    let status = match &err {
        PageError::NotFound(_) => StatusCode::NOT_FOUND,
        PageError::StaleUpdate { .. } => StatusCode::CONFLICT,
    };
    (status, Json(ApiError::from_error(&err)))
}
