//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the admin REST API under `/api`, the auth
//! pass-through, and server-rendered published pages under `/p/{slug}`.

pub mod auth;
pub mod pages;
pub mod render;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/pages", get(pages::list_pages))
        .route(
            "/api/pages/{slug}",
            get(pages::get_page).put(pages::update_page),
        )
        .route("/api/auth/login", post(auth::login))
        .route("/p/{slug}", get(render::render_page))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
