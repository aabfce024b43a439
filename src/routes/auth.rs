//! Auth pass-through route.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use schema::ApiError;
use serde_json::Value;

use crate::services::upstream::UpstreamError;
use crate::state::AppState;

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// `POST /api/auth/login` — forward credentials to the upstream auth API
/// and relay its response verbatim, status included.
pub async fn login(State(state): State<AppState>, Json(credentials): Json<Value>) -> Response {
    let Some(upstream) = &state.auth else {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiError::new("E_AUTH_UNAVAILABLE", "auth upstream is not configured")),
        )
            .into_response();
    };

    match upstream.login(credentials).await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(UpstreamError::Rejected { status, body }) => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, Json(body)).into_response()
        }
        Err(err @ UpstreamError::Transport(_)) => {
            tracing::warn!(error = %err, "auth upstream unreachable");
            (StatusCode::BAD_GATEWAY, Json(ApiError::from_error(&err))).into_response()
        }
    }
}
