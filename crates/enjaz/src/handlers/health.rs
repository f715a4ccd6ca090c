//! Health check endpoints.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/healthz` - Store readability and registration count

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::state::AppState;

/// GET /livez - Basic liveness probe.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Reads the store and reports the registration count.
#[axum::debug_handler]
pub async fn healthz(State(state): State<AppState>) -> Response {
    match state.registry.list().await {
        Ok(registrations) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "healthy": true,
                "registrations": registrations.len(),
            })),
        )
            .into_response(),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({
                "healthy": false,
                "error": e.to_string(),
            })),
        )
            .into_response(),
    }
}
