//! Registration API handlers.
//!
//! Every handler goes through the shared [`enjaz_core::Registry`], which does
//! the read-modify-write against the store.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use enjaz_core::{ApiResponse, NewRegistration, Registration};

use crate::{handlers::ApiError, state::AppState};

/// Register a student (POST /api/register).
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<NewRegistration>, JsonRejection>,
) -> Result<Json<ApiResponse<Registration>>, ApiError> {
    let Json(payload) = payload.map_err(|e| {
        tracing::warn!(error = %e, "Rejected registration body");
        ApiError::bad_request("All fields are required")
    })?;

    tracing::debug!(student_id = %payload.student_id, "Received registration request");

    let registration = state
        .registry
        .add(payload)
        .await
        .map_err(|e| ApiError::from_registry(e, "Failed to save registration"))?;

    Ok(Json(
        ApiResponse::ok(registration).with_message("Registration successful"),
    ))
}

/// List all registrations in insertion order (GET /api/registrations).
pub async fn list_registrations(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Registration>>>, ApiError> {
    let registrations = state
        .registry
        .list()
        .await
        .map_err(|e| ApiError::from_registry(e, "Failed to load registrations"))?;

    let count = registrations.len();
    Ok(Json(ApiResponse::ok(registrations).with_count(count)))
}

/// Get a single registration (GET /api/registrations/{id}).
pub async fn get_registration(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Registration>>, ApiError> {
    let registration = state
        .registry
        .get(&id)
        .await
        .map_err(|e| ApiError::from_registry(e, "Failed to load registrations"))?;

    Ok(Json(ApiResponse::ok(registration)))
}

/// Delete a registration (DELETE /api/registrations/{id}).
pub async fn delete_registration(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state
        .registry
        .delete(&id)
        .await
        .map_err(|e| ApiError::from_registry(e, "Failed to delete registration"))?;

    Ok(Json(ApiResponse::done("Registration deleted successfully")))
}
