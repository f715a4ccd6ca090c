use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use enjaz_core::{
    http_mapping::registry_error_to_status_code, ApiResponse, RegistrationError, RegistryError,
};

/// JSON failure response: `{success: false, message}` with a mapped status.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Converts a registry error into a user-facing failure.
    ///
    /// `storage_message` is shown when the store itself failed; the
    /// underlying error is only logged.
    pub fn from_registry(error: RegistryError, storage_message: &'static str) -> Self {
        let status = StatusCode::from_u16(registry_error_to_status_code(&error))
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let message = match &error {
            RegistryError::Registration(RegistrationError::MissingFields { .. }) => {
                "All fields are required"
            }
            RegistryError::Registration(RegistrationError::DuplicateStudentId(_)) => {
                "Student ID already registered"
            }
            RegistryError::Registration(RegistrationError::NotFound(_)) => {
                "Registration not found"
            }
            RegistryError::Storage(_) => storage_message,
        };

        if status.is_server_error() {
            tracing::error!(status = %status, error = %error, "Registry failure");
        } else {
            tracing::warn!(status = %status, error = %error, "Request rejected");
        }

        Self::new(status, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ApiResponse::<()>::failure(self.message))).into_response()
    }
}
