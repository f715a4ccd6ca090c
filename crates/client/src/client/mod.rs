//! HTTP client for the enjaz registration API.

pub mod registrations;

use enjaz_core::ApiResponse;

use crate::error::{ClientError, Result};

/// HTTP client for the enjaz registration API.
#[derive(Debug, Clone)]
pub struct EnjazClient {
    client: reqwest::Client,
    base_url: String,
}

impl EnjazClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode the `{success, message, data}` envelope, mapping failures to errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<ApiResponse<T>> {
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            return Ok(serde_json::from_slice(&body)?);
        }

        let message = serde_json::from_slice::<ApiResponse<serde_json::Value>>(&body)
            .ok()
            .and_then(|envelope| envelope.message)
            .unwrap_or_else(|| String::from_utf8_lossy(&body).into_owned());

        if status.as_u16() == 404 {
            Err(ClientError::NotFound { resource: message })
        } else {
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Pull `data` out of a successful envelope.
fn require_data<T>(envelope: ApiResponse<T>) -> Result<T> {
    envelope
        .data
        .ok_or_else(|| ClientError::InvalidResponse("response is missing `data`".to_string()))
}
