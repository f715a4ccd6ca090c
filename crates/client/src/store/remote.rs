//! Remote JSON document store.
//!
//! The whole collection lives in one document, `{"data": [...]}`, fetched with
//! `GET {base}/{store_id}` and replaced with `PUT {base}/{store_id}`. A `404`
//! on `GET` means the document was never written and reads as empty.

use async_trait::async_trait;
use reqwest::StatusCode;

use enjaz_core::storage::{RegistrationStore, RepositoryError, Result};
use enjaz_core::{Registration, RegistrationDocument};

/// Public document store endpoint used by the registration form.
pub const DEFAULT_STORE_URL: &str = "https://jsonstorage.app/api/v1/stores";

/// Store identifier shared by every client of the form.
pub const DEFAULT_STORE_ID: &str = "enjaz-registration-kuwait";

/// Whole-document store reached over HTTP.
#[derive(Debug, Clone)]
pub struct RemoteDocumentStore {
    client: reqwest::Client,
    document_url: String,
}

impl RemoteDocumentStore {
    pub fn new(base_url: impl AsRef<str>, store_id: impl AsRef<str>) -> Self {
        Self {
            client: reqwest::Client::new(),
            document_url: format!(
                "{}/{}",
                base_url.as_ref().trim_end_matches('/'),
                store_id.as_ref()
            ),
        }
    }

    pub fn document_url(&self) -> &str {
        &self.document_url
    }
}

impl Default for RemoteDocumentStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_URL, DEFAULT_STORE_ID)
    }
}

fn connection_error(err: reqwest::Error) -> RepositoryError {
    RepositoryError::ConnectionFailed(err.to_string())
}

#[async_trait]
impl RegistrationStore for RemoteDocumentStore {
    async fn read_all(&self) -> Result<Vec<Registration>> {
        let response = self
            .client
            .get(&self.document_url)
            .send()
            .await
            .map_err(connection_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!(url = %self.document_url, "Document not created yet");
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(RepositoryError::UnexpectedStatus {
                operation: "GET",
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(connection_error)?;
        let document: RegistrationDocument = serde_json::from_slice(&body)?;
        Ok(document.data)
    }

    async fn replace_all(&self, registrations: &[Registration]) -> Result<()> {
        let response = self
            .client
            .put(&self.document_url)
            .json(&serde_json::json!({ "data": registrations }))
            .send()
            .await
            .map_err(connection_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RepositoryError::UnexpectedStatus {
                operation: "PUT",
                status: status.as_u16(),
            });
        }

        tracing::debug!(
            url = %self.document_url,
            total = registrations.len(),
            "Replaced remote document"
        );
        Ok(())
    }
}
