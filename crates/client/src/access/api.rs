//! Backend API strategy: the server holds the records.

use async_trait::async_trait;

use enjaz_core::{validate_new_registration, NewRegistration, Registration};

use super::{AccessError, AccessResult, DeleteOutcome, Listing, RegistrationAccess};
use crate::{client::EnjazClient, error::ClientError};

impl From<ClientError> for AccessError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound { .. } => AccessError::NotFound,
            ClientError::ServerError { status: 400, .. } => AccessError::MissingFields,
            ClientError::ServerError { status: 409, .. } => AccessError::DuplicateStudentId,
            other => AccessError::unavailable(other),
        }
    }
}

#[async_trait]
impl RegistrationAccess for EnjazClient {
    async fn list(&self) -> AccessResult<Listing> {
        let registrations = self.list_registrations().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to load registrations");
            AccessError::from(e)
        })?;
        Ok(Listing::primary(registrations))
    }

    async fn get(&self, id: &str) -> AccessResult<Registration> {
        Ok(self.get_registration(id).await?)
    }

    async fn add(&self, new: NewRegistration) -> AccessResult<Registration> {
        validate_new_registration(&new)?;
        self.register(&new).await.map_err(|e| {
            tracing::warn!(error = %e, student_id = %new.student_id, "Registration rejected");
            AccessError::from(e)
        })
    }

    async fn delete(&self, id: &str) -> AccessResult<DeleteOutcome> {
        match self.delete_registration(id).await {
            Ok(()) => Ok(DeleteOutcome::Deleted),
            Err(ClientError::NotFound { .. }) => Ok(DeleteOutcome::NotFound),
            Err(e) => {
                tracing::error!(error = %e, id, "Failed to delete registration");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_duplicate_maps_to_access_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/register");
                then.status(409).json_body(json!({
                    "success": false,
                    "message": "Student ID already registered"
                }));
            })
            .await;

        let access = EnjazClient::new(server.base_url());
        let result = access.add(NewRegistration::new("S1", "Ali", "555")).await;

        assert_eq!(result, Err(AccessError::DuplicateStudentId));
    }

    #[tokio::test]
    async fn test_missing_field_rejected_before_request() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/register");
                then.status(200);
            })
            .await;

        let access = EnjazClient::new(server.base_url());
        let result = access.add(NewRegistration::new("", "Ali", "555")).await;

        assert_eq!(result, Err(AccessError::MissingFields));
        assert_eq!(mock.hits_async().await, 0);
    }

    #[tokio::test]
    async fn test_server_side_validation_maps_to_missing_fields() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/register");
                then.status(400).json_body(json!({
                    "success": false,
                    "message": "All fields are required"
                }));
            })
            .await;

        let access = EnjazClient::new(server.base_url());
        let result = access.add(NewRegistration::new("S1", "Ali", "555")).await;

        assert_eq!(result, Err(AccessError::MissingFields));
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_benign() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(DELETE).path("/api/registrations/never-issued");
                then.status(404).json_body(json!({
                    "success": false,
                    "message": "Registration not found"
                }));
            })
            .await;

        let access = EnjazClient::new(server.base_url());
        let outcome = access.delete("never-issued").await;

        assert_eq!(outcome, Ok(DeleteOutcome::NotFound));
    }

    #[tokio::test]
    async fn test_delete_existing() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(DELETE).path("/api/registrations/abc");
                then.status(200).json_body(json!({
                    "success": true,
                    "message": "Registration deleted successfully"
                }));
            })
            .await;

        let access = EnjazClient::new(server.base_url());
        assert_eq!(access.delete("abc").await, Ok(DeleteOutcome::Deleted));
    }

    #[tokio::test]
    async fn test_list_empty() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/registrations");
                then.status(200)
                    .json_body(json!({"success": true, "count": 0, "data": []}));
            })
            .await;

        let access = EnjazClient::new(server.base_url());
        let listing = access.list().await.unwrap();

        assert!(listing.registrations.is_empty());
        assert_eq!(listing.source, crate::DataSource::Primary);
    }

    #[tokio::test]
    async fn test_list_unreachable_backend() {
        let access = EnjazClient::new("http://127.0.0.1:1");

        let result = access.list().await;

        assert!(matches!(result, Err(AccessError::Unavailable { .. })));
    }
}
