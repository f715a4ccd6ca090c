//! Registration API operations.

use enjaz_core::{ApiResponse, NewRegistration, Registration};

use super::{require_data, EnjazClient};
use crate::error::Result;

impl EnjazClient {
    /// List all registrations.
    pub async fn list_registrations(&self) -> Result<Vec<Registration>> {
        let response = self
            .client
            .get(self.url("/api/registrations"))
            .send()
            .await?;
        let envelope: ApiResponse<Vec<Registration>> = self.handle_response(response).await?;
        Ok(envelope.data.unwrap_or_default())
    }

    /// Register a new student.
    pub async fn register(&self, new: &NewRegistration) -> Result<Registration> {
        let response = self
            .client
            .post(self.url("/api/register"))
            .json(new)
            .send()
            .await?;
        require_data(self.handle_response(response).await?)
    }

    /// Get registration by ID.
    pub async fn get_registration(&self, id: &str) -> Result<Registration> {
        let response = self
            .client
            .get(self.url(&format!("/api/registrations/{id}")))
            .send()
            .await?;
        require_data(self.handle_response(response).await?)
    }

    /// Delete registration by ID.
    pub async fn delete_registration(&self, id: &str) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/registrations/{id}")))
            .send()
            .await?;
        let _: ApiResponse<serde_json::Value> = self.handle_response(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use httpmock::prelude::*;
    use serde_json::json;

    fn registration_json(id: &str, student_id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "studentId": student_id,
            "studentName": "Ali",
            "phoneNumber": "555",
            "registeredAt": "2024-09-01T08:30:00.000Z"
        })
    }

    #[tokio::test]
    async fn test_list_registrations() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/registrations");
                then.status(200).json_body(json!({
                    "success": true,
                    "count": 2,
                    "data": [registration_json("a", "S1"), registration_json("b", "S2")]
                }));
            })
            .await;

        let client = EnjazClient::new(server.base_url());
        let registrations = client.list_registrations().await.unwrap();

        mock.assert_async().await;
        assert_eq!(registrations.len(), 2);
        assert_eq!(registrations[1].student_id, "S2");
    }

    #[tokio::test]
    async fn test_register_sends_camel_case_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/register")
                    .json_body(json!({"studentId": "S1", "studentName": "Ali", "phoneNumber": "555"}));
                then.status(200).json_body(json!({
                    "success": true,
                    "message": "Registration successful",
                    "data": registration_json("a", "S1")
                }));
            })
            .await;

        let client = EnjazClient::new(server.base_url());
        let created = client
            .register(&NewRegistration::new("S1", "Ali", "555"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(created.id, "a");
    }

    #[tokio::test]
    async fn test_failure_message_is_extracted() {
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

        let client = EnjazClient::new(server.base_url());
        let result = client
            .register(&NewRegistration::new("S1", "Ali", "555"))
            .await;

        match result {
            Err(ClientError::ServerError { status, message }) => {
                assert_eq!(status, 409);
                assert_eq!(message, "Student ID already registered");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_missing_registration() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/registrations/nope");
                then.status(404).json_body(json!({
                    "success": false,
                    "message": "Registration not found"
                }));
            })
            .await;

        let client = EnjazClient::new(server.base_url());
        let result = client.get_registration("nope").await;

        assert!(matches!(result, Err(ClientError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_success_without_data_is_invalid() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/registrations/a");
                then.status(200).json_body(json!({"success": true}));
            })
            .await;

        let client = EnjazClient::new(server.base_url());
        let result = client.get_registration("a").await;

        assert!(matches!(result, Err(ClientError::InvalidResponse(_))));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = EnjazClient::new("http://localhost:3001/");
        assert_eq!(client.base_url(), "http://localhost:3001");
        assert_eq!(
            client.url("/api/registrations"),
            "http://localhost:3001/api/registrations"
        );
    }
}
