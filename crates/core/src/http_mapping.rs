//! Pure functions for mapping registry errors to HTTP status codes.

use crate::registration::RegistrationError;
use crate::registry::RegistryError;

/// Maps a [`RegistryError`] to an HTTP status code.
///
/// - `MissingFields` -> 400 (Bad Request)
/// - `NotFound` -> 404 (Not Found)
/// - `DuplicateStudentId` -> 409 (Conflict)
/// - any store failure -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use enjaz_core::http_mapping::registry_error_to_status_code;
/// use enjaz_core::{RegistrationError, RegistryError};
///
/// let error = RegistryError::from(RegistrationError::DuplicateStudentId("S1".into()));
/// assert_eq!(registry_error_to_status_code(&error), 409);
/// ```
pub fn registry_error_to_status_code(error: &RegistryError) -> u16 {
    match error {
        RegistryError::Registration(RegistrationError::MissingFields { .. }) => 400,
        RegistryError::Registration(RegistrationError::NotFound(_)) => 404,
        RegistryError::Registration(RegistrationError::DuplicateStudentId(_)) => 409,
        RegistryError::Storage(_) => 500,
    }
}
