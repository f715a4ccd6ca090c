use thiserror::Error;

/// Errors that can occur when validating or manipulating registrations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("All fields are required (missing: {})", fields.join(", "))]
    MissingFields { fields: Vec<&'static str> },
    #[error("Student ID already registered: {0}")]
    DuplicateStudentId(String),
    #[error("Registration not found: {0}")]
    NotFound(String),
}
