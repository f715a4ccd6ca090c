//! Data access layer for registrations.
//!
//! Presentation code talks to [`RegistrationAccess`] only. Two strategies sit
//! behind it:
//!
//! - [`EnjazClient`](crate::EnjazClient): the backend API holds the records.
//! - [`DocumentAccess`]: the client holds the records in a remote document,
//!   degrading to a local fallback document when the remote is unreachable.
//!
//! Every failure comes back as an [`AccessError`] carrying a short message
//! suitable for showing to the person filling in the form.

mod api;
mod document;

use async_trait::async_trait;
use thiserror::Error;

use enjaz_core::{NewRegistration, Registration, RegistrationError};

pub use document::DocumentAccess;

/// Failures surfaced to presentation code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("All fields are required")]
    MissingFields,
    #[error("Student ID already registered")]
    DuplicateStudentId,
    #[error("Registration not found")]
    NotFound,
    /// Neither the primary nor any fallback could serve the request.
    #[error("Could not reach the registration store")]
    Unavailable { reason: String },
}

impl AccessError {
    pub(crate) fn unavailable(reason: impl ToString) -> Self {
        Self::Unavailable {
            reason: reason.to_string(),
        }
    }
}

impl From<RegistrationError> for AccessError {
    fn from(err: RegistrationError) -> Self {
        match err {
            RegistrationError::MissingFields { .. } => Self::MissingFields,
            RegistrationError::DuplicateStudentId(_) => Self::DuplicateStudentId,
            RegistrationError::NotFound(_) => Self::NotFound,
        }
    }
}

/// Result type for data access operations.
pub type AccessResult<T> = std::result::Result<T, AccessError>;

/// Which store answered a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Primary,
    Fallback,
}

/// Mode observed by the most recent operation of a [`DocumentAccess`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoreState {
    #[default]
    PrimaryAvailable,
    DegradedToFallback,
}

/// Registrations returned by `list`, tagged with the store they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub registrations: Vec<Registration>,
    pub source: DataSource,
}

impl Listing {
    pub fn primary(registrations: Vec<Registration>) -> Self {
        Self {
            registrations,
            source: DataSource::Primary,
        }
    }

    pub fn fallback(registrations: Vec<Registration>) -> Self {
        Self {
            registrations,
            source: DataSource::Fallback,
        }
    }
}

/// Result of a delete. Deleting an unknown id is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

/// The single integration point between presentation code and storage.
#[async_trait]
pub trait RegistrationAccess: Send + Sync {
    /// Returns the full ordered collection, from a fallback if necessary.
    async fn list(&self) -> AccessResult<Listing>;

    /// Returns one registration by its generated id.
    async fn get(&self, id: &str) -> AccessResult<Registration>;

    /// Validates and stores a new registration, returning it with its id.
    async fn add(&self, new: NewRegistration) -> AccessResult<Registration>;

    /// Removes a registration by its generated id.
    async fn delete(&self, id: &str) -> AccessResult<DeleteOutcome>;
}
