//! Read-modify-write service over a [`RegistrationStore`].
//!
//! Every mutation fetches the full collection, changes it in memory and writes
//! the full collection back. The write lock serializes those sequences within
//! one process, so two concurrent adds of the same student id cannot both pass
//! the duplicate check. Writers in other processes sharing the same document
//! are not covered by the lock and still race (last `replace_all` wins).

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::registration::{
    find_by_id, insert_registration, remove_registration, validate_new_registration,
    NewRegistration, Registration, RegistrationError,
};
use crate::storage::{RegistrationStore, RepositoryError};

/// Errors returned by [`Registry`] operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error(transparent)]
    Registration(#[from] RegistrationError),
    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

/// Registration service bound to one backing store.
pub struct Registry {
    store: Arc<dyn RegistrationStore>,
    write_lock: Mutex<()>,
}

impl Registry {
    pub fn new(store: Arc<dyn RegistrationStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the full collection in insertion order.
    pub async fn list(&self) -> Result<Vec<Registration>, RegistryError> {
        Ok(self.store.read_all().await?)
    }

    /// Returns a single registration by its generated id.
    pub async fn get(&self, id: &str) -> Result<Registration, RegistryError> {
        let registrations = self.store.read_all().await?;
        find_by_id(&registrations, id)
            .cloned()
            .ok_or_else(|| RegistrationError::NotFound(id.to_string()).into())
    }

    /// Validates, deduplicates and appends a new registration.
    ///
    /// Invalid input is rejected before the store is read.
    pub async fn add(&self, new: NewRegistration) -> Result<Registration, RegistryError> {
        validate_new_registration(&new)?;

        let (registration, registrations) = self
            .mutate(|registrations| insert_registration(registrations, new, Utc::now()))
            .await?;

        tracing::info!(
            id = %registration.id,
            student_id = %registration.student_id,
            total = registrations.len(),
            "Added registration"
        );
        Ok(registration)
    }

    /// Removes a registration by its generated id.
    pub async fn delete(&self, id: &str) -> Result<Registration, RegistryError> {
        let (removed, registrations) = self
            .mutate(|registrations| remove_registration(registrations, id))
            .await?;

        tracing::info!(
            id = %removed.id,
            student_id = %removed.student_id,
            total = registrations.len(),
            "Deleted registration"
        );
        Ok(removed)
    }

    /// Runs one serialized read-modify-write against the store.
    ///
    /// `apply` edits the freshly read collection in memory. If it returns an
    /// error nothing is written. On success the whole collection replaces the
    /// stored one and is returned alongside `apply`'s output.
    pub async fn mutate<T, F>(&self, apply: F) -> Result<(T, Vec<Registration>), RegistryError>
    where
        F: FnOnce(&mut Vec<Registration>) -> Result<T, RegistrationError> + Send,
        T: Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut registrations = self.store.read_all().await?;
        let output = apply(&mut registrations)?;
        self.store.replace_all(&registrations).await?;
        Ok((output, registrations))
    }

    /// Overwrites the stored collection without reading it first.
    ///
    /// Holds the write lock, so it never interleaves with [`Registry::mutate`].
    /// An unreadable document is replaced as well.
    pub async fn replace(&self, registrations: &[Registration]) -> Result<(), RegistryError> {
        let _guard = self.write_lock.lock().await;
        self.store.replace_all(registrations).await?;
        Ok(())
    }
}
