//! Client-held strategy: a primary whole-document store with a local fallback.
//!
//! Every operation tries the primary first. When the primary cannot be read
//! or written the operation is repeated against the fallback and the access
//! layer reports [`StoreState::DegradedToFallback`].
//!
//! The two stores are never reconciled. Writes made while degraded stay in
//! the fallback only and are not forward-ported once the primary recovers;
//! listings then show the primary's data again. Successful primary writes are
//! mirrored into the fallback so it holds the last known collection.
//!
//! The per-store write lock only serializes writers inside this process. Two
//! clients sharing the same remote document can still read the same base
//! collection and overwrite each other's changes (last writer wins).

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;

use enjaz_core::{
    find_by_id, insert_registration, remove_registration, validate_new_registration,
    NewRegistration, Registration, RegistrationError, RegistrationStore, Registry, RegistryError,
};

use super::{AccessError, AccessResult, DeleteOutcome, Listing, RegistrationAccess, StoreState};

/// Data access over a primary store with an on-device fallback.
pub struct DocumentAccess {
    primary: Registry,
    fallback: Registry,
    state: RwLock<StoreState>,
}

impl DocumentAccess {
    pub fn new(primary: Arc<dyn RegistrationStore>, fallback: Arc<dyn RegistrationStore>) -> Self {
        Self {
            primary: Registry::new(primary),
            fallback: Registry::new(fallback),
            state: RwLock::new(StoreState::default()),
        }
    }

    /// Mode observed by the most recent operation.
    pub fn state(&self) -> StoreState {
        self.state
            .read()
            .map(|state| *state)
            .unwrap_or(StoreState::DegradedToFallback)
    }

    fn set_state(&self, next: StoreState) {
        if let Ok(mut state) = self.state.write() {
            if *state != next {
                tracing::info!(from = ?*state, to = ?next, "Store state changed");
            }
            *state = next;
        }
    }

    fn degrade(&self, operation: &'static str, error: &RegistryError) {
        tracing::warn!(operation, error = %error, "Primary store failed, using fallback");
        self.set_state(StoreState::DegradedToFallback);
    }

    /// Overwrites the fallback with the collection just written to the primary.
    ///
    /// The fallback is not read first, so a corrupt local document is repaired.
    async fn mirror(&self, registrations: &[Registration]) {
        if let Err(e) = self.fallback.replace(registrations).await {
            tracing::warn!(error = %e, "Failed to mirror collection into fallback store");
        }
    }
}

/// Maps a fallback failure: store errors mean nothing could serve the request.
fn fallback_error(error: RegistryError) -> AccessError {
    match error {
        RegistryError::Registration(e) => e.into(),
        RegistryError::Storage(e) => {
            tracing::error!(error = %e, "Fallback store failed");
            AccessError::unavailable(e)
        }
    }
}

#[async_trait]
impl RegistrationAccess for DocumentAccess {
    async fn list(&self) -> AccessResult<Listing> {
        match self.primary.list().await {
            Ok(registrations) => {
                self.set_state(StoreState::PrimaryAvailable);
                Ok(Listing::primary(registrations))
            }
            Err(e) => {
                self.degrade("list", &e);
                let registrations = self.fallback.list().await.map_err(fallback_error)?;
                Ok(Listing::fallback(registrations))
            }
        }
    }

    async fn get(&self, id: &str) -> AccessResult<Registration> {
        let listing = self.list().await?;
        find_by_id(&listing.registrations, id)
            .cloned()
            .ok_or(AccessError::NotFound)
    }

    async fn add(&self, new: NewRegistration) -> AccessResult<Registration> {
        validate_new_registration(&new)?;
        let now = Utc::now();

        let primary = self
            .primary
            .mutate(|registrations| insert_registration(registrations, new.clone(), now))
            .await;

        match primary {
            Ok((registration, registrations)) => {
                self.set_state(StoreState::PrimaryAvailable);
                self.mirror(&registrations).await;
                tracing::info!(id = %registration.id, student_id = %registration.student_id, "Registered student");
                Ok(registration)
            }
            Err(RegistryError::Registration(e)) => {
                self.set_state(StoreState::PrimaryAvailable);
                Err(e.into())
            }
            Err(e) => {
                self.degrade("add", &e);
                let (registration, _) = self
                    .fallback
                    .mutate(|registrations| insert_registration(registrations, new, now))
                    .await
                    .map_err(fallback_error)?;
                tracing::info!(id = %registration.id, student_id = %registration.student_id, "Registered student in fallback store only");
                Ok(registration)
            }
        }
    }

    async fn delete(&self, id: &str) -> AccessResult<DeleteOutcome> {
        let primary = self
            .primary
            .mutate(|registrations| remove_registration(registrations, id))
            .await;

        match primary {
            Ok((_, registrations)) => {
                self.set_state(StoreState::PrimaryAvailable);
                self.mirror(&registrations).await;
                Ok(DeleteOutcome::Deleted)
            }
            Err(RegistryError::Registration(RegistrationError::NotFound(_))) => {
                self.set_state(StoreState::PrimaryAvailable);
                Ok(DeleteOutcome::NotFound)
            }
            Err(RegistryError::Registration(e)) => Err(e.into()),
            Err(e) => {
                self.degrade("delete", &e);
                match self
                    .fallback
                    .mutate(|registrations| remove_registration(registrations, id))
                    .await
                {
                    Ok(_) => Ok(DeleteOutcome::Deleted),
                    Err(RegistryError::Registration(RegistrationError::NotFound(_))) => {
                        Ok(DeleteOutcome::NotFound)
                    }
                    Err(e) => Err(fallback_error(e)),
                }
            }
        }
    }
}
