//! Shared application state passed to every request handler.

use std::sync::Arc;

use enjaz_core::{RegistrationStore, Registry};

use crate::{config::Config, storage::InMemoryStore};

/// Shared application state.
///
/// Cloned for each request handler. All handlers go through the same
/// [`Registry`], whose write lock serializes registrations and deletions.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates state backed by a fresh in-memory store.
    pub fn new(config: Config) -> Self {
        Self::with_store(Arc::new(InMemoryStore::new()), config)
    }

    /// Creates state backed by the given store.
    pub fn with_store(store: Arc<dyn RegistrationStore>, config: Config) -> Self {
        Self {
            registry: Arc::new(Registry::new(store)),
            config: Arc::new(config),
        }
    }
}
