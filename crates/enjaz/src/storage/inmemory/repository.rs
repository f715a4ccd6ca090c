//! In-memory store implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use enjaz_core::storage::{RegistrationStore, Result};
use enjaz_core::Registration;

/// Volatile whole-collection store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    registrations: Arc<RwLock<Vec<Registration>>>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with existing registrations.
    #[cfg(test)]
    pub fn with_registrations(registrations: Vec<Registration>) -> Self {
        Self {
            registrations: Arc::new(RwLock::new(registrations)),
        }
    }
}

#[async_trait]
impl RegistrationStore for InMemoryStore {
    async fn read_all(&self) -> Result<Vec<Registration>> {
        Ok(self.registrations.read().await.clone())
    }

    async fn replace_all(&self, registrations: &[Registration]) -> Result<()> {
        let mut stored = self.registrations.write().await;
        *stored = registrations.to_vec();
        Ok(())
    }
}
