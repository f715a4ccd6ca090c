use async_trait::async_trait;

use crate::registration::Registration;

use super::Result;

/// Whole-collection store for registrations.
///
/// Backing stores only offer document-level get/put, so every mutation is a
/// read-modify-write of the full collection. Two writers that read the same
/// base collection will overwrite each other: the last `replace_all` wins.
#[async_trait]
pub trait RegistrationStore: Send + Sync {
    /// Reads the full collection in insertion order.
    async fn read_all(&self) -> Result<Vec<Registration>>;

    /// Replaces the full collection.
    async fn replace_all(&self, registrations: &[Registration]) -> Result<()>;
}
