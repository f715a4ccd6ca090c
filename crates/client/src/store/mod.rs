//! Backing stores for the client-held data access strategy.
//!
//! Both implement [`enjaz_core::RegistrationStore`] with whole-document
//! semantics: the remote store is the primary, the local file is the fallback.

mod local;
mod remote;

pub use local::{LocalFileStore, DEFAULT_FALLBACK_PATH};
pub use remote::{RemoteDocumentStore, DEFAULT_STORE_ID, DEFAULT_STORE_URL};
