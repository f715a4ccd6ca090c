//! In-memory storage backend.
//!
//! Holds the registration collection in a `Vec` wrapped in `Arc<RwLock<_>>`.
//!
//! # Example
//!
//! ```rust,ignore
//! use enjaz::storage::inmemory::InMemoryStore;
//!
//! let store = InMemoryStore::new();
//! let registry = Registry::new(Arc::new(store));
//! ```

mod repository;

pub use repository::InMemoryStore;
