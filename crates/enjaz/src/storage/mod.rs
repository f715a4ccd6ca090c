//! Storage backend implementations.
//!
//! The server keeps registrations in process memory only; everything is lost
//! when the process stops.

pub mod inmemory;

pub use inmemory::InMemoryStore;
