//! enjaz_client - data access layer and CLI client for enjaz registrations.

pub mod access;
pub mod cli;
pub mod client;
pub mod error;
pub mod output;
pub mod store;

pub use access::{
    AccessError, DataSource, DeleteOutcome, DocumentAccess, Listing, RegistrationAccess,
    StoreState,
};
pub use client::EnjazClient;
pub use error::{ClientError, Result};
pub use store::{LocalFileStore, RemoteDocumentStore};
