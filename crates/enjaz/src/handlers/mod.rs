pub mod error;
pub mod health;
pub mod registrations;
pub mod static_files;

pub use error::ApiError;
