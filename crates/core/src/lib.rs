//! enjaz_core - shared types and storage contract for the enjaz registration service.

pub mod http_mapping;
pub mod registration;
pub mod registry;
pub mod serde;
pub mod storage;

pub use registration::{
    find_by_id, find_by_student_id, generate_id, insert_registration, remove_registration,
    validate_new_registration, ApiResponse, NewRegistration, Registration, RegistrationDocument,
    RegistrationError,
};
pub use registry::{Registry, RegistryError};
pub use storage::{RegistrationStore, RepositoryError};
