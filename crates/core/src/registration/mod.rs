mod error;
mod operations;
mod response;
mod types;

pub use error::RegistrationError;
pub use operations::{
    find_by_id, find_by_student_id, generate_id, insert_registration, remove_registration,
    validate_new_registration,
};
pub use response::ApiResponse;
pub use types::{NewRegistration, Registration, RegistrationDocument};
