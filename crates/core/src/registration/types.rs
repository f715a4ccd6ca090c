use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::serde::deserialize_null_as_default;

/// A stored student registration.
///
/// `id` and `registered_at` are assigned by the writing side when the record
/// is created and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: String,
    /// Natural key used for duplicate detection.
    pub student_id: String,
    pub student_name: String,
    pub phone_number: String,
    pub registered_at: DateTime<Utc>,
}

impl Registration {
    /// Builds a registration from caller input with a writer-assigned id and timestamp.
    pub fn from_new(new: NewRegistration, id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            student_id: new.student_id,
            student_name: new.student_name,
            phone_number: new.phone_number,
            registered_at: now,
        }
    }
}

/// Caller-supplied fields for a new registration.
///
/// Missing or `null` fields decode as empty strings so that validation can
/// report every missing field at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRegistration {
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub student_id: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub student_name: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub phone_number: String,
}

impl NewRegistration {
    pub fn new(
        student_id: impl Into<String>,
        student_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            student_name: student_name.into(),
            phone_number: phone_number.into(),
        }
    }
}

/// Whole-collection document as exchanged with a remote document store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationDocument {
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub data: Vec<Registration>,
}

impl From<Vec<Registration>> for RegistrationDocument {
    fn from(data: Vec<Registration>) -> Self {
        Self { data }
    }
}
