use chrono::{DateTime, Utc};
use rand::Rng;

use super::error::RegistrationError;
use super::types::{NewRegistration, Registration};

const ID_SUFFIX_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Checks that every caller-supplied field holds a value.
///
/// Presence only: no format or length rules apply. All missing fields are
/// reported together, in wire order.
pub fn validate_new_registration(new: &NewRegistration) -> Result<(), RegistrationError> {
    let fields: Vec<&'static str> = [
        ("studentId", &new.student_id),
        ("studentName", &new.student_name),
        ("phoneNumber", &new.phone_number),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_empty())
    .map(|(name, _)| name)
    .collect();

    if fields.is_empty() {
        Ok(())
    } else {
        Err(RegistrationError::MissingFields { fields })
    }
}

/// Generates an opaque registration id: the base-36 millisecond timestamp
/// followed by a random base-36 suffix.
pub fn generate_id(now: DateTime<Utc>) -> String {
    let millis = u64::try_from(now.timestamp_millis()).unwrap_or_default();
    let mut id = to_base36(millis);

    let mut rng = rand::rng();
    id.extend((0..ID_SUFFIX_LEN).map(|_| BASE36[rng.random_range(0..BASE36.len())] as char));
    id
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

/// Finds a registration by its generated id.
pub fn find_by_id<'a>(registrations: &'a [Registration], id: &str) -> Option<&'a Registration> {
    registrations.iter().find(|r| r.id == id)
}

/// Finds a registration by its natural key.
pub fn find_by_student_id<'a>(
    registrations: &'a [Registration],
    student_id: &str,
) -> Option<&'a Registration> {
    registrations.iter().find(|r| r.student_id == student_id)
}

/// Appends a new registration to an in-memory collection.
///
/// Rejects invalid input and duplicate student ids without touching the
/// collection. The new record goes to the end so insertion order is kept.
pub fn insert_registration(
    registrations: &mut Vec<Registration>,
    new: NewRegistration,
    now: DateTime<Utc>,
) -> Result<Registration, RegistrationError> {
    validate_new_registration(&new)?;

    if find_by_student_id(registrations, &new.student_id).is_some() {
        return Err(RegistrationError::DuplicateStudentId(new.student_id));
    }

    let registration = Registration::from_new(new, generate_id(now), now);
    registrations.push(registration.clone());
    Ok(registration)
}

/// Removes the registration with the given id, keeping the order of the rest.
pub fn remove_registration(
    registrations: &mut Vec<Registration>,
    id: &str,
) -> Result<Registration, RegistrationError> {
    let index = registrations
        .iter()
        .position(|r| r.id == id)
        .ok_or_else(|| RegistrationError::NotFound(id.to_string()))?;
    Ok(registrations.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 9, 1, 8, 30, 0).unwrap()
    }

    fn ali() -> NewRegistration {
        NewRegistration::new("S1", "Ali", "555")
    }

    #[test]
    fn test_validate_accepts_complete_input() {
        assert_eq!(validate_new_registration(&ali()), Ok(()));
    }

    #[test]
    fn test_validate_reports_single_missing_field() {
        let new = NewRegistration::new("", "Ali", "555");
        assert_eq!(
            validate_new_registration(&new),
            Err(RegistrationError::MissingFields {
                fields: vec!["studentId"]
            })
        );
    }

    #[test]
    fn test_validate_reports_all_missing_fields_in_order() {
        let new = NewRegistration::new("", "Ali", "");
        assert_eq!(
            validate_new_registration(&new),
            Err(RegistrationError::MissingFields {
                fields: vec!["studentId", "phoneNumber"]
            })
        );
    }

    #[test]
    fn test_validate_accepts_whitespace_values() {
        let new = NewRegistration::new(" ", "Ali", "\t");
        assert_eq!(validate_new_registration(&new), Ok(()));
    }

    #[test]
    fn test_validate_has_no_format_rules() {
        let new = NewRegistration::new("x", "y", "not-a-phone");
        assert!(validate_new_registration(&new).is_ok());
    }

    #[test]
    fn test_to_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_717_170_917_171), "lwuv87jn");
    }

    #[test]
    fn test_generate_id_starts_with_timestamp() {
        let id = generate_id(now());
        let prefix = to_base36(now().timestamp_millis() as u64);

        assert!(id.starts_with(&prefix));
        assert_eq!(id.len(), prefix.len() + ID_SUFFIX_LEN);
        assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_generate_id_differs_within_same_millisecond() {
        let ids: std::collections::HashSet<String> = (0..100).map(|_| generate_id(now())).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_insert_appends_with_generated_fields() {
        let mut registrations = Vec::new();

        let created = insert_registration(&mut registrations, ali(), now()).unwrap();

        assert_eq!(registrations.len(), 1);
        assert_eq!(registrations[0], created);
        assert_eq!(created.student_id, "S1");
        assert_eq!(created.registered_at, now());
        assert!(!created.id.is_empty());
    }

    #[test]
    fn test_insert_keeps_insertion_order() {
        let mut registrations = Vec::new();
        for student_id in ["S3", "S1", "S2"] {
            insert_registration(
                &mut registrations,
                NewRegistration::new(student_id, "Name", "1"),
                now(),
            )
            .unwrap();
        }

        let order: Vec<&str> = registrations.iter().map(|r| r.student_id.as_str()).collect();
        assert_eq!(order, vec!["S3", "S1", "S2"]);
    }

    #[test]
    fn test_insert_rejects_duplicate_student_id() {
        let mut registrations = Vec::new();
        insert_registration(&mut registrations, ali(), now()).unwrap();

        let result = insert_registration(
            &mut registrations,
            NewRegistration::new("S1", "Someone Else", "777"),
            now(),
        );

        assert_eq!(
            result,
            Err(RegistrationError::DuplicateStudentId("S1".to_string()))
        );
        assert_eq!(registrations.len(), 1);
        assert_eq!(registrations[0].student_name, "Ali");
    }

    #[test]
    fn test_insert_rejects_missing_fields_without_mutation() {
        let mut registrations = Vec::new();

        let result = insert_registration(
            &mut registrations,
            NewRegistration::new("", "Ali", "555"),
            now(),
        );

        assert!(matches!(
            result,
            Err(RegistrationError::MissingFields { .. })
        ));
        assert!(registrations.is_empty());
    }

    #[test]
    fn test_remove_existing_keeps_order() {
        let mut registrations = Vec::new();
        let ids: Vec<String> = ["S1", "S2", "S3"]
            .into_iter()
            .map(|s| {
                insert_registration(&mut registrations, NewRegistration::new(s, "N", "1"), now())
                    .unwrap()
                    .id
            })
            .collect();

        let removed = remove_registration(&mut registrations, &ids[1]).unwrap();

        assert_eq!(removed.student_id, "S2");
        let order: Vec<&str> = registrations.iter().map(|r| r.student_id.as_str()).collect();
        assert_eq!(order, vec!["S1", "S3"]);
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut registrations = Vec::new();
        insert_registration(&mut registrations, ali(), now()).unwrap();

        let result = remove_registration(&mut registrations, "never-issued");

        assert_eq!(
            result,
            Err(RegistrationError::NotFound("never-issued".to_string()))
        );
        assert_eq!(registrations.len(), 1);
    }

    #[test]
    fn test_find_helpers() {
        let mut registrations = Vec::new();
        let created = insert_registration(&mut registrations, ali(), now()).unwrap();

        assert_eq!(find_by_id(&registrations, &created.id), Some(&created));
        assert_eq!(find_by_student_id(&registrations, "S1"), Some(&created));
        assert!(find_by_id(&registrations, "S1").is_none());
        assert!(find_by_student_id(&registrations, "S2").is_none());
    }
}
