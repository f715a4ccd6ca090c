//! Serde helper functions for loosely-typed JSON documents.
//!
//! Browsers and third-party document stores send `null` where a value was never
//! set. These helpers fold `null` into the type's default instead of failing.

use serde::{Deserialize, Deserializer};

/// Deserialize an optional value, treating `null` as `T::default()`.
///
/// Combine with `#[serde(default)]` so that absent fields behave the same way.
pub fn deserialize_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let value: Option<T> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
