//! JSON output formatting for tomo.

use serde::Serialize;

use crate::error::TomoError;

/// Serialize a value as pretty-printed JSON.
///
/// # Errors
///
/// Returns `TomoError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, TomoError> {
    Ok(serde_json::to_string_pretty(value)?)
}
