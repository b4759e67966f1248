//! Field validation helpers shared by entity payloads and update builders.

use crate::errors::CoreError;

/// Reject strings longer than `max` characters.
///
/// # Errors
///
/// Returns `CoreError::Validation` naming the field.
pub fn check_max_len(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    let len = value.chars().count();
    if len > max {
        return Err(CoreError::Validation(format!(
            "{field} is {len} characters, maximum is {max}"
        )));
    }
    Ok(())
}

/// Reject empty or whitespace-only strings.
///
/// # Errors
///
/// Returns `CoreError::Validation` naming the field.
pub fn check_not_blank(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Treat an empty optional string as absent. Storage reads `''` back as NULL.
#[must_use]
pub fn empty_as_none(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
