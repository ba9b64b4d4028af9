//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary
//! or rendered into embeds by the bot. Parameter types carry their own validation so the
//! REST API and the bot enforce identical limits.

pub mod feedback;
pub mod phrase;
pub mod profile;
pub mod stats;
pub mod user;

use crate::server::error::AppError;

/// Rejects `value` unless its length in characters lies in `min..=max`.
///
/// # Arguments
/// - `field` - Field name used in the error message
/// - `value` - The value to check, already trimmed by the caller
/// - `min` / `max` - Inclusive character bounds
///
/// # Returns
/// - `Ok(())` - Length within bounds
/// - `Err(AppError::BadRequest)` - Too short or too long
pub(crate) fn check_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), AppError> {
    let len = value.chars().count();

    if len < min {
        if min == 1 {
            return Err(AppError::BadRequest(format!("{} must not be empty", field)));
        }
        return Err(AppError::BadRequest(format!(
            "{} must be at least {} characters",
            field, min
        )));
    }
    if len > max {
        return Err(AppError::BadRequest(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }

    Ok(())
}

/// Trims an optional text field, turning blank input into `None`.
pub(crate) fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
