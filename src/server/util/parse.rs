use crate::server::error::{internal::InternalError, AppError};

/// Parses a Discord ID stored as a string column back into a `u64`.
///
/// Discord IDs are stored as strings because SQLite has no unsigned 64-bit integer type.
///
/// # Arguments
/// - `value` - The stored string
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed ID
/// - `Err(AppError::InternalErr(ParseStringId))` - The stored value is not a valid u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|source| InternalError::ParseStringId { value, source })?;

    Ok(result)
}

/// Parses an ID into a `u64` for a request path or command option.
///
/// Unlike [`parse_u64_from_string`] a failure here is the caller's fault and maps to a
/// 400 Bad Request.
pub fn parse_discord_id(value: &str) -> Result<u64, AppError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| AppError::BadRequest(format!("'{}' is not a valid Discord ID", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_id_round_trips() {
        let id = parse_u64_from_string("123456789012345678".to_string()).unwrap();
        assert_eq!(id, 123456789012345678);
    }

    #[test]
    fn corrupt_stored_id_is_internal() {
        let result = parse_u64_from_string("abc".to_string());
        assert!(matches!(result, Err(AppError::InternalErr(_))));
    }

    #[test]
    fn bad_request_id_is_expected() {
        let result = parse_discord_id("not-an-id");
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
