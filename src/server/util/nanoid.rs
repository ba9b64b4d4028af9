//! Random URL-safe identifiers for profiles, socials, feedback and phrases.

use rand::Rng;

use crate::server::error::AppError;

/// Alphabet of a nanoid, 64 URL-safe characters.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Length of every generated ID.
pub const NANOID_LENGTH: usize = 21;

/// Generates a new 21 character nanoid.
pub fn generate() -> String {
    let mut rng = rand::rng();

    (0..NANOID_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Whether `value` has the shape of an ID produced by [`generate`].
pub fn is_valid(value: &str) -> bool {
    value.len() == NANOID_LENGTH && value.bytes().all(|b| ALPHABET.contains(&b))
}

/// Rejects malformed IDs before any query is made.
///
/// # Arguments
/// - `value` - The ID from a path segment, command option or custom id
/// - `what` - Name of the resource, used in the error message
///
/// # Returns
/// - `Ok(())` - The ID is well formed
/// - `Err(AppError::BadRequest)` - The ID can never match a stored row
pub fn validate(value: &str, what: &str) -> Result<(), AppError> {
    if is_valid(value) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!("Invalid {} ID '{}'", what, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_valid() {
        for _ in 0..100 {
            let id = generate();
            assert_eq!(id.len(), NANOID_LENGTH);
            assert!(is_valid(&id));
        }
    }

    #[test]
    fn generated_ids_differ() {
        assert_ne!(generate(), generate());
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(!is_valid("abc"));
        assert!(!is_valid(&"a".repeat(22)));
        assert!(!is_valid(""));
    }

    #[test]
    fn rejects_foreign_characters() {
        assert!(!is_valid("abcdefghij!lmnopqrstu"));
        assert!(!is_valid("abcdefghij klmnopqrst"));
    }

    #[test]
    fn validate_maps_to_bad_request() {
        assert!(validate(&generate(), "profile").is_ok());
        assert!(matches!(
            validate("nope", "profile"),
            Err(AppError::BadRequest(_))
        ));
    }
}
