//! Must-have ingredients validator
//!
//! Pure check of a field value against the allowed character set.

use super::charset::is_allowed;
use crate::error::ValidationError;

/// Validates the must-have ingredients value.
///
/// Stops at the first disallowed character. The empty string is valid and
/// no trimming is applied.
pub fn validate_must_have(value: &str) -> Result<(), ValidationError> {
    match value.chars().enumerate().find(|&(_, ch)| !is_allowed(ch)) {
        Some((position, ch)) => Err(ValidationError::InvalidCharacter { ch, position }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ingredient_lists() {
        assert!(validate_must_have("chicken, rice").is_ok());
        assert!(validate_must_have("O'Brien's greens").is_ok());
        assert!(validate_must_have("SWEET-POTATO").is_ok());
        assert!(validate_must_have("   ").is_ok());
    }

    #[test]
    fn test_empty_value_is_valid() {
        assert!(validate_must_have("").is_ok());
    }

    #[test]
    fn test_ampersand_rejected() {
        assert_eq!(
            validate_must_have("chicken & rice"),
            Err(ValidationError::InvalidCharacter { ch: '&', position: 8 })
        );
    }

    #[test]
    fn test_digits_rejected() {
        let err = validate_must_have("123").unwrap_err();
        assert_eq!(err, ValidationError::InvalidCharacter { ch: '1', position: 0 });
        assert_eq!(
            err.user_message(),
            "invalid character in must-have ingredients. please try again!"
        );
    }

    #[test]
    fn test_position_counts_chars_not_bytes() {
        assert_eq!(
            validate_must_have("jalapeño!"),
            Err(ValidationError::InvalidCharacter { ch: 'ñ', position: 6 })
        );
    }
}
