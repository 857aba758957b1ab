//! Input validation helpers
//!
//! Centralized text length constants and validation functions for
//! dashboard forms.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Names: dish, kitchen, vendor, bank account holder
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions, reject reasons, chat messages
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: phone, FSSAI number, IFSC code, account number
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
///
/// An empty value reports "Please fill all required fields".
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::required_field(field));
    }
    validate_text_len(value, field, max_len)
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value {
        validate_text_len(v, field, max_len)?;
    }
    Ok(())
}

/// Validate only the length limit; empty values pass.
pub fn validate_text_len(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Samosa", "name", MAX_NAME_LEN).is_ok());
        let err = validate_required_text("  ", "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        let err = validate_required_text("abcdef", "name", 3).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text(&None, "description", 3).is_ok());
        assert!(validate_optional_text(&Some("abc".into()), "description", 3).is_ok());
        assert!(validate_optional_text(&Some("abcd".into()), "description", 3).is_err());
    }
}
