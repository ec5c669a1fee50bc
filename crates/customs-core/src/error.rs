//! # Error Types
//!
//! Errors raised by the validated newtype constructors. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! Validating a shipment item never produces one of these: a malformed HSN
//! code is reported as `ValidationStatus::Invalid` in the result. Table
//! loaders in `customs-tables` wrap this type in their own error enum.

use thiserror::Error;

/// Errors raised by validated newtype constructors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// HSN codes must be exactly eight ASCII digits.
    #[error("invalid HSN code {0:?}: expected exactly 8 digits")]
    InvalidHsnCode(String),

    /// Country codes must be non-empty after trimming.
    #[error("country code must not be empty")]
    EmptyCountryCode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::InvalidHsnCode("12ab".into());
        assert_eq!(
            err.to_string(),
            "invalid HSN code \"12ab\": expected exactly 8 digits"
        );
        assert_eq!(
            ValidationError::EmptyCountryCode.to_string(),
            "country code must not be empty"
        );
    }

    #[test]
    fn test_validation_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&ValidationError::EmptyCountryCode);
    }
}
