//! Error types for birth number validation.

use thiserror::Error;

/// Errors that can occur when validating or assembling a birth number.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Input is not exactly 11 ASCII decimal digits.
    #[error("birth number must be exactly 11 ASCII digits, got {input:?}")]
    InvalidFormat { input: String },

    /// Digits are well-formed but a checksum digit does not match the
    /// value computed from the preceding digits.
    #[error("checksum digit at position {position} mismatch: expected {expected}, found {found}")]
    ChecksumMismatch {
        position: usize,
        expected: u8,
        found: u8,
    },

    /// The weighted sum reduces to a remainder for which no control digit
    /// exists. Routine outcome during exhaustive generation, roughly one
    /// candidate in eleven.
    #[error("no valid checksum digit exists for the given digits")]
    NoValidChecksum,
}

/// Result type for birth number operations.
pub type Result<T> = std::result::Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ValidationError::ChecksumMismatch {
            position: 9,
            expected: 9,
            found: 4,
        };
        assert_eq!(
            err.to_string(),
            "checksum digit at position 9 mismatch: expected 9, found 4"
        );
    }

    #[test]
    fn test_invalid_format_quotes_input() {
        let err = ValidationError::InvalidFormat {
            input: "abc".to_string(),
        };
        assert!(err.to_string().contains("\"abc\""));
    }
}
