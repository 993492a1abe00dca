//! Data model for Norwegian birth numbers (fødselsnummer).
//!
//! A birth number is an 11-digit code: six date-of-birth digits (`ddMMyy`),
//! a 3-digit individual number whose allocation band encodes the century
//! and whose parity encodes the gender, and two weighted mod-11 control
//! digits. This crate owns the validated [`BirthNumber`] value type, the
//! checksum arithmetic, and the century-band lookup; it performs no I/O.

pub mod birth_number;
pub mod century;
pub mod checksum;
pub mod error;

pub use birth_number::{BirthNumber, Gender};
pub use century::century_for;
pub use checksum::{first_checksum_digit, second_checksum_digit};
pub use error::{Result, ValidationError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_surfaces_typed_errors() {
        assert!(matches!(
            BirthNumber::parse("1234567890"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            BirthNumber::parse("01019512345"),
            Err(ValidationError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn birth_number_serializes_as_string() {
        let number = BirthNumber::parse("01019512394").expect("valid number");
        let json = serde_json::to_string(&number).expect("serialize");
        assert_eq!(json, "\"01019512394\"");
        let round: BirthNumber = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(round, number);
    }
}
