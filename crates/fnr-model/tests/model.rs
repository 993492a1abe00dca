//! Tests for fnr-model types.

use fnr_model::{BirthNumber, Gender, ValidationError, century_for, first_checksum_digit};

#[test]
fn parse_valid_number() {
    let number = BirthNumber::parse("01019512394").expect("valid number");
    assert_eq!(number.as_str(), "01019512394");
    assert_eq!(number.day(), "01");
    assert_eq!(number.month(), "01");
    assert_eq!(number.year_suffix(), "95");
    assert_eq!(number.individual_number(), 123);
    assert_eq!(number.gender(), Gender::Male);
    assert_eq!(number.century(), Some("19"));
}

#[test]
fn parse_valid_female_number() {
    let number = BirthNumber::parse("01019512475").expect("valid number");
    assert_eq!(number.individual_number(), 124);
    assert_eq!(number.gender(), Gender::Female);
}

#[test]
fn parse_rejects_wrong_length() {
    assert_eq!(
        BirthNumber::parse("1234567890"),
        Err(ValidationError::InvalidFormat {
            input: "1234567890".to_string()
        })
    );
    assert!(matches!(
        BirthNumber::parse("123456789012"),
        Err(ValidationError::InvalidFormat { .. })
    ));
    assert!(matches!(
        BirthNumber::parse(""),
        Err(ValidationError::InvalidFormat { .. })
    ));
}

#[test]
fn parse_rejects_non_digits() {
    assert!(matches!(
        BirthNumber::parse("0101951239x"),
        Err(ValidationError::InvalidFormat { .. })
    ));
    // Multi-byte characters must not slip through the length check.
    assert!(matches!(
        BirthNumber::parse("0101951239å"),
        Err(ValidationError::InvalidFormat { .. })
    ));
}

#[test]
fn parse_rejects_wrong_first_checksum() {
    assert_eq!(
        BirthNumber::parse("01019512345"),
        Err(ValidationError::ChecksumMismatch {
            position: 9,
            expected: 9,
            found: 4,
        })
    );
}

#[test]
fn parse_rejects_wrong_second_checksum() {
    assert_eq!(
        BirthNumber::parse("01019512390"),
        Err(ValidationError::ChecksumMismatch {
            position: 10,
            expected: 4,
            found: 0,
        })
    );
}

#[test]
fn parse_is_idempotent() {
    let number = BirthNumber::parse("01019512394").expect("valid number");
    let again = BirthNumber::parse(number.as_str()).expect("canonical form re-parses");
    assert_eq!(number, again);
}

#[test]
fn from_str_matches_parse() {
    let number: BirthNumber = "01019512394".parse().expect("valid number");
    assert_eq!(number.as_str(), "01019512394");
}

#[test]
fn century_band_gap_does_not_invalidate() {
    // Individual number 800 lies in the unallocated band. The digit string
    // can still be checksum-correct; only the century is undefined.
    assert_eq!(century_for(800), None);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn parse_never_panics(input in ".{0,16}") {
            let _ = BirthNumber::parse(&input);
        }

        #[test]
        fn checksum_is_pure(digits in proptest::array::uniform9(0u8..=9)) {
            prop_assert_eq!(
                first_checksum_digit(&digits),
                first_checksum_digit(&digits)
            );
        }

        #[test]
        fn checksum_digit_in_range(digits in proptest::array::uniform9(0u8..=9)) {
            if let Ok(digit) = first_checksum_digit(&digits) {
                prop_assert!(digit <= 9);
            }
        }
    }
}
