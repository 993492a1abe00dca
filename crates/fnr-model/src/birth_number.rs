//! The validated birth number value type.

use std::fmt;
use std::str::FromStr;

use crate::century::century_for;
use crate::checksum::{first_checksum_digit, second_checksum_digit};
use crate::error::ValidationError;

/// Gender encoded by a birth number.
///
/// The parity of the individual number's last digit carries the gender:
/// even means female, odd means male.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Derive the gender from an individual number.
    pub fn from_individual_number(individual_number: u16) -> Self {
        if individual_number % 2 == 0 {
            Gender::Female
        } else {
            Gender::Male
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated Norwegian birth number.
///
/// Wraps exactly 11 ASCII decimal digits: `ddMMyy` date-of-birth digits,
/// a 3-digit individual number, and two mod-11 control digits. Leading
/// zeros are significant, so the canonical form is always the full
/// 11-character string. Values compare, hash, and order by that string.
///
/// Construction always validates: [`BirthNumber::parse`] rejects anything
/// that is not 11 digits or whose control digits do not match.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BirthNumber {
    digits: String,
}

impl BirthNumber {
    /// Parse and validate an 11-digit string.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::InvalidFormat`] if the input is not exactly
    ///   11 ASCII decimal digits.
    /// - [`ValidationError::NoValidChecksum`] if the leading digits admit
    ///   no legal control digit at all.
    /// - [`ValidationError::ChecksumMismatch`] if a control digit differs
    ///   from the computed value.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if input.len() != 11 || !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidFormat {
                input: input.to_string(),
            });
        }

        let mut values = [0u8; 11];
        for (slot, byte) in values.iter_mut().zip(input.bytes()) {
            *slot = byte - b'0';
        }

        let mut head = [0u8; 9];
        head.copy_from_slice(&values[..9]);
        let first = first_checksum_digit(&head)?;
        if first != values[9] {
            return Err(ValidationError::ChecksumMismatch {
                position: 9,
                expected: first,
                found: values[9],
            });
        }
        let mut head = [0u8; 10];
        head.copy_from_slice(&values[..10]);
        let second = second_checksum_digit(&head)?;
        if second != values[10] {
            return Err(ValidationError::ChecksumMismatch {
                position: 10,
                expected: second,
                found: values[10],
            });
        }

        Ok(Self {
            digits: input.to_string(),
        })
    }

    /// The canonical 11-digit string.
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Day-of-birth digits (positions 0-1).
    pub fn day(&self) -> &str {
        &self.digits[0..2]
    }

    /// Month-of-birth digits (positions 2-3).
    pub fn month(&self) -> &str {
        &self.digits[2..4]
    }

    /// Two-digit year suffix (positions 4-5).
    pub fn year_suffix(&self) -> &str {
        &self.digits[4..6]
    }

    /// The 3-digit individual number (positions 6-8) as a value 0-999.
    pub fn individual_number(&self) -> u16 {
        let bytes = self.digits.as_bytes();
        bytes[6..9]
            .iter()
            .fold(0u16, |acc, &b| acc * 10 + u16::from(b - b'0'))
    }

    /// Gender derived from the individual number's parity.
    pub fn gender(&self) -> Gender {
        Gender::from_individual_number(self.individual_number())
    }

    /// Century prefix derived from the individual-number band, or `None`
    /// when the individual number falls in the unallocated gap.
    pub fn century(&self) -> Option<&'static str> {
        century_for(self.individual_number())
    }
}

impl FromStr for BirthNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BirthNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

impl serde::Serialize for BirthNumber {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.digits)
    }
}

impl<'de> serde::Deserialize<'de> for BirthNumber {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decodes_fields() {
        let number = BirthNumber::parse("01019512394").expect("valid number");
        assert_eq!(number.day(), "01");
        assert_eq!(number.month(), "01");
        assert_eq!(number.year_suffix(), "95");
        assert_eq!(number.individual_number(), 123);
        assert_eq!(number.gender(), Gender::Male);
        assert_eq!(number.century(), Some("19"));
    }

    #[test]
    fn test_gender_parity() {
        assert_eq!(Gender::from_individual_number(0), Gender::Female);
        assert_eq!(Gender::from_individual_number(124), Gender::Female);
        assert_eq!(Gender::from_individual_number(999), Gender::Male);
    }

    #[test]
    fn test_leading_zeros_preserved() {
        let number = BirthNumber::parse("01019512394").expect("valid number");
        assert_eq!(number.to_string().len(), 11);
        assert!(number.as_str().starts_with('0'));
    }
}
