//! Exhaustive generation of valid birth numbers for a calendar date.
//!
//! For a given date of birth there are at most 1000 candidate birth
//! numbers, one per individual number. The generator walks the candidates
//! from 999 down to 000, appends the two mod-11 control digits, and keeps
//! every candidate whose century band matches the date's century. The
//! descending walk is a deterministic-ordering contract: results are
//! always strictly descending by individual number.
//!
//! Candidates without a legal control digit are routine (roughly one in
//! eleven) and are discarded silently; only a missing or unrepresentable
//! date argument surfaces as an error.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;
use tracing::{debug, trace};

use fnr_model::{BirthNumber, Gender, first_checksum_digit, second_checksum_digit};

/// Errors that can occur when generating birth numbers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// No date was supplied; nothing can be generated.
    #[error("a date of birth is required to generate birth numbers")]
    MissingDate,

    /// The year has no 2-digit century prefix in the birth number scheme.
    #[error("year {year} is outside the supported range 1000-9999")]
    UnsupportedYear { year: i32 },
}

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Generate every valid birth number for a date of birth, in strictly
/// descending individual-number order.
///
/// An empty result is not an error; some date/century combinations near
/// the allocation-band boundaries simply have no legal number.
///
/// # Errors
///
/// - [`GenerateError::MissingDate`] when `date` is `None`.
/// - [`GenerateError::UnsupportedYear`] when the year falls outside
///   1000-9999.
pub fn birth_numbers_for_date(date: Option<NaiveDate>) -> Result<Vec<BirthNumber>> {
    let date = date.ok_or(GenerateError::MissingDate)?;
    let year = date.year();
    if !(1000..=9999).contains(&year) {
        return Err(GenerateError::UnsupportedYear { year });
    }
    // First two digits of the 4-digit year, e.g. "19" for 1995.
    let century = match year / 100 {
        18 => "18",
        19 => "19",
        20 => "20",
        other => {
            // No individual-number band maps to this century.
            debug!(year, century = other, "no allocation band for century");
            return Ok(Vec::new());
        }
    };

    let mut digits = [0u8; 11];
    encode_date_prefix(&mut digits, date);

    let mut result = Vec::new();
    for candidate in (0..=999u16).rev() {
        digits[6] = (candidate / 100) as u8;
        digits[7] = (candidate / 10 % 10) as u8;
        digits[8] = (candidate % 10) as u8;

        let mut head = [0u8; 9];
        head.copy_from_slice(&digits[..9]);
        let Ok(first) = first_checksum_digit(&head) else {
            trace!(candidate, "no first control digit, discarding");
            continue;
        };
        digits[9] = first;

        let mut head = [0u8; 10];
        head.copy_from_slice(&digits[..10]);
        let Ok(second) = second_checksum_digit(&head) else {
            trace!(candidate, "no second control digit, discarding");
            continue;
        };
        digits[10] = second;

        let text: String = digits.iter().map(|&d| char::from(d + b'0')).collect();
        let Ok(number) = BirthNumber::parse(&text) else {
            trace!(candidate, "assembled candidate failed validation");
            continue;
        };
        if number.century() == Some(century) {
            result.push(number);
        }
    }

    debug!(date = %date, kept = result.len(), "generated birth number candidates");
    Ok(result)
}

/// Generate every valid birth number for a date of birth and gender.
///
/// Equivalent to filtering [`birth_numbers_for_date`] by the gender each
/// number encodes; ordering is preserved.
///
/// # Errors
///
/// Same as [`birth_numbers_for_date`].
pub fn birth_numbers_for_date_and_gender(
    date: Option<NaiveDate>,
    gender: Gender,
) -> Result<Vec<BirthNumber>> {
    let numbers = birth_numbers_for_date(date)?;
    Ok(numbers
        .into_iter()
        .filter(|number| number.gender() == gender)
        .collect())
}

/// Write the `ddMMyy` date digits into positions 0-5.
fn encode_date_prefix(digits: &mut [u8; 11], date: NaiveDate) {
    let day = date.day() as u8;
    let month = date.month() as u8;
    let year_suffix = (date.year() % 100) as u8;
    digits[0] = day / 10;
    digits[1] = day % 10;
    digits[2] = month / 10;
    digits[3] = month % 10;
    digits[4] = year_suffix / 10;
    digits[5] = year_suffix % 10;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_prefix_zero_padded() {
        let mut digits = [9u8; 11];
        let date = NaiveDate::from_ymd_opt(2005, 3, 7).expect("valid date");
        encode_date_prefix(&mut digits, date);
        assert_eq!(&digits[..6], &[0, 7, 0, 3, 0, 5]);
    }

    #[test]
    fn test_missing_date_is_an_error() {
        assert_eq!(
            birth_numbers_for_date(None),
            Err(GenerateError::MissingDate)
        );
    }

    #[test]
    fn test_unsupported_year() {
        let date = NaiveDate::from_ymd_opt(999, 1, 1).expect("valid date");
        assert_eq!(
            birth_numbers_for_date(Some(date)),
            Err(GenerateError::UnsupportedYear { year: 999 })
        );
    }

    #[test]
    fn test_century_without_band_yields_empty() {
        let date = NaiveDate::from_ymd_opt(2150, 1, 1).expect("valid date");
        assert_eq!(birth_numbers_for_date(Some(date)), Ok(Vec::new()));
    }
}
