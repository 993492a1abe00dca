//! Mod-11 checksum arithmetic for birth numbers.
//!
//! A birth number carries two control digits. Each is computed over the
//! preceding digits with a fixed weight vector: the products are summed,
//! reduced modulo 11, and the control digit is `11 - (sum mod 11)`, with
//! two special cases:
//!
//! - a remainder of 0 yields the control digit 0;
//! - a remainder of 1 would require the digit 10, which does not exist,
//!   so no valid checksum digit exists for that digit sequence.

use crate::error::{Result, ValidationError};

/// Weights applied to positions 0-8 when computing the first control digit.
const FIRST_WEIGHTS: [u32; 9] = [3, 7, 6, 1, 8, 9, 4, 5, 2];

/// Weights applied to positions 0-9 (including the first control digit)
/// when computing the second control digit.
const SECOND_WEIGHTS: [u32; 10] = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2];

/// Compute the first control digit from the date and individual-number
/// digits (positions 0-8, as digit values 0-9).
///
/// # Errors
///
/// Returns [`ValidationError::NoValidChecksum`] when the weighted sum
/// reduces to a remainder of 1.
pub fn first_checksum_digit(digits: &[u8; 9]) -> Result<u8> {
    control_digit(digits, &FIRST_WEIGHTS)
}

/// Compute the second control digit from positions 0-9, which include the
/// first control digit.
///
/// # Errors
///
/// Returns [`ValidationError::NoValidChecksum`] when the weighted sum
/// reduces to a remainder of 1.
pub fn second_checksum_digit(digits: &[u8; 10]) -> Result<u8> {
    control_digit(digits, &SECOND_WEIGHTS)
}

fn control_digit(digits: &[u8], weights: &[u32]) -> Result<u8> {
    debug_assert_eq!(digits.len(), weights.len());
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(&digit, &weight)| u32::from(digit) * weight)
        .sum();
    match sum % 11 {
        0 => Ok(0),
        1 => Err(ValidationError::NoValidChecksum),
        remainder => Ok((11 - remainder) as u8),
    }
}
