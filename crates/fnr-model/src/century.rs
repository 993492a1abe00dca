//! Century resolution from the individual-number band.
//!
//! The 3-digit individual number encodes the century of birth through its
//! allocation band. The bands follow the historical allocation scheme:
//!
//! | Band    | Century prefix |
//! |---------|----------------|
//! | 000-499 | `19`           |
//! | 500-749 | `18`           |
//! | 750-899 | undefined      |
//! | 900-999 | `20`           |
//!
//! A value in the undefined gap does not make a birth number arithmetically
//! invalid; it only means the number cannot be matched to any calendar date.

/// Resolve the 2-digit century prefix for an individual number.
///
/// Returns `None` for values in the unallocated 750-899 gap (and for
/// anything above 999, which no well-formed birth number can carry).
pub fn century_for(individual_number: u16) -> Option<&'static str> {
    match individual_number {
        0..=499 => Some("19"),
        500..=749 => Some("18"),
        900..=999 => Some("20"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(century_for(0), Some("19"));
        assert_eq!(century_for(499), Some("19"));
        assert_eq!(century_for(500), Some("18"));
        assert_eq!(century_for(749), Some("18"));
        assert_eq!(century_for(750), None);
        assert_eq!(century_for(899), None);
        assert_eq!(century_for(900), Some("20"));
        assert_eq!(century_for(999), Some("20"));
    }

    #[test]
    fn test_out_of_range_is_undefined() {
        assert_eq!(century_for(1000), None);
    }
}
