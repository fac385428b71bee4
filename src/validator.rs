//! Target number validation

use crate::error::RejectionReason;
use crate::types::TargetNumber;

/// Fewest digits accepted in a target number
pub const MIN_DIGITS: usize = 10;

/// Most digits accepted in a target number
pub const MAX_DIGITS: usize = 15;

/// Check a raw input against the target number rules
///
/// Surrounding whitespace is trimmed; the remaining text must be 10 to 15 ASCII
/// digits. The digits are returned exactly as entered, with no reformatting or
/// country-code handling.
///
/// # Examples
///
/// ```
/// use number_lookup::validator::validate;
/// use number_lookup::RejectionReason;
///
/// assert_eq!(validate("  9876543210 ").unwrap().as_str(), "9876543210");
/// assert_eq!(validate("12345"), Err(RejectionReason::TooShort));
/// assert_eq!(validate("98765-43210"), Err(RejectionReason::InvalidCharacters));
/// ```
pub fn validate(raw: &str) -> Result<TargetNumber, RejectionReason> {
    let trimmed = raw.trim();

    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RejectionReason::InvalidCharacters);
    }

    // All ASCII, so byte length is the digit count
    let digits = trimmed.len();
    if digits < MIN_DIGITS {
        return Err(RejectionReason::TooShort);
    }
    if digits > MAX_DIGITS {
        return Err(RejectionReason::TooLong);
    }

    Ok(TargetNumber::new_unchecked(trimmed.to_string()))
}
