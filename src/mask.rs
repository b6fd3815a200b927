//! PCI-DSS compliant redaction of card numbers for logs and debug output.
//!
//! PCI-DSS allows displaying at most:
//! - the first 6 digits (the bank prefix) and the last 4 digits, or
//! - only the last 4 digits.
//!
//! [`CardInfo`](crate::CardInfo) uses [`redact_number`] for its `Debug` and
//! `Display` output, and the server logs requested numbers through it. Never
//! log the full number.

/// Number of leading digits kept on long numbers.
const KEEP_PREFIX: usize = 6;

/// Number of trailing digits kept.
const KEEP_SUFFIX: usize = 4;

/// Redacts a normalized card number.
///
/// - More than 10 digits: the first 6 and last 4 stay, the middle is starred.
/// - 5 to 10 digits: only the last 4 stay.
/// - 4 digits or fewer: everything is starred.
///
/// # Example
///
/// ```
/// use card_info::mask::redact_number;
///
/// assert_eq!(redact_number("4111111111111111"), "411111******1111");
/// assert_eq!(redact_number("4111111111"), "******1111");
/// assert_eq!(redact_number("4111"), "****");
/// assert_eq!(redact_number(""), "");
/// ```
pub fn redact_number(number: &str) -> String {
    let chars: Vec<char> = number.chars().collect();
    let len = chars.len();

    let (head, tail) = if len > KEEP_PREFIX + KEEP_SUFFIX {
        (KEEP_PREFIX, KEEP_SUFFIX)
    } else if len > KEEP_SUFFIX {
        (0, KEEP_SUFFIX)
    } else {
        (0, 0)
    };

    let mut result = String::with_capacity(len);
    result.extend(&chars[..head]);
    result.extend(std::iter::repeat('*').take(len - head - tail));
    result.extend(&chars[len - tail..]);
    result
}

/// Returns the last 4 digits of a number, or an empty string when shorter.
#[inline]
pub fn last_four(number: &str) -> &str {
    match number.len().checked_sub(KEEP_SUFFIX) {
        Some(start) => number.get(start..).unwrap_or(""),
        None => "",
    }
}
