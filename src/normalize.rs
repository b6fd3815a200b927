//! Card number normalization.
//!
//! Input fields hand over whatever the user typed. Only digits and plain
//! spaces are accepted as a card number; anything else means "no number yet"
//! and normalizes to the empty string instead of failing.

/// Normalizes a raw card number into a digit-only string.
///
/// Returns the input with spaces removed when it consists solely of ASCII
/// digits and spaces, and an empty string otherwise.
///
/// # Example
///
/// ```
/// use card_info::normalize::normalize_number;
///
/// assert_eq!(normalize_number("4111 1111 1111 1111"), "4111111111111111");
/// assert_eq!(normalize_number("12a3"), "");
/// assert_eq!(normalize_number("4111-1111"), "");
/// assert_eq!(normalize_number(""), "");
/// ```
pub fn normalize_number(input: &str) -> String {
    if !is_digits_and_spaces(input) {
        return String::new();
    }
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Returns true if the input contains only ASCII digits and spaces.
///
/// The empty string qualifies.
#[inline]
pub fn is_digits_and_spaces(input: &str) -> bool {
    input.bytes().all(|b| b.is_ascii_digit() || b == b' ')
}
