//! Card brand detection from partial card numbers.
//!
//! Every brand pattern is tested against the digits typed so far. A brand is
//! reported only when exactly one pattern matches: while the user is still
//! typing, prefixes shared by several brands (`2221` is both MasterCard and
//! MIR territory) resolve to nothing until the next digit settles it.
//!
//! # Performance
//!
//! Detection is O(number of brands), one anchored regex test per brand.

use crate::brand::BrandDefinition;

/// Detects the brand of a normalized (digit-only) card number.
///
/// # Returns
///
/// `Some(brand)` if exactly one brand pattern matches, `None` if none or more
/// than one does.
///
/// # Example
///
/// ```
/// use card_info::brand::builtin_brands;
/// use card_info::detect::detect_brand;
///
/// let brands = builtin_brands();
///
/// let visa = detect_brand(brands, "4242").unwrap();
/// assert_eq!(visa.alias, "visa");
///
/// // 2221 matches both MasterCard and MIR
/// assert!(detect_brand(brands, "2221").is_none());
///
/// // Nothing typed yet
/// assert!(detect_brand(brands, "").is_none());
/// ```
pub fn detect_brand<'a>(brands: &'a [BrandDefinition], number: &str) -> Option<&'a BrandDefinition> {
    let mut matching = brands.iter().filter(|b| b.pattern.matches(number));
    let first = matching.next()?;
    match matching.next() {
        Some(_) => None,
        None => Some(first),
    }
}

/// Returns every brand whose pattern matches the number, in definition order.
///
/// Useful to explain why [`detect_brand`] found nothing.
pub fn matching_brands<'a>(brands: &'a [BrandDefinition], number: &str) -> Vec<&'a BrandDefinition> {
    brands.iter().filter(|b| b.pattern.matches(number)).collect()
}
