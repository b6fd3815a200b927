//! Batch building of card info for many numbers at once.
//!
//! Useful for back-office imports and catalog previews. Results are returned
//! in input order, with optional parallel processing using rayon.
//!
//! # Performance
//!
//! - Overrides are merged into the defaults once per batch, not per number
//! - Optional parallel processing with the `parallel` feature

use crate::info::CardInfo;
use crate::normalize::normalize_number;
use crate::options::OptionOverrides;
use crate::registry::CardRegistry;

/// Builds card info for every number, in input order.
///
/// # Example
///
/// ```
/// use card_info::batch::build_batch;
/// use card_info::{CardRegistry, OptionOverrides};
///
/// let registry = CardRegistry::new();
/// let numbers = ["4242424242424242", "378282246310005", "bad input"];
/// let infos = build_batch(&registry, &numbers, &OptionOverrides::default());
///
/// assert_eq!(infos[0].brand_alias.as_deref(), Some("visa"));
/// assert_eq!(infos[1].brand_alias.as_deref(), Some("american-express"));
/// assert_eq!(infos[2].number(), "");
/// ```
pub fn build_batch<S: AsRef<str>>(
    registry: &CardRegistry,
    numbers: &[S],
    overrides: &OptionOverrides,
) -> Vec<CardInfo> {
    let options = registry.options_with(overrides);
    numbers
        .iter()
        .map(|n| registry.build_with(n.as_ref(), &options))
        .collect()
}

/// Builds card info for every number in parallel.
///
/// Results are identical to [`build_batch`], in the same order.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
pub fn build_batch_parallel<S: AsRef<str> + Sync>(
    registry: &CardRegistry,
    numbers: &[S],
    overrides: &OptionOverrides,
) -> Vec<CardInfo> {
    use rayon::prelude::*;

    let options = registry.options_with(overrides);
    numbers
        .par_iter()
        .map(|n| registry.build_with(n.as_ref(), &options))
        .collect()
}

/// Counts how many numbers resolve to a brand and how many to a bank.
///
/// Doesn't build full results, so no logo or layout strings are allocated.
///
/// # Returns
///
/// Tuple of (with_brand, with_bank)
///
/// # Example
///
/// ```
/// use card_info::batch::count_resolved;
/// use card_info::CardRegistry;
///
/// let registry = CardRegistry::with_bundled_data().unwrap();
/// let numbers = ["5244680000000000", "4242424242424242", "2221", "x"];
/// assert_eq!(count_resolved(&registry, &numbers), (2, 1));
/// ```
pub fn count_resolved<S: AsRef<str>>(registry: &CardRegistry, numbers: &[S]) -> (usize, usize) {
    numbers
        .iter()
        .map(|n| resolved_flags(registry, n.as_ref()))
        .fold((0, 0), |(brands, banks), (brand, bank)| {
            (brands + usize::from(brand), banks + usize::from(bank))
        })
}

/// Counts resolved brands and banks in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
pub fn count_resolved_parallel<S: AsRef<str> + Sync>(
    registry: &CardRegistry,
    numbers: &[S],
) -> (usize, usize) {
    use rayon::prelude::*;

    numbers
        .par_iter()
        .map(|n| {
            let (brand, bank) = resolved_flags(registry, n.as_ref());
            (usize::from(brand), usize::from(bank))
        })
        .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1))
}

fn resolved_flags(registry: &CardRegistry, number_source: &str) -> (bool, bool) {
    let number = normalize_number(number_source);
    (
        registry.resolve_brand(&number).is_some(),
        registry.resolve_bank(&number).is_some(),
    )
}
