//! Fuzz target for card info building.
//!
//! Tests that building never panics on arbitrary input and options.

#![no_main]

use arbitrary::Arbitrary;
use card_info::options::{BrandLogoPolicy, ImageExt};
use card_info::{normalize_number, redact_number, CardRegistry, OptionOverrides};
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    number: &'a str,
    policy: u8,
    svg: bool,
    digit: &'a str,
    delimiter: &'a str,
    degrees: i32,
}

fn registry() -> &'static CardRegistry {
    static REGISTRY: OnceLock<CardRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| CardRegistry::with_bundled_data().expect("bundled data"))
}

fuzz_target!(|input: Input| {
    let policy = match input.policy % 5 {
        0 => BrandLogoPolicy::Auto,
        1 => BrandLogoPolicy::Colored,
        2 => BrandLogoPolicy::Mono,
        3 => BrandLogoPolicy::Black,
        _ => BrandLogoPolicy::White,
    };
    let ext = if input.svg { ImageExt::Svg } else { ImageExt::Png };
    let overrides = OptionOverrides::new()
        .brand_logo_policy(policy)
        .preferred_ext(ext)
        .mask_digit_symbol(input.digit)
        .mask_delimiter_symbol(input.delimiter)
        .gradient_degrees(input.degrees);

    // These should never panic
    let info = registry().build(input.number, &overrides);
    let _ = info.to_string();
    let _ = format!("{:?}", info);
    let _ = redact_number(input.number);

    // The nice grouping must hold exactly the normalized digits
    let normalized = normalize_number(input.number);
    assert_eq!(info.number(), normalized);
    let digits: String = info.number_nice().chars().filter(|c| *c != ' ').collect();
    assert_eq!(digits, normalized, "Nice grouping should preserve digits");

    if normalized.len() < 6 {
        assert!(info.bank_alias.is_none(), "Short numbers never resolve a bank");
    }
});
