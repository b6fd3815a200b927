//! Fuzz target for bank data loading.
//!
//! Tests that malformed payloads are rejected with an error, never a panic.

#![no_main]

use card_info::CardRegistry;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let mut registry = CardRegistry::new();
    if registry.merge_json(data).is_ok() {
        // Anything accepted must be usable
        let _ = registry.bank_catalog(&Default::default());
        let _ = registry.info("4242424242424242");
    } else {
        assert!(registry.directory().is_empty());
    }
});
