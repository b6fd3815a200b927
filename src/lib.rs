//! # card_info
//!
//! Bank, brand, logo and layout lookup for payment card numbers, built for
//! card input fields that update on every keystroke.
//!
//! ## Features
//!
//! - Issuing bank lookup by exact 6-digit prefix (bundled data: 49 banks)
//! - Card brand detection that stays silent while the prefix is ambiguous
//! - Input masks and "nice" digit grouping per brand
//! - Logo paths and background gradients, with a configurable logo policy
//! - Multiple interfaces: library, CLI, REST API, WASM
//!
//! ## Quick Start
//!
//! ```rust
//! use card_info::CardRegistry;
//!
//! let registry = CardRegistry::with_bundled_data().unwrap();
//!
//! let info = registry.info("5244 6800 0000 0000");
//! assert_eq!(info.bank_alias.as_deref(), Some("ru-tinkoff"));
//! assert_eq!(info.brand_alias.as_deref(), Some("master-card"));
//! assert_eq!(info.number_mask, "0000 0000 0000 0000");
//! assert_eq!(info.background_gradient, "linear-gradient(135deg, #444, #222)");
//!
//! // Safe for logging - never exposes the full number
//! println!("Card: {}", info); // "MasterCard 524468******0000 (Tinkoff Bank)"
//! ```
//!
//! ## Partial Input
//!
//! ```rust
//! use card_info::CardRegistry;
//!
//! let registry = CardRegistry::new();
//!
//! // Prefix shared by MasterCard and MIR: no brand yet
//! assert!(registry.info("2221").brand_alias.is_none());
//!
//! // Malformed input never fails, it just resolves to nothing
//! let info = registry.info("4242-4242");
//! assert_eq!(info.number(), "");
//! assert_eq!(info.number_mask, "0000 0000 0000 0000000");
//! ```
//!
//! ## Options
//!
//! ```rust
//! use card_info::{CardRegistry, OptionOverrides};
//! use card_info::options::{BrandLogoPolicy, ImageExt};
//!
//! let mut registry = CardRegistry::new();
//! registry.set_default_options(&OptionOverrides::new().brands_logos_path("/img/brands/"));
//!
//! let info = registry.build(
//!     "4242",
//!     &OptionOverrides::new()
//!         .brand_logo_policy(BrandLogoPolicy::Black)
//!         .preferred_ext(ImageExt::Png),
//! );
//! assert_eq!(info.brand_logo.as_deref(), Some("/img/brands/visa-black.png"));
//! ```
//!
//! ## Loading Bank Data
//!
//! ```rust
//! use card_info::CardRegistry;
//!
//! let mut registry = CardRegistry::new();
//! registry
//!     .merge_json(r##"{
//!         "banks": {"xx-bank": {
//!             "name": "Bank", "nameEn": "Bank", "backgroundColor": "#fff",
//!             "backgroundColors": ["#fff", "#eee"], "backgroundLightness": "light",
//!             "logoStyle": "colored", "text": "#000", "logoPng": "xx-bank.png"
//!         }},
//!         "prefixes": {"999999": "xx-bank"}
//!     }"##)
//!     .unwrap();
//!
//! assert_eq!(registry.info("9999991234").bank_alias.as_deref(), Some("xx-bank"));
//! ```
//!
//! ## Built-in Brands
//!
//! | Brand | Prefix | Length | Code |
//! |-------|--------|--------|------|
//! | Visa | 4 | 16 | CVV |
//! | MasterCard | 51-55, 2221-2720 | 16 | CVC |
//! | American Express | 34, 37 | 15 | CID (4) |
//! | Diners Club | 300-305, 36, 38, 39 | 14 | CVV |
//! | Discover | 6011, 644-649, 65 | 16, 19 | CID |
//! | JCB | 2131, 1800, 35 | 16 | CVV |
//! | UnionPay | 620-625 | 16-19 | CVN |
//! | Maestro | 50, 56-58, 6304, 6390, 6054, 6271, 67 | 12-19 | CVC |
//! | MIR | 22 | 16 | CVC |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `cli` | Command-line tool |
//! | `server` | REST API with Swagger UI |
//! | `wasm` | WebAssembly support |
//! | `parallel` | Rayon-based batch building |
//! | `prefix-csv` | CSV prefix table loader |
//!
//! ## Security
//!
//! This library is designed with PCI-DSS compliance in mind:
//!
//! - Digit fields of `CardInfo` are zeroized when it is dropped
//! - `Debug` and `Display` show redacted numbers only
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod bank;
pub mod batch;
pub mod brand;
pub mod catalog;
pub mod detect;
pub mod error;
pub mod format;
pub mod info;
pub mod logo;
pub mod mask;
pub mod normalize;
pub mod options;
pub mod registry;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use bank::{BankData, BankRecord};
pub use brand::BrandDefinition;
pub use catalog::{BankEntry, BrandEntry};
pub use error::{ConfigError, DataError};
pub use info::CardInfo;
pub use options::{OptionOverrides, Options};
pub use registry::CardRegistry;

// Re-export free functions
pub use mask::redact_number;
pub use normalize::normalize_number;
