//! Bank reference data: records, the prefix index and loaders.
//!
//! Banks are identified by the first six digits of a card number (the IIN
//! prefix). Each prefix maps to a bank identifier, and each identifier to a
//! [`BankRecord`] with display names, colors and logo file names.
//!
//! Data arrives in bulk as a [`BankData`] payload:
//!
//! ```json
//! {
//!   "banks": {
//!     "ru-tinkoff": {
//!       "name": "Тинькофф Банк",
//!       "nameEn": "Tinkoff Bank",
//!       "url": "https://www.tinkoff.ru/",
//!       "backgroundColor": "#333",
//!       "backgroundColors": ["#444", "#222"],
//!       "backgroundLightness": "dark",
//!       "logoStyle": "white",
//!       "text": "#fff",
//!       "alias": "ru-tinkoff",
//!       "country": "ru",
//!       "logoPng": "ru-tinkoff.png",
//!       "logoSvg": "ru-tinkoff.svg"
//!     }
//!   },
//!   "prefixes": { "521324": "ru-tinkoff" }
//! }
//! ```
//!
//! # Features
//!
//! - JSON loading is always available ([`JsonBankLoader`]).
//! - `prefix-csv` adds [`CsvPrefixLoader`] for `prefix,bank` tables.

#[cfg(feature = "prefix-csv")]
mod csv;
mod directory;
mod json;

#[cfg(feature = "prefix-csv")]
pub use self::csv::CsvPrefixLoader;
pub use directory::BankDirectory;
pub use json::JsonBankLoader;

use crate::error::DataError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;

/// Number of leading digits that identify the issuing bank.
pub const PREFIX_LENGTH: usize = 6;

/// Tone of a bank's own logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum LogoStyle {
    /// Full-color logo.
    Colored,
    /// Black monochrome logo.
    Black,
    /// White monochrome logo.
    White,
}

impl LogoStyle {
    /// Returns the style name used in logo file names.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Colored => "colored",
            Self::Black => "black",
            Self::White => "white",
        }
    }

    /// All styles, in catalog order.
    pub const ALL: [LogoStyle; 3] = [Self::Colored, Self::Black, Self::White];
}

impl fmt::Display for LogoStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a card background is light or dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Lightness {
    /// Light background, dark foreground.
    #[default]
    Light,
    /// Dark background, light foreground.
    Dark,
}

impl fmt::Display for Lightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Dark => f.write_str("dark"),
        }
    }
}

/// A bank in the directory.
///
/// Field names follow the JSON data files: `name` there is the native-language
/// name and `nameEn` the English one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BankRecord {
    /// Bank identifier (e.g. `ru-sberbank`).
    #[serde(default)]
    pub alias: String,

    /// English display name.
    #[serde(rename = "nameEn")]
    pub name: String,

    /// Name in the bank's own language.
    #[serde(rename = "name")]
    pub name_localized: String,

    /// ISO 3166-1 alpha-2 country code, lowercase.
    #[serde(default)]
    pub country: String,

    /// Bank website.
    #[serde(default)]
    pub url: String,

    /// PNG logo file name, without directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_png: Option<String>,

    /// SVG logo file name, without directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_svg: Option<String>,

    /// Tone of the bank's logo.
    pub logo_style: LogoStyle,

    /// Representative background color.
    pub background_color: String,

    /// Gradient stops, at least two.
    pub background_colors: Vec<String>,

    /// Lightness of the background.
    pub background_lightness: Lightness,

    /// Foreground color for text drawn on the background.
    #[serde(rename = "text")]
    pub text_color: String,
}

impl BankRecord {
    /// Checks the record invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::InvalidBank`] when fewer than two background
    /// colors are given.
    pub fn validate(&self, id: &str) -> Result<(), DataError> {
        if self.background_colors.len() < 2 {
            return Err(DataError::InvalidBank {
                id: id.to_string(),
                reason: format!(
                    "needs at least 2 background colors, got {}",
                    self.background_colors.len()
                ),
            });
        }
        Ok(())
    }
}

/// A bulk payload of banks and prefixes, merged into a [`BankDirectory`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct BankData {
    /// Banks keyed by identifier.
    pub banks: BTreeMap<String, BankRecord>,
    /// Six-digit prefixes mapped to bank identifiers.
    pub prefixes: HashMap<String, String>,
}

impl BankData {
    /// Creates an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add a bank.
    pub fn bank(mut self, id: impl Into<String>, record: BankRecord) -> Self {
        self.banks.insert(id.into(), record);
        self
    }

    /// Builder method to map a prefix to a bank identifier.
    pub fn prefix(mut self, prefix: impl Into<String>, id: impl Into<String>) -> Self {
        self.prefixes.insert(prefix.into(), id.into());
        self
    }

    /// Checks every prefix key and bank record.
    ///
    /// Banks without an alias take their map key as alias.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::InvalidPrefix`] for a prefix that is not exactly
    /// six ASCII digits and [`DataError::InvalidBank`] for a bad record.
    pub fn validate(&mut self) -> Result<(), DataError> {
        for prefix in self.prefixes.keys() {
            if !is_valid_prefix(prefix) {
                return Err(DataError::InvalidPrefix(prefix.clone()));
            }
        }
        for (id, record) in self.banks.iter_mut() {
            record.validate(id)?;
            if record.alias.is_empty() {
                record.alias.clone_from(id);
            }
        }
        Ok(())
    }
}

/// Returns true if `prefix` is exactly [`PREFIX_LENGTH`] ASCII digits.
#[inline]
pub fn is_valid_prefix(prefix: &str) -> bool {
    prefix.len() == PREFIX_LENGTH && prefix.bytes().all(|b| b.is_ascii_digit())
}

/// Loads a bank data file, picking the loader by extension.
///
/// `.csv` files go through [`CsvPrefixLoader`]; everything else is read as
/// JSON.
///
/// # Errors
///
/// Returns the loader's errors, or [`DataError::FeatureNotEnabled`] for a
/// CSV file when the `prefix-csv` feature is off.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<BankData, DataError> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if !is_csv {
        return JsonBankLoader::from_file(path);
    }

    #[cfg(feature = "prefix-csv")]
    {
        CsvPrefixLoader::from_file(path)
    }
    #[cfg(not(feature = "prefix-csv"))]
    {
        Err(DataError::FeatureNotEnabled(format!(
            "prefix-csv is required to load {}",
            path.display()
        )))
    }
}

#[cfg(test)]
pub(crate) fn sample_bank(alias: &str) -> BankRecord {
    BankRecord {
        alias: alias.to_string(),
        name: "Test Bank".to_string(),
        name_localized: "Тест Банк".to_string(),
        country: "ru".to_string(),
        url: "https://bank.example/".to_string(),
        logo_png: Some(format!("{}.png", alias)),
        logo_svg: None,
        logo_style: LogoStyle::White,
        background_color: "#333333".to_string(),
        background_colors: vec!["#444444".to_string(), "#222222".to_string()],
        background_lightness: Lightness::Dark,
        text_color: "#fff".to_string(),
    }
}
