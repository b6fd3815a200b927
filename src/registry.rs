//! The card registry: brands, banks and default options in one place.
//!
//! A [`CardRegistry`] owns all reference data a build needs. It is loaded
//! once, optionally extended with [`CardRegistry::merge`], and then shared
//! read-only. Mutation requires `&mut self`; hosts that serve many threads
//! wrap the registry in an `RwLock` and take the write lock for merges.

use crate::bank::{BankData, BankDirectory, BankRecord, JsonBankLoader};
use crate::brand::{builtin_brands, BrandDefinition};
use crate::catalog::{BankEntry, BrandEntry};
use crate::detect::detect_brand;
use crate::error::DataError;
use crate::info::CardInfo;
use crate::normalize::normalize_number;
use crate::options::{OptionOverrides, Options};
use std::borrow::Cow;
use std::fmt::Display;

/// Brand definitions, bank directory and default options.
///
/// # Example
///
/// ```
/// use card_info::{CardRegistry, OptionOverrides};
/// use card_info::options::BrandLogoPolicy;
///
/// let registry = CardRegistry::with_bundled_data().unwrap();
///
/// let info = registry.info("5244 6800 0000 0000");
/// assert_eq!(info.bank_alias.as_deref(), Some("ru-tinkoff"));
/// assert_eq!(info.brand_alias.as_deref(), Some("master-card"));
///
/// let mono = registry.build(
///     "5244680000000000",
///     &OptionOverrides::new().brand_logo_policy(BrandLogoPolicy::Mono),
/// );
/// assert!(mono.brand_logo.as_deref().unwrap().ends_with("master-card-white.svg"));
/// ```
#[derive(Debug, Clone)]
pub struct CardRegistry {
    brands: Vec<BrandDefinition>,
    directory: BankDirectory,
    defaults: Options,
}

impl Default for CardRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CardRegistry {
    /// Creates a registry with the built-in brands, no banks and default
    /// options.
    pub fn new() -> Self {
        Self {
            brands: builtin_brands().to_vec(),
            directory: BankDirectory::new(),
            defaults: Options::default(),
        }
    }

    /// Creates a registry with the built-in brands and the bundled bank data.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled data file is corrupt.
    pub fn with_bundled_data() -> Result<Self, DataError> {
        let mut registry = Self::new();
        registry.merge(JsonBankLoader::bundled()?)?;
        Ok(registry)
    }

    /// Creates a registry with the built-in brands and `data`.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`BankData::validate`].
    pub fn from_data(data: BankData) -> Result<Self, DataError> {
        let mut registry = Self::new();
        registry.merge(data)?;
        Ok(registry)
    }

    /// Validates, then merges banks and prefixes into the directory.
    ///
    /// Same-key entries are overwritten; nothing is removed. Banks with an
    /// empty alias take their identifier as alias.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`BankData::validate`]; the registry is left
    /// unchanged on error.
    pub fn merge(&mut self, mut data: BankData) -> Result<(), DataError> {
        data.validate()?;
        self.directory.merge(data);
        Ok(())
    }

    /// Parses, validates and merges a JSON bank payload.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`JsonBankLoader::parse`]; the registry is left
    /// unchanged on error.
    pub fn merge_json(&mut self, json: &str) -> Result<(), DataError> {
        self.merge(JsonBankLoader::parse(json)?)
    }

    /// Overrides registry-wide defaults, field by field.
    pub fn set_default_options(&mut self, overrides: &OptionOverrides) {
        self.defaults.apply(overrides);
        tracing::debug!(options = ?self.defaults, "default options updated");
    }

    /// Returns the registry-wide defaults.
    pub fn default_options(&self) -> &Options {
        &self.defaults
    }

    /// Appends a brand. It takes part in resolution like the built-ins,
    /// ambiguity included.
    pub fn add_brand(&mut self, brand: BrandDefinition) {
        tracing::debug!(alias = %brand.alias, "brand added");
        self.brands.push(brand);
    }

    /// Returns the brands in resolution order.
    pub fn brands(&self) -> &[BrandDefinition] {
        &self.brands
    }

    /// Returns the bank directory.
    pub fn directory(&self) -> &BankDirectory {
        &self.directory
    }

    /// Resolves the bank of a normalized number.
    pub fn resolve_bank(&self, number: &str) -> Option<&BankRecord> {
        self.directory.lookup(number)
    }

    /// Resolves the brand of a normalized number, `None` when ambiguous.
    pub fn resolve_brand(&self, number: &str) -> Option<&BrandDefinition> {
        detect_brand(&self.brands, number)
    }

    /// Builds the card info of a raw number with per-call overrides.
    ///
    /// Never fails: malformed input normalizes to an empty number and every
    /// unresolved field takes its default.
    pub fn build(&self, number_source: impl Display, overrides: &OptionOverrides) -> CardInfo {
        self.build_with(number_source, &self.options_with(overrides))
    }

    /// Builds the card info of a raw number with the default options.
    pub fn info(&self, number_source: impl Display) -> CardInfo {
        self.build(number_source, &OptionOverrides::default())
    }

    /// Lists every bank with resolved logos, in identifier order.
    pub fn bank_catalog(&self, overrides: &OptionOverrides) -> Vec<BankEntry> {
        let options = self.options_with(overrides);
        self.directory
            .banks()
            .map(|(_, record)| BankEntry::new(record, &options))
            .collect()
    }

    /// Lists every brand with layout and logo variants, in resolution order.
    pub fn brand_catalog(&self, overrides: &OptionOverrides) -> Vec<BrandEntry> {
        let options = self.options_with(overrides);
        self.brands
            .iter()
            .map(|brand| BrandEntry::new(brand, &options))
            .collect()
    }

    /// Builds with fully-resolved options.
    pub(crate) fn build_with(&self, number_source: impl Display, options: &Options) -> CardInfo {
        let number_source = number_source.to_string();
        let number = normalize_number(&number_source);

        let bank = self.resolve_bank(&number);
        let brand = self.resolve_brand(&number);
        CardInfo::assemble(number_source, number, bank, brand, options)
    }

    pub(crate) fn options_with(&self, overrides: &OptionOverrides) -> Cow<'_, Options> {
        if overrides.is_empty() {
            Cow::Borrowed(&self.defaults)
        } else {
            Cow::Owned(self.defaults.merged(overrides))
        }
    }
}
