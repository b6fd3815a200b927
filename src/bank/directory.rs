//! In-memory bank directory and prefix index.
//!
//! Prefixes live in a hash map for O(1) exact lookups; banks live in a
//! sorted map so catalogs list them in a stable order.

use super::{BankData, BankRecord, PREFIX_LENGTH};
use std::collections::{BTreeMap, HashMap};

/// Banks keyed by identifier plus the six-digit prefix index.
///
/// # Example
///
/// ```
/// use card_info::bank::BankDirectory;
///
/// let directory = BankDirectory::new();
/// assert!(directory.lookup("4111111111111111").is_none());
/// assert!(directory.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct BankDirectory {
    banks: BTreeMap<String, BankRecord>,
    prefixes: HashMap<String, String>,
}

impl BankDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory holding `data`.
    pub fn from_data(data: BankData) -> Self {
        let mut directory = Self::new();
        directory.merge(data);
        directory
    }

    /// Merges a payload into the directory.
    ///
    /// The merge is additive: entries with a key already present replace the
    /// old entry, everything else is kept.
    pub fn merge(&mut self, data: BankData) {
        let bank_count = data.banks.len();
        let prefix_count = data.prefixes.len();

        self.banks.extend(data.banks);
        self.prefixes.reserve(prefix_count);
        self.prefixes.extend(data.prefixes);

        let dangling = self
            .prefixes
            .values()
            .filter(|id| !self.banks.contains_key(id.as_str()))
            .count();
        if dangling > 0 {
            tracing::warn!(dangling, "prefixes point to banks missing from the directory");
        }

        tracing::debug!(
            banks = bank_count,
            prefixes = prefix_count,
            total_banks = self.banks.len(),
            total_prefixes = self.prefixes.len(),
            "merged bank data"
        );
    }

    /// Resolves the bank for a normalized card number.
    ///
    /// Numbers shorter than six digits never match. Otherwise the first six
    /// characters must be an exact key of the prefix index.
    pub fn lookup(&self, number: &str) -> Option<&BankRecord> {
        let prefix = number.get(..PREFIX_LENGTH)?;
        let id = self.prefixes.get(prefix)?;
        self.banks.get(id)
    }

    /// Returns the bank identifier a prefix maps to.
    pub fn bank_id(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix).map(String::as_str)
    }

    /// Returns a bank by identifier.
    pub fn bank(&self, id: &str) -> Option<&BankRecord> {
        self.banks.get(id)
    }

    /// Iterates over all banks in identifier order.
    pub fn banks(&self) -> impl Iterator<Item = (&str, &BankRecord)> {
        self.banks.iter().map(|(id, record)| (id.as_str(), record))
    }

    /// Number of banks.
    pub fn bank_count(&self) -> usize {
        self.banks.len()
    }

    /// Number of indexed prefixes.
    pub fn prefix_count(&self) -> usize {
        self.prefixes.len()
    }

    /// Returns true if no bank and no prefix is loaded.
    pub fn is_empty(&self) -> bool {
        self.banks.is_empty() && self.prefixes.is_empty()
    }

    /// Clears all banks and prefixes.
    pub fn clear(&mut self) {
        self.banks.clear();
        self.prefixes.clear();
    }
}
