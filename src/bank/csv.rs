//! CSV prefix table loader.
//!
//! Large prefix tables are often exported as spreadsheets. This loader reads
//! them into a prefixes-only [`BankData`] that can be merged next to a JSON
//! bank list.
//!
//! # Feature
//!
//! Requires the `prefix-csv` feature.
//!
//! # Supported Format
//!
//! ```csv
//! prefix,bank
//! 524468,ru-tinkoff
//! 220070,ru-tinkoff
//! ```
//!
//! Column order doesn't matter as long as headers are present. `prefix` may
//! also be named `iin` or `bin`; `bank` may be named `bank_id` or `alias`.

use super::BankData;
use crate::error::DataError;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// CSV prefix table loader.
pub struct CsvPrefixLoader;

impl CsvPrefixLoader {
    /// Loads a prefix table from a CSV file.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use card_info::bank::CsvPrefixLoader;
    ///
    /// let data = CsvPrefixLoader::from_file("prefixes.csv")?;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Io`] if the file cannot be opened and the errors
    /// of [`CsvPrefixLoader::from_reader`] otherwise.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<BankData, DataError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Loads a prefix table from a reader.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Parse`] for malformed CSV or missing columns and
    /// [`DataError::InvalidPrefix`] for a prefix that is not six digits.
    pub fn from_reader<R: Read>(reader: R) -> Result<BankData, DataError> {
        Self::from_reader_with_delimiter(reader, b',')
    }

    /// Loads a prefix table from a CSV string.
    ///
    /// # Errors
    ///
    /// Same as [`CsvPrefixLoader::from_reader`].
    pub fn parse(csv: &str) -> Result<BankData, DataError> {
        Self::from_reader(csv.as_bytes())
    }

    /// Loads from reader with custom delimiter.
    ///
    /// # Errors
    ///
    /// Same as [`CsvPrefixLoader::from_reader`].
    pub fn from_reader_with_delimiter<R: Read>(
        reader: R,
        delimiter: u8,
    ) -> Result<BankData, DataError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| DataError::Parse(format!("Failed to read CSV headers: {}", e)))?
            .clone();

        let columns = ColumnMap::from_headers(&headers)?;
        let mut data = BankData::new();

        for result in csv_reader.records() {
            let record =
                result.map_err(|e| DataError::Parse(format!("CSV parse error: {}", e)))?;

            if let Some((prefix, bank)) = columns.parse_record(&record) {
                data.prefixes.insert(prefix, bank);
            }
        }

        data.validate()?;
        Ok(data)
    }
}

/// Maps CSV column names to indices.
struct ColumnMap {
    prefix: usize,
    bank: usize,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, DataError> {
        let mut prefix_col = None;
        let mut bank_col = None;

        for (i, header) in headers.iter().enumerate() {
            match header.to_lowercase().trim() {
                "prefix" | "iin" | "bin" => prefix_col = Some(i),
                "bank" | "bank_id" | "alias" => bank_col = Some(i),
                _ => {}
            }
        }

        let prefix = prefix_col
            .ok_or_else(|| DataError::Parse("Missing required 'prefix' column".to_string()))?;
        let bank = bank_col
            .ok_or_else(|| DataError::Parse("Missing required 'bank' column".to_string()))?;

        Ok(Self { prefix, bank })
    }

    /// Rows with an empty prefix or bank are skipped.
    fn parse_record(&self, record: &csv::StringRecord) -> Option<(String, String)> {
        let prefix = record.get(self.prefix)?.trim();
        let bank = record.get(self.bank)?.trim();
        if prefix.is_empty() || bank.is_empty() {
            return None;
        }
        Some((prefix.to_string(), bank.to_string()))
    }
}
