//! JSON bank data loader.
//!
//! Reads a [`BankData`] payload (`{"banks": {...}, "prefixes": {...}}`) and
//! validates it before it is merged anywhere.

use super::BankData;
use crate::error::DataError;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Bundled bank and prefix tables.
const BUNDLED_DATA: &str = include_str!("../../data/banks.json");

/// JSON bank data loader.
pub struct JsonBankLoader;

impl JsonBankLoader {
    /// Loads bank data from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use card_info::bank::JsonBankLoader;
    ///
    /// let data = JsonBankLoader::from_file("banks.json")?;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Io`] if the file cannot be read, and the errors of
    /// [`JsonBankLoader::parse`] otherwise.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<BankData, DataError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Loads bank data from a reader.
    ///
    /// # Errors
    ///
    /// Same as [`JsonBankLoader::from_file`].
    pub fn from_reader<R: Read>(mut reader: R) -> Result<BankData, DataError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::parse(&content)
    }

    /// Parses and validates bank data from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Parse`] for malformed JSON and the validation
    /// errors of [`BankData::validate`].
    pub fn parse(json: &str) -> Result<BankData, DataError> {
        let mut data: BankData = serde_json::from_str(json)
            .map_err(|e| DataError::Parse(format!("JSON parse error: {}", e)))?;
        data.validate()?;
        Ok(data)
    }

    /// Parses the bank data bundled with the crate.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled file itself is corrupt.
    pub fn bundled() -> Result<BankData, DataError> {
        let data = Self::parse(BUNDLED_DATA)?;
        tracing::debug!(
            banks = data.banks.len(),
            prefixes = data.prefixes.len(),
            "parsed bundled bank data"
        );
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::{Lightness, LogoStyle};

    #[test]
    fn test_parse_payload() {
        let json = r##"{
            "banks": {
                "ru-test": {
                    "name": "Тест",
                    "nameEn": "Test",
                    "url": "https://test.example/",
                    "backgroundColor": "#fff",
                    "backgroundColors": ["#fff", "#eee"],
                    "backgroundLightness": "light",
                    "logoStyle": "colored",
                    "text": "#000",
                    "country": "ru",
                    "logoSvg": "ru-test.svg"
                }
            },
            "prefixes": {"123456": "ru-test"}
        }"##;

        let data = JsonBankLoader::parse(json).unwrap();
        let bank = &data.banks["ru-test"];
        assert_eq!(bank.alias, "ru-test");
        assert_eq!(bank.logo_png, None);
        assert_eq!(bank.logo_style, LogoStyle::Colored);
        assert_eq!(bank.background_lightness, Lightness::Light);
        assert_eq!(data.prefixes["123456"], "ru-test");
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let data = JsonBankLoader::parse(r#"{"prefixes": {"000001": "x"}}"#).unwrap();
        assert!(data.banks.is_empty());
        assert_eq!(data.prefixes.len(), 1);

        let data = JsonBankLoader::parse("{}").unwrap();
        assert_eq!(data, BankData::default());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            JsonBankLoader::parse("not valid json"),
            Err(DataError::Parse(_))
        ));
    }

    #[test]
    fn test_unknown_logo_style_rejected() {
        let json = r##"{"banks": {"x": {
            "name": "x", "nameEn": "x", "backgroundColor": "#fff",
            "backgroundColors": ["#fff", "#eee"], "backgroundLightness": "light",
            "logoStyle": "golden", "text": "#000"
        }}}"##;
        assert!(matches!(JsonBankLoader::parse(json), Err(DataError::Parse(_))));
    }

    #[test]
    fn test_invalid_prefix_rejected() {
        let result = JsonBankLoader::parse(r#"{"prefixes": {"22": "ru-x"}}"#);
        assert!(matches!(result, Err(DataError::InvalidPrefix(_))));
    }

    #[test]
    fn test_from_reader() {
        let data = JsonBankLoader::from_reader(r#"{"prefixes": {"999999": "x"}}"#.as_bytes()).unwrap();
        assert_eq!(data.prefixes.len(), 1);
    }

    #[test]
    fn test_bundled_data() {
        let data = JsonBankLoader::bundled().unwrap();
        assert_eq!(data.banks.len(), 49);
        assert_eq!(data.prefixes.len(), 2573);
        assert_eq!(data.prefixes["524468"], "ru-tinkoff");
        assert!(data.prefixes.values().all(|id| data.banks.contains_key(id)));
    }
}
