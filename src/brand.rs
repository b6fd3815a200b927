//! Card brand definitions.
//!
//! A brand (card network) is identified by a prefix pattern over the digits
//! typed so far and carries the layout data used to format its numbers: gap
//! positions, allowed lengths and the security code label.
//!
//! # Built-in brands
//!
//! | Alias | Prefix | Lengths | Gaps | Code |
//! |-------|--------|---------|------|------|
//! | `visa` | 4 | 16 | 4, 8, 12 | CVV (3) |
//! | `master-card` | 51-55, 2221-2720 | 16 | 4, 8, 12 | CVC (3) |
//! | `american-express` | 34, 37 | 15 | 4, 10 | CID (4) |
//! | `diners-club` | 300-305, 36, 38, 39 | 14 | 4, 10 | CVV (3) |
//! | `discover` | 6011, 644-649, 65 | 16, 19 | 4, 8, 12 | CID (3) |
//! | `jcb` | 2131, 1800, 35 | 16 | 4, 8, 12 | CVV (3) |
//! | `unionpay` | 620-625 | 16-19 | 4, 8, 12 | CVN (3) |
//! | `maestro` | 50, 56-58, 6304, 6390, 6054, 6271, 67 | 12-19 | 4, 8, 12 | CVC (3) |
//! | `mir` | 22 | 16 | 4, 8, 12 | CVC (3) |

use crate::error::ConfigError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

/// A prefix rule tested against partial digit strings.
///
/// The rule is a regex alternation of prefixes, compiled as
/// `^(?:<prefix>)[0-9]*$`: it matches any ASCII digit string that starts with
/// one of the prefixes, however many digits follow. The empty string never
/// matches.
#[derive(Clone)]
pub struct NumberPattern {
    prefix: String,
    regex: Regex,
}

impl NumberPattern {
    /// Compiles a prefix rule.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPattern`] if the prefix is not a valid
    /// regular expression. The alias is left empty; [`BrandDefinition::new`]
    /// fills it in.
    ///
    /// # Example
    ///
    /// ```
    /// use card_info::brand::NumberPattern;
    ///
    /// let pattern = NumberPattern::new("3[47]").unwrap();
    /// assert!(pattern.matches("34"));
    /// assert!(pattern.matches("378282246310005"));
    /// assert!(!pattern.matches("3"));
    /// ```
    pub fn new(prefix: &str) -> Result<Self, ConfigError> {
        let regex = Regex::new(&format!("^(?:{})[0-9]*$", prefix)).map_err(|e| {
            ConfigError::InvalidPattern {
                alias: String::new(),
                message: e.to_string(),
            }
        })?;
        Ok(Self {
            prefix: prefix.to_string(),
            regex,
        })
    }

    /// Tests a normalized digit string against the rule.
    #[inline]
    pub fn matches(&self, digits: &str) -> bool {
        self.regex.is_match(digits)
    }

    /// Returns the prefix alternation this rule was built from.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl fmt::Debug for NumberPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NumberPattern").field(&self.prefix).finish()
    }
}

impl PartialEq for NumberPattern {
    fn eq(&self, other: &Self) -> bool {
        self.prefix == other.prefix
    }
}

impl Eq for NumberPattern {}

impl Serialize for NumberPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.prefix)
    }
}

/// A card network definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandDefinition {
    /// Short identifier, also the logo file stem (e.g. `visa`).
    pub alias: String,
    /// Human-readable name.
    pub name: String,
    /// Label of the card verification code (CVV, CVC, CID, CVN).
    pub code_name: String,
    /// Number of digits in the verification code.
    pub code_length: u8,
    /// Ascending digit offsets where the number is visually split.
    pub gaps: Vec<usize>,
    /// Ascending valid total digit counts.
    pub lengths: Vec<usize>,
    /// Prefix rule identifying the brand.
    pub pattern: NumberPattern,
}

impl BrandDefinition {
    /// Creates a brand definition, compiling its prefix rule.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPattern`] if `prefix` does not compile.
    ///
    /// # Example
    ///
    /// ```
    /// use card_info::brand::BrandDefinition;
    ///
    /// let brand = BrandDefinition::new(
    ///     "troy", "Troy", "CVV", 3, &[4, 8, 12], &[16], "9792",
    /// ).unwrap();
    /// assert!(brand.pattern.matches("9792000000000000"));
    /// ```
    pub fn new(
        alias: &str,
        name: &str,
        code_name: &str,
        code_length: u8,
        gaps: &[usize],
        lengths: &[usize],
        prefix: &str,
    ) -> Result<Self, ConfigError> {
        let pattern = NumberPattern::new(prefix).map_err(|e| match e {
            ConfigError::InvalidPattern { message, .. } => ConfigError::InvalidPattern {
                alias: alias.to_string(),
                message,
            },
            other => other,
        })?;

        Ok(Self {
            alias: alias.to_string(),
            name: name.to_string(),
            code_name: code_name.to_string(),
            code_length,
            gaps: gaps.to_vec(),
            lengths: lengths.to_vec(),
            pattern,
        })
    }

    /// Returns the largest allowed length.
    pub fn max_length(&self) -> usize {
        self.lengths.last().copied().unwrap_or(0)
    }

    /// Returns true if `length` is one of the brand's allowed lengths.
    pub fn is_valid_length(&self, length: usize) -> bool {
        self.lengths.contains(&length)
    }
}

impl fmt::Display for BrandDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

type BuiltinRow = (
    &'static str,
    &'static str,
    &'static str,
    u8,
    &'static [usize],
    &'static [usize],
    &'static str,
);

const BUILTIN_BRANDS: &[BuiltinRow] = &[
    ("visa", "Visa", "CVV", 3, &[4, 8, 12], &[16], "4"),
    (
        "master-card",
        "MasterCard",
        "CVC",
        3,
        &[4, 8, 12],
        &[16],
        "5[1-5]|222[1-9]|2[3-6]|27[0-1]|2720",
    ),
    ("american-express", "American Express", "CID", 4, &[4, 10], &[15], "3[47]"),
    ("diners-club", "Diners Club", "CVV", 3, &[4, 10], &[14], "3(0[0-5]|[689])"),
    ("discover", "Discover", "CID", 3, &[4, 8, 12], &[16, 19], "6011|65|64[4-9]"),
    ("jcb", "JCB", "CVV", 3, &[4, 8, 12], &[16], "2131|1800|35"),
    ("unionpay", "UnionPay", "CVN", 3, &[4, 8, 12], &[16, 17, 18, 19], "62[0-5]"),
    (
        "maestro",
        "Maestro",
        "CVC",
        3,
        &[4, 8, 12],
        &[12, 13, 14, 15, 16, 17, 18, 19],
        "5[0678]|6304|6390|6054|6271|67",
    ),
    ("mir", "MIR", "CVC", 3, &[4, 8, 12], &[16], "22"),
];

static BUILTIN: Lazy<Vec<BrandDefinition>> = Lazy::new(|| {
    BUILTIN_BRANDS
        .iter()
        .map(|&(alias, name, code_name, code_length, gaps, lengths, prefix)| {
            BrandDefinition::new(alias, name, code_name, code_length, gaps, lengths, prefix)
                .expect("built-in brand patterns are valid")
        })
        .collect()
});

/// Returns the built-in brand definitions in resolution order.
pub fn builtin_brands() -> &'static [BrandDefinition] {
    &BUILTIN
}
