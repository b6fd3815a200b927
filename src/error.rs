//! Error types for configuration and reference data.
//!
//! Resolving a card number never fails: unknown prefixes, ambiguous brands and
//! missing logos all surface as absent fields on [`CardInfo`](crate::CardInfo).
//! The errors here cover the two places where failing fast is correct:
//! invalid configuration and malformed bank/prefix data.

use std::fmt;

/// Errors raised while building configuration or brand definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The brand logo policy name is not one of
    /// `auto`, `colored`, `mono`, `black`, `white`.
    UnknownBrandLogoPolicy(String),

    /// The image extension is not `png` or `svg`.
    UnknownImageExt(String),

    /// A brand number pattern failed to compile.
    InvalidPattern {
        /// Alias of the brand the pattern belongs to.
        alias: String,
        /// Message from the regex compiler.
        message: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownBrandLogoPolicy(name) => write!(
                f,
                "unknown brand logo policy '{}' (expected auto, colored, mono, black or white)",
                name
            ),
            Self::UnknownImageExt(name) => {
                write!(f, "unknown image extension '{}' (expected png or svg)", name)
            }
            Self::InvalidPattern { alias, message } => {
                write!(f, "invalid number pattern for brand '{}': {}", alias, message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors raised while loading bank and prefix data.
#[derive(Debug)]
pub enum DataError {
    /// Failed to read the data file.
    Io(std::io::Error),
    /// Failed to parse the data format.
    Parse(String),
    /// A prefix key is not exactly six ASCII digits.
    InvalidPrefix(String),
    /// A bank record breaks a record invariant.
    InvalidBank {
        /// Identifier of the offending bank.
        id: String,
        /// What is wrong with it.
        reason: String,
    },
    /// Feature not available.
    FeatureNotEnabled(String),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Parse(s) => write!(f, "Parse error: {}", s),
            Self::InvalidPrefix(p) => {
                write!(f, "Invalid prefix '{}': expected exactly 6 digits", p)
            }
            Self::InvalidBank { id, reason } => write!(f, "Invalid bank '{}': {}", id, reason),
            Self::FeatureNotEnabled(s) => write!(f, "Feature not enabled: {}", s),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DataError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
