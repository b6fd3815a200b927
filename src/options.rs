//! Configuration for building card info.
//!
//! [`Options`] is the fully-resolved configuration used by every build.
//! A [`CardRegistry`](crate::CardRegistry) keeps one set of defaults and each
//! call may layer an [`OptionOverrides`] on top. Merging is field by field:
//! an override replaces exactly the fields it sets.
//!
//! # Example
//!
//! ```
//! use card_info::options::{BrandLogoPolicy, ImageExt, OptionOverrides, Options};
//!
//! let overrides = OptionOverrides::new()
//!     .brand_logo_policy(BrandLogoPolicy::Mono)
//!     .preferred_ext(ImageExt::Png);
//!
//! let options = Options::default().merged(&overrides);
//! assert_eq!(options.brand_logo_policy, BrandLogoPolicy::Mono);
//! assert_eq!(options.mask_digit_symbol, "0");
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default directory of bank logo files.
pub const DEFAULT_BANKS_LOGOS_PATH: &str = "/bower_components/card-info/dist/banks-logos/";

/// Default directory of brand logo files.
pub const DEFAULT_BRANDS_LOGOS_PATH: &str = "/bower_components/card-info/dist/brands-logos/";

/// Default angle of the background gradient, in degrees.
pub const DEFAULT_GRADIENT_DEGREES: i32 = 135;

/// How the brand logo variant is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum BrandLogoPolicy {
    /// Match the tone of the bank's own logo, `colored` when unknown.
    #[default]
    Auto,
    /// Always the colored logo.
    Colored,
    /// Black on light backgrounds, white on dark ones.
    Mono,
    /// Always the black logo.
    Black,
    /// Always the white logo.
    White,
}

impl BrandLogoPolicy {
    /// Returns the configuration name of the policy.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Colored => "colored",
            Self::Mono => "mono",
            Self::Black => "black",
            Self::White => "white",
        }
    }
}

impl fmt::Display for BrandLogoPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrandLogoPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "colored" => Ok(Self::Colored),
            "mono" => Ok(Self::Mono),
            "black" => Ok(Self::Black),
            "white" => Ok(Self::White),
            other => Err(ConfigError::UnknownBrandLogoPolicy(other.to_string())),
        }
    }
}

impl TryFrom<String> for BrandLogoPolicy {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Image format of a logo file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ImageExt {
    /// Raster logo.
    Png,
    /// Vector logo.
    #[default]
    Svg,
}

impl ImageExt {
    /// Returns the file extension without the dot.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }
}

impl fmt::Display for ImageExt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageExt {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            other => Err(ConfigError::UnknownImageExt(other.to_string())),
        }
    }
}

impl TryFrom<String> for ImageExt {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Fully-resolved build configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    /// Directory prefix for bank logo files, with trailing slash.
    pub banks_logos_path: String,
    /// Directory prefix for brand logo files, with trailing slash.
    pub brands_logos_path: String,
    /// Which brand logo variant to present.
    pub brand_logo_policy: BrandLogoPolicy,
    /// Logo format to present when both are available.
    pub preferred_ext: ImageExt,
    /// Symbol emitted for each digit position in the mask.
    pub mask_digit_symbol: String,
    /// Symbol placed between mask blocks.
    pub mask_delimiter_symbol: String,
    /// Background gradient angle.
    pub gradient_degrees: i32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            banks_logos_path: DEFAULT_BANKS_LOGOS_PATH.to_string(),
            brands_logos_path: DEFAULT_BRANDS_LOGOS_PATH.to_string(),
            brand_logo_policy: BrandLogoPolicy::Auto,
            preferred_ext: ImageExt::Svg,
            mask_digit_symbol: "0".to_string(),
            mask_delimiter_symbol: " ".to_string(),
            gradient_degrees: DEFAULT_GRADIENT_DEGREES,
        }
    }
}

impl Options {
    /// Returns a copy with every field set in `overrides` replaced.
    pub fn merged(&self, overrides: &OptionOverrides) -> Self {
        let mut options = self.clone();
        options.apply(overrides);
        options
    }

    /// Replaces every field set in `overrides`, in place.
    pub fn apply(&mut self, overrides: &OptionOverrides) {
        if let Some(path) = &overrides.banks_logos_path {
            self.banks_logos_path.clone_from(path);
        }
        if let Some(path) = &overrides.brands_logos_path {
            self.brands_logos_path.clone_from(path);
        }
        if let Some(policy) = overrides.brand_logo_policy {
            self.brand_logo_policy = policy;
        }
        if let Some(ext) = overrides.preferred_ext {
            self.preferred_ext = ext;
        }
        if let Some(symbol) = &overrides.mask_digit_symbol {
            self.mask_digit_symbol.clone_from(symbol);
        }
        if let Some(symbol) = &overrides.mask_delimiter_symbol {
            self.mask_delimiter_symbol.clone_from(symbol);
        }
        if let Some(degrees) = overrides.gradient_degrees {
            self.gradient_degrees = degrees;
        }
    }
}

/// A partial configuration; unset fields fall back to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptionOverrides {
    /// Overrides [`Options::banks_logos_path`].
    pub banks_logos_path: Option<String>,
    /// Overrides [`Options::brands_logos_path`].
    pub brands_logos_path: Option<String>,
    /// Overrides [`Options::brand_logo_policy`].
    pub brand_logo_policy: Option<BrandLogoPolicy>,
    /// Overrides [`Options::preferred_ext`].
    pub preferred_ext: Option<ImageExt>,
    /// Overrides [`Options::mask_digit_symbol`].
    pub mask_digit_symbol: Option<String>,
    /// Overrides [`Options::mask_delimiter_symbol`].
    pub mask_delimiter_symbol: Option<String>,
    /// Overrides [`Options::gradient_degrees`].
    pub gradient_degrees: Option<i32>,
}

impl OptionOverrides {
    /// Creates an empty set of overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no field is overridden.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Parses overrides from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns the serde error when the JSON is malformed or names an unknown
    /// policy or extension.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Builder method to set the bank logo directory.
    pub fn banks_logos_path(mut self, path: impl Into<String>) -> Self {
        self.banks_logos_path = Some(path.into());
        self
    }

    /// Builder method to set the brand logo directory.
    pub fn brands_logos_path(mut self, path: impl Into<String>) -> Self {
        self.brands_logos_path = Some(path.into());
        self
    }

    /// Builder method to set the brand logo policy.
    pub fn brand_logo_policy(mut self, policy: BrandLogoPolicy) -> Self {
        self.brand_logo_policy = Some(policy);
        self
    }

    /// Builder method to set the preferred logo format.
    pub fn preferred_ext(mut self, ext: ImageExt) -> Self {
        self.preferred_ext = Some(ext);
        self
    }

    /// Builder method to set the mask digit symbol.
    pub fn mask_digit_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.mask_digit_symbol = Some(symbol.into());
        self
    }

    /// Builder method to set the mask delimiter symbol.
    pub fn mask_delimiter_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.mask_delimiter_symbol = Some(symbol.into());
        self
    }

    /// Builder method to set the gradient angle.
    pub fn gradient_degrees(mut self, degrees: i32) -> Self {
        self.gradient_degrees = Some(degrees);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.banks_logos_path, DEFAULT_BANKS_LOGOS_PATH);
        assert_eq!(options.brands_logos_path, DEFAULT_BRANDS_LOGOS_PATH);
        assert_eq!(options.brand_logo_policy, BrandLogoPolicy::Auto);
        assert_eq!(options.preferred_ext, ImageExt::Svg);
        assert_eq!(options.mask_digit_symbol, "0");
        assert_eq!(options.mask_delimiter_symbol, " ");
        assert_eq!(options.gradient_degrees, 135);
    }

    #[test]
    fn test_merge_is_field_by_field() {
        let base = Options::default();
        let merged = base.merged(
            &OptionOverrides::new()
                .mask_delimiter_symbol("-")
                .gradient_degrees(90),
        );

        assert_eq!(merged.mask_delimiter_symbol, "-");
        assert_eq!(merged.gradient_degrees, 90);
        assert_eq!(merged.mask_digit_symbol, base.mask_digit_symbol);
        assert_eq!(merged.banks_logos_path, base.banks_logos_path);
    }

    #[test]
    fn test_empty_overrides_change_nothing() {
        let overrides = OptionOverrides::new();
        assert!(overrides.is_empty());
        assert_eq!(Options::default().merged(&overrides), Options::default());
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("auto".parse::<BrandLogoPolicy>().unwrap(), BrandLogoPolicy::Auto);
        assert_eq!("mono".parse::<BrandLogoPolicy>().unwrap(), BrandLogoPolicy::Mono);
        assert_eq!(
            "Rainbow".parse::<BrandLogoPolicy>().unwrap_err(),
            ConfigError::UnknownBrandLogoPolicy("Rainbow".into())
        );
    }

    #[test]
    fn test_ext_parsing() {
        assert_eq!("png".parse::<ImageExt>().unwrap(), ImageExt::Png);
        assert_eq!("svg".parse::<ImageExt>().unwrap(), ImageExt::Svg);
        assert!("jpg".parse::<ImageExt>().is_err());
    }

    #[test]
    fn test_overrides_from_json() {
        let overrides = OptionOverrides::from_json(
            r#"{"brandLogoPolicy": "white", "preferredExt": "png", "banksLogosPath": "/s/i/banks/"}"#,
        )
        .unwrap();
        assert_eq!(overrides.brand_logo_policy, Some(BrandLogoPolicy::White));
        assert_eq!(overrides.preferred_ext, Some(ImageExt::Png));
        assert_eq!(overrides.banks_logos_path.as_deref(), Some("/s/i/banks/"));
        assert_eq!(overrides.mask_digit_symbol, None);
    }

    #[test]
    fn test_unknown_policy_in_json_fails() {
        let err = OptionOverrides::from_json(r#"{"brandLogoPolicy": "neon"}"#).unwrap_err();
        assert!(err.to_string().contains("neon"));
    }

    #[test]
    fn test_options_serialize_camel_case() {
        let json = serde_json::to_string(&Options::default()).unwrap();
        assert!(json.contains("\"brandLogoPolicy\":\"auto\""));
        assert!(json.contains("\"preferredExt\":\"svg\""));
        assert!(json.contains("\"gradientDegrees\":135"));
    }
}
