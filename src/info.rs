//! The card info result type.
//!
//! A [`CardInfo`] is a flat snapshot of everything known about a (possibly
//! partial) card number: bank, brand, styling, logos and layout. It is built
//! by [`CardRegistry::build`](crate::CardRegistry::build), never fails to
//! build, and is meant to be thrown away and rebuilt on every keystroke.
//!
//! # Security
//!
//! - The digit fields are private and zeroized on drop using `zeroize`
//! - `Debug` and `Display` show a redacted number only
//! - Serialization does include the number; do not log serialized results

use crate::bank::{BankRecord, Lightness, LogoStyle};
use crate::brand::BrandDefinition;
use crate::format::{number_blocks, number_mask, number_nice, DEFAULT_GAPS, DEFAULT_LENGTHS};
use crate::logo::{brand_logo_basename, gradient, logo_path, preferred_logo};
use crate::mask::{last_four, redact_number};
use crate::options::{ImageExt, Options};
use serde::Serialize;
use std::fmt;
use zeroize::Zeroize;

/// Background color used when no bank is resolved.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#eeeeee";

/// Gradient stops used when no bank is resolved.
pub const DEFAULT_BACKGROUND_COLORS: [&str; 2] = ["#eeeeee", "#dddddd"];

/// Text color used when no bank is resolved.
pub const DEFAULT_TEXT_COLOR: &str = "#000";

/// Everything known about a card number.
///
/// Bank fields are `None` when the prefix is not indexed; brand fields are
/// `None` unless exactly one brand matches. Style and layout fields are
/// always populated, falling back to neutral defaults.
///
/// # Example
///
/// ```
/// use card_info::CardRegistry;
///
/// let registry = CardRegistry::new();
/// let info = registry.info("4242 4242 4242 4242");
///
/// assert_eq!(info.brand_alias.as_deref(), Some("visa"));
/// assert_eq!(info.number_mask, "0000 0000 0000 0000");
/// assert_eq!(info.number_nice(), "4242 4242 4242 4242");
/// assert!(info.bank_alias.is_none());
/// ```
#[derive(Clone, Serialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CardInfo {
    /// Identifier of the issuing bank.
    pub bank_alias: Option<String>,
    /// English name of the bank.
    pub bank_name: Option<String>,
    /// Native-language name of the bank.
    pub bank_name_localized: Option<String>,
    /// Country code of the bank.
    pub bank_country: Option<String>,
    /// Bank website.
    pub bank_url: Option<String>,
    /// Bank logo path in the preferred format, falling back to the other.
    pub bank_logo: Option<String>,
    /// PNG bank logo path.
    pub bank_logo_png: Option<String>,
    /// SVG bank logo path.
    pub bank_logo_svg: Option<String>,
    /// Tone of the bank's logo.
    pub bank_logo_style: Option<LogoStyle>,

    /// Representative background color.
    pub background_color: String,
    /// Background gradient stops.
    pub background_colors: Vec<String>,
    /// Lightness of the background.
    pub background_lightness: Lightness,
    /// CSS gradient over `background_colors`.
    pub background_gradient: String,
    /// Foreground color.
    pub text_color: String,

    /// Brand alias, e.g. `visa`.
    pub brand_alias: Option<String>,
    /// Brand display name.
    pub brand_name: Option<String>,
    /// Brand logo path in the preferred format.
    pub brand_logo: Option<String>,
    /// PNG brand logo path.
    pub brand_logo_png: Option<String>,
    /// SVG brand logo path.
    pub brand_logo_svg: Option<String>,
    /// Security code label.
    pub code_name: Option<String>,
    /// Security code length.
    pub code_length: Option<u8>,

    /// Gap positions used for the layout.
    pub number_gaps: Vec<usize>,
    /// Allowed lengths used for the layout.
    pub number_lengths: Vec<usize>,
    /// Block widths of the longest allowed number.
    pub number_blocks: Vec<usize>,
    /// Input mask, e.g. `0000 0000 0000 0000`.
    pub number_mask: String,

    number_nice: String,
    number: String,
    number_source: String,
}

impl CardInfo {
    /// Assembles a result from already-resolved bank and brand data.
    pub(crate) fn assemble(
        number_source: String,
        number: String,
        bank: Option<&BankRecord>,
        brand: Option<&BrandDefinition>,
        options: &Options,
    ) -> Self {
        let mut info = Self {
            bank_alias: None,
            bank_name: None,
            bank_name_localized: None,
            bank_country: None,
            bank_url: None,
            bank_logo: None,
            bank_logo_png: None,
            bank_logo_svg: None,
            bank_logo_style: None,
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            background_colors: DEFAULT_BACKGROUND_COLORS.iter().map(|c| c.to_string()).collect(),
            background_lightness: Lightness::Light,
            background_gradient: String::new(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            brand_alias: None,
            brand_name: None,
            brand_logo: None,
            brand_logo_png: None,
            brand_logo_svg: None,
            code_name: None,
            code_length: None,
            number_gaps: DEFAULT_GAPS.to_vec(),
            number_lengths: DEFAULT_LENGTHS.to_vec(),
            number_blocks: Vec::new(),
            number_mask: String::new(),
            number_nice: String::new(),
            number,
            number_source,
        };

        if let Some(bank) = bank {
            info.apply_bank(bank, options);
        }
        info.background_gradient = gradient(&info.background_colors, options.gradient_degrees);

        if let Some(brand) = brand {
            info.apply_brand(brand, options);
        }

        info.number_blocks = number_blocks(&info.number_gaps, &info.number_lengths);
        info.number_mask = number_mask(
            &info.number_blocks,
            &options.mask_digit_symbol,
            &options.mask_delimiter_symbol,
        );
        info.number_nice = number_nice(&info.number, &info.number_gaps);
        info
    }

    fn apply_bank(&mut self, bank: &BankRecord, options: &Options) {
        let dir = &options.banks_logos_path;
        let png = logo_path(dir, bank.logo_png.as_deref(), None);
        let svg = logo_path(dir, bank.logo_svg.as_deref(), None);

        self.bank_alias = Some(bank.alias.clone());
        self.bank_name = Some(bank.name.clone());
        self.bank_name_localized = Some(bank.name_localized.clone());
        self.bank_country = Some(bank.country.clone());
        self.bank_url = Some(bank.url.clone());
        self.bank_logo = preferred_logo(png.as_deref(), svg.as_deref(), options.preferred_ext);
        self.bank_logo_png = png;
        self.bank_logo_svg = svg;
        self.bank_logo_style = Some(bank.logo_style);
        self.background_color.clone_from(&bank.background_color);
        self.background_colors.clone_from(&bank.background_colors);
        self.background_lightness = bank.background_lightness;
        self.text_color.clone_from(&bank.text_color);
    }

    fn apply_brand(&mut self, brand: &BrandDefinition, options: &Options) {
        let basename = brand_logo_basename(
            &brand.alias,
            options.brand_logo_policy,
            self.background_lightness,
            self.bank_logo_style,
        );
        let dir = &options.brands_logos_path;
        let png = logo_path(dir, Some(&basename), Some(ImageExt::Png));
        let svg = logo_path(dir, Some(&basename), Some(ImageExt::Svg));

        self.brand_alias = Some(brand.alias.clone());
        self.brand_name = Some(brand.name.clone());
        self.brand_logo = preferred_logo(png.as_deref(), svg.as_deref(), options.preferred_ext);
        self.brand_logo_png = png;
        self.brand_logo_svg = svg;
        self.code_name = Some(brand.code_name.clone());
        self.code_length = Some(brand.code_length);
        self.number_gaps.clone_from(&brand.gaps);
        self.number_lengths.clone_from(&brand.lengths);
    }

    /// The normalized, digit-only number.
    #[inline]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// The input exactly as supplied.
    #[inline]
    pub fn number_source(&self) -> &str {
        &self.number_source
    }

    /// The entered digits grouped by gap positions.
    #[inline]
    pub fn number_nice(&self) -> &str {
        &self.number_nice
    }

    /// Returns true if a bank was resolved.
    #[inline]
    pub fn has_bank(&self) -> bool {
        self.bank_alias.is_some()
    }

    /// Returns true if exactly one brand was resolved.
    #[inline]
    pub fn has_brand(&self) -> bool {
        self.brand_alias.is_some()
    }

    /// Returns true if the number has one of the allowed lengths.
    pub fn is_complete(&self) -> bool {
        self.number_lengths.contains(&self.number.len())
    }

    /// The last 4 digits, empty when fewer were entered.
    pub fn last_four(&self) -> &str {
        last_four(&self.number)
    }

    /// The number with everything but the prefix and last 4 digits starred.
    pub fn redacted(&self) -> String {
        redact_number(&self.number)
    }
}

impl fmt::Debug for CardInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardInfo")
            .field("number", &self.redacted())
            .field("bank_alias", &self.bank_alias)
            .field("brand_alias", &self.brand_alias)
            .field("background_lightness", &self.background_lightness)
            .field("number_mask", &self.number_mask)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for CardInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let brand = self.brand_name.as_deref().unwrap_or("Unknown brand");
        write!(f, "{} {}", brand, self.redacted())?;
        if let Some(bank) = &self.bank_name {
            write!(f, " ({})", bank)?;
        }
        Ok(())
    }
}

impl Drop for CardInfo {
    fn drop(&mut self) {
        self.number.zeroize();
        self.number_source.zeroize();
        self.number_nice.zeroize();
    }
}
