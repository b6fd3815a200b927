//! Catalog listings of every known bank and brand.
//!
//! Where [`CardInfo`](crate::CardInfo) resolves one number, catalogs apply
//! the same logo and layout rules to every entry, for admin screens and
//! logo galleries.

use crate::bank::{BankRecord, Lightness, LogoStyle};
use crate::brand::BrandDefinition;
use crate::format::{number_blocks, number_mask};
use crate::logo::{gradient, logo_path, preferred_logo, styled_basename};
use crate::options::{ImageExt, Options};
use serde::Serialize;

/// A bank with resolved logo paths and gradient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BankEntry {
    /// Bank identifier.
    pub alias: String,
    /// English name.
    pub name: String,
    /// Native-language name.
    pub name_localized: String,
    /// Country code.
    pub country: String,
    /// Website.
    pub url: String,
    /// Logo path in the preferred format.
    pub logo: Option<String>,
    /// PNG logo path.
    pub logo_png: Option<String>,
    /// SVG logo path.
    pub logo_svg: Option<String>,
    /// Tone of the logo.
    pub logo_style: LogoStyle,
    /// Representative background color.
    pub background_color: String,
    /// Gradient stops.
    pub background_colors: Vec<String>,
    /// CSS gradient over the stops.
    pub background_gradient: String,
    /// Lightness of the background.
    pub background_lightness: Lightness,
    /// Foreground color.
    pub text_color: String,
}

impl BankEntry {
    /// Resolves a bank record against `options`.
    pub fn new(record: &BankRecord, options: &Options) -> Self {
        let dir = &options.banks_logos_path;
        let logo_png = logo_path(dir, record.logo_png.as_deref(), None);
        let logo_svg = logo_path(dir, record.logo_svg.as_deref(), None);

        Self {
            alias: record.alias.clone(),
            name: record.name.clone(),
            name_localized: record.name_localized.clone(),
            country: record.country.clone(),
            url: record.url.clone(),
            logo: preferred_logo(logo_png.as_deref(), logo_svg.as_deref(), options.preferred_ext),
            logo_png,
            logo_svg,
            logo_style: record.logo_style,
            background_color: record.background_color.clone(),
            background_colors: record.background_colors.clone(),
            background_gradient: gradient(&record.background_colors, options.gradient_degrees),
            background_lightness: record.background_lightness,
            text_color: record.text_color.clone(),
        }
    }
}

/// Logo paths of one brand logo style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct LogoSet {
    /// Path in the preferred format.
    pub logo: Option<String>,
    /// PNG path.
    pub png: Option<String>,
    /// SVG path.
    pub svg: Option<String>,
}

impl LogoSet {
    fn new(dir: &str, basename: &str, preferred: ImageExt) -> Self {
        let png = logo_path(dir, Some(basename), Some(ImageExt::Png));
        let svg = logo_path(dir, Some(basename), Some(ImageExt::Svg));
        Self {
            logo: preferred_logo(png.as_deref(), svg.as_deref(), preferred),
            png,
            svg,
        }
    }
}

/// A brand with its layout and every logo variant resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BrandEntry {
    /// Brand alias.
    pub alias: String,
    /// Display name.
    pub name: String,
    /// Security code label.
    pub code_name: String,
    /// Security code length.
    pub code_length: u8,
    /// Gap positions.
    pub gaps: Vec<usize>,
    /// Allowed lengths.
    pub lengths: Vec<usize>,
    /// Prefix alternation the brand is matched with.
    pub pattern: String,
    /// Block widths of the longest allowed number.
    pub blocks: Vec<usize>,
    /// Input mask.
    pub mask: String,
    /// Colored logos.
    pub logo_colored: LogoSet,
    /// Black logos.
    pub logo_black: LogoSet,
    /// White logos.
    pub logo_white: LogoSet,
}

impl BrandEntry {
    /// Resolves a brand definition against `options`.
    pub fn new(brand: &BrandDefinition, options: &Options) -> Self {
        let blocks = number_blocks(&brand.gaps, &brand.lengths);
        let mask = number_mask(
            &blocks,
            &options.mask_digit_symbol,
            &options.mask_delimiter_symbol,
        );
        let logos = |style| {
            LogoSet::new(
                &options.brands_logos_path,
                &styled_basename(&brand.alias, style),
                options.preferred_ext,
            )
        };

        Self {
            alias: brand.alias.clone(),
            name: brand.name.clone(),
            code_name: brand.code_name.clone(),
            code_length: brand.code_length,
            gaps: brand.gaps.clone(),
            lengths: brand.lengths.clone(),
            pattern: brand.pattern.prefix().to_string(),
            blocks,
            mask,
            logo_colored: logos(LogoStyle::Colored),
            logo_black: logos(LogoStyle::Black),
            logo_white: logos(LogoStyle::White),
        }
    }

    /// Returns the logo set of a style.
    pub fn logos(&self, style: LogoStyle) -> &LogoSet {
        match style {
            LogoStyle::Colored => &self.logo_colored,
            LogoStyle::Black => &self.logo_black,
            LogoStyle::White => &self.logo_white,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::sample_bank;
    use crate::brand::builtin_brands;
    use crate::options::OptionOverrides;

    #[test]
    fn test_bank_entry() {
        let options = Options::default().merged(&OptionOverrides::new().banks_logos_path("/b/"));
        let entry = BankEntry::new(&sample_bank("ru-test"), &options);

        assert_eq!(entry.logo_png.as_deref(), Some("/b/ru-test.png"));
        assert_eq!(entry.logo_svg, None);
        assert_eq!(entry.logo.as_deref(), Some("/b/ru-test.png"));
        assert_eq!(
            entry.background_gradient,
            "linear-gradient(135deg, #444444, #222222)"
        );
    }

    #[test]
    fn test_brand_entry_logos() {
        let options = Options::default().merged(&OptionOverrides::new().brands_logos_path("/x/"));
        let entry = BrandEntry::new(&builtin_brands()[0], &options);

        assert_eq!(entry.mask, "0000 0000 0000 0000");
        assert_eq!(entry.blocks, vec![4, 4, 4, 4]);
        assert_eq!(entry.pattern, "4");
        for style in LogoStyle::ALL {
            let set = entry.logos(style);
            assert_eq!(set.png, Some(format!("/x/visa-{}.png", style)));
            assert_eq!(set.svg, Some(format!("/x/visa-{}.svg", style)));
            assert_eq!(set.logo, set.svg);
        }
    }

    #[test]
    fn test_brand_entry_serialization() {
        let entry = BrandEntry::new(&builtin_brands()[2], &Options::default());
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["alias"], "american-express");
        assert_eq!(json["mask"], "0000 000000 00000");
        assert!(json["logoWhite"]["svg"].as_str().unwrap().ends_with("american-express-white.svg"));
    }
}
