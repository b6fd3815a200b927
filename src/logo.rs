//! Logo paths and background styles.
//!
//! Bank records carry ready file names (`ru-alfa.png`); brand logos are
//! derived from the brand alias and a style (`visa-white`), then given an
//! extension. Which brand style is shown depends on the configured
//! [`BrandLogoPolicy`] and on the bank the card belongs to.

use crate::bank::{Lightness, LogoStyle};
use crate::options::{BrandLogoPolicy, ImageExt};

/// Joins a directory and a file name into a logo path.
///
/// `ext` is appended only when given; bank file names already carry theirs.
/// A missing or empty basename yields `None`.
///
/// # Example
///
/// ```
/// use card_info::logo::logo_path;
/// use card_info::options::ImageExt;
///
/// assert_eq!(
///     logo_path("/banks/", Some("ru-alfa.png"), None).as_deref(),
///     Some("/banks/ru-alfa.png")
/// );
/// assert_eq!(
///     logo_path("/brands/", Some("visa-white"), Some(ImageExt::Svg)).as_deref(),
///     Some("/brands/visa-white.svg")
/// );
/// assert_eq!(logo_path("/banks/", None, None), None);
/// ```
pub fn logo_path(dir: &str, basename: Option<&str>, ext: Option<ImageExt>) -> Option<String> {
    let basename = basename.filter(|b| !b.is_empty())?;
    Some(match ext {
        Some(ext) => format!("{}{}.{}", dir, basename, ext.as_str()),
        None => format!("{}{}", dir, basename),
    })
}

/// Picks the brand logo style for a policy.
///
/// - `Auto` follows the bank's logo style, `Colored` when there is no bank.
/// - `Mono` is black on light backgrounds and white on dark ones.
/// - `Colored`, `Black` and `White` are fixed.
pub fn brand_logo_style(
    policy: BrandLogoPolicy,
    lightness: Lightness,
    bank_logo_style: Option<LogoStyle>,
) -> LogoStyle {
    match policy {
        BrandLogoPolicy::Auto => bank_logo_style.unwrap_or(LogoStyle::Colored),
        BrandLogoPolicy::Colored => LogoStyle::Colored,
        BrandLogoPolicy::Mono => match lightness {
            Lightness::Light => LogoStyle::Black,
            Lightness::Dark => LogoStyle::White,
        },
        BrandLogoPolicy::Black => LogoStyle::Black,
        BrandLogoPolicy::White => LogoStyle::White,
    }
}

/// Builds the brand logo file stem, `{alias}-{style}`.
///
/// # Example
///
/// ```
/// use card_info::bank::{Lightness, LogoStyle};
/// use card_info::logo::brand_logo_basename;
/// use card_info::options::BrandLogoPolicy;
///
/// assert_eq!(
///     brand_logo_basename("visa", BrandLogoPolicy::Mono, Lightness::Dark, None),
///     "visa-white"
/// );
/// assert_eq!(
///     brand_logo_basename("mir", BrandLogoPolicy::Auto, Lightness::Light, Some(LogoStyle::Black)),
///     "mir-black"
/// );
/// ```
pub fn brand_logo_basename(
    alias: &str,
    policy: BrandLogoPolicy,
    lightness: Lightness,
    bank_logo_style: Option<LogoStyle>,
) -> String {
    styled_basename(alias, brand_logo_style(policy, lightness, bank_logo_style))
}

/// Builds `{alias}-{style}`.
#[inline]
pub fn styled_basename(alias: &str, style: LogoStyle) -> String {
    format!("{}-{}", alias, style.as_str())
}

/// Chooses between a PNG and an SVG logo.
///
/// With only one available, that one wins regardless of preference.
///
/// # Example
///
/// ```
/// use card_info::logo::preferred_logo;
/// use card_info::options::ImageExt;
///
/// assert_eq!(preferred_logo(Some("a.png"), None, ImageExt::Svg).as_deref(), Some("a.png"));
/// assert_eq!(preferred_logo(Some("a.png"), Some("a.svg"), ImageExt::Svg).as_deref(), Some("a.svg"));
/// assert_eq!(preferred_logo(Some("a.png"), Some("a.svg"), ImageExt::Png).as_deref(), Some("a.png"));
/// assert_eq!(preferred_logo(None, None, ImageExt::Png), None);
/// ```
pub fn preferred_logo(png: Option<&str>, svg: Option<&str>, preferred: ImageExt) -> Option<String> {
    let chosen = match (png, svg) {
        (None, None) => return None,
        (Some(png), None) => png,
        (None, Some(svg)) => svg,
        (Some(png), Some(svg)) => match preferred {
            ImageExt::Png => png,
            ImageExt::Svg => svg,
        },
    };
    Some(chosen.to_string())
}

/// Builds a CSS linear gradient from color stops.
///
/// # Example
///
/// ```
/// use card_info::logo::gradient;
///
/// let colors = ["#eeeeee".to_string(), "#dddddd".to_string()];
/// assert_eq!(gradient(&colors, 135), "linear-gradient(135deg, #eeeeee, #dddddd)");
/// ```
pub fn gradient<S: AsRef<str>>(colors: &[S], degrees: i32) -> String {
    let stops: Vec<&str> = colors.iter().map(AsRef::as_ref).collect();
    format!("linear-gradient({}deg, {})", degrees, stops.join(", "))
}
