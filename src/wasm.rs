//! WebAssembly bindings for card info lookup.
//!
//! This module exposes a [`CardInfoEngine`] owning its own registry, so a page
//! can load bank data once and build results on every keystroke.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { CardInfoEngine } from 'card_info';
//!
//! await init();
//!
//! const engine = CardInfoEngine.withBundledData();
//! engine.setDefaultOptions(JSON.stringify({ banksLogosPath: '/img/banks/' }));
//!
//! input.addEventListener('input', () => {
//!     const info = engine.build(input.value);
//!     card.style.background = info.backgroundGradient;
//!     logo.src = info.bankLogo ?? '';
//!     input.placeholder = info.numberMask;
//! });
//! ```

#![cfg(feature = "wasm")]

use crate::info::CardInfo;
use crate::options::OptionOverrides;
use crate::registry::CardRegistry;
use std::num::TryFromIntError;
use wasm_bindgen::prelude::*;

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_overrides(options_json: Option<String>) -> Result<OptionOverrides, JsValue> {
    match options_json {
        Some(json) if !json.trim().is_empty() => OptionOverrides::from_json(&json).map_err(js_error),
        _ => Ok(OptionOverrides::default()),
    }
}

fn string_array<S: AsRef<str>>(items: &[S]) -> js_sys::Array {
    items
        .iter()
        .map(|s| JsValue::from_str(s.as_ref()))
        .collect()
}

fn number_array(items: &[usize]) -> Result<Vec<u32>, TryFromIntError> {
    items.iter().map(|&n| u32::try_from(n)).collect()
}

fn gap_positions(gaps: &[u32]) -> Result<Vec<usize>, TryFromIntError> {
    gaps.iter().map(|&g| usize::try_from(g)).collect()
}

/// Card info returned to JavaScript, read through getters.
#[wasm_bindgen(js_name = CardInfo)]
pub struct JsCardInfo {
    inner: CardInfo,
}

#[wasm_bindgen(js_class = CardInfo)]
impl JsCardInfo {
    #[wasm_bindgen(getter, js_name = bankAlias)]
    pub fn bank_alias(&self) -> Option<String> {
        self.inner.bank_alias.clone()
    }

    #[wasm_bindgen(getter, js_name = bankName)]
    pub fn bank_name(&self) -> Option<String> {
        self.inner.bank_name.clone()
    }

    #[wasm_bindgen(getter, js_name = bankNameLocalized)]
    pub fn bank_name_localized(&self) -> Option<String> {
        self.inner.bank_name_localized.clone()
    }

    #[wasm_bindgen(getter, js_name = bankCountry)]
    pub fn bank_country(&self) -> Option<String> {
        self.inner.bank_country.clone()
    }

    #[wasm_bindgen(getter, js_name = bankUrl)]
    pub fn bank_url(&self) -> Option<String> {
        self.inner.bank_url.clone()
    }

    #[wasm_bindgen(getter, js_name = bankLogo)]
    pub fn bank_logo(&self) -> Option<String> {
        self.inner.bank_logo.clone()
    }

    #[wasm_bindgen(getter, js_name = bankLogoPng)]
    pub fn bank_logo_png(&self) -> Option<String> {
        self.inner.bank_logo_png.clone()
    }

    #[wasm_bindgen(getter, js_name = bankLogoSvg)]
    pub fn bank_logo_svg(&self) -> Option<String> {
        self.inner.bank_logo_svg.clone()
    }

    #[wasm_bindgen(getter, js_name = bankLogoStyle)]
    pub fn bank_logo_style(&self) -> Option<String> {
        self.inner.bank_logo_style.map(|s| s.as_str().to_string())
    }

    #[wasm_bindgen(getter, js_name = backgroundColor)]
    pub fn background_color(&self) -> String {
        self.inner.background_color.clone()
    }

    #[wasm_bindgen(getter, js_name = backgroundColors)]
    pub fn background_colors(&self) -> js_sys::Array {
        string_array(&self.inner.background_colors)
    }

    #[wasm_bindgen(getter, js_name = backgroundLightness)]
    pub fn background_lightness(&self) -> String {
        self.inner.background_lightness.to_string()
    }

    #[wasm_bindgen(getter, js_name = backgroundGradient)]
    pub fn background_gradient(&self) -> String {
        self.inner.background_gradient.clone()
    }

    #[wasm_bindgen(getter, js_name = textColor)]
    pub fn text_color(&self) -> String {
        self.inner.text_color.clone()
    }

    #[wasm_bindgen(getter, js_name = brandAlias)]
    pub fn brand_alias(&self) -> Option<String> {
        self.inner.brand_alias.clone()
    }

    #[wasm_bindgen(getter, js_name = brandName)]
    pub fn brand_name(&self) -> Option<String> {
        self.inner.brand_name.clone()
    }

    #[wasm_bindgen(getter, js_name = brandLogo)]
    pub fn brand_logo(&self) -> Option<String> {
        self.inner.brand_logo.clone()
    }

    #[wasm_bindgen(getter, js_name = brandLogoPng)]
    pub fn brand_logo_png(&self) -> Option<String> {
        self.inner.brand_logo_png.clone()
    }

    #[wasm_bindgen(getter, js_name = brandLogoSvg)]
    pub fn brand_logo_svg(&self) -> Option<String> {
        self.inner.brand_logo_svg.clone()
    }

    #[wasm_bindgen(getter, js_name = codeName)]
    pub fn code_name(&self) -> Option<String> {
        self.inner.code_name.clone()
    }

    #[wasm_bindgen(getter, js_name = codeLength)]
    pub fn code_length(&self) -> Option<u8> {
        self.inner.code_length
    }

    #[wasm_bindgen(getter, js_name = numberGaps)]
    pub fn number_gaps(&self) -> Result<Vec<u32>, JsValue> {
        number_array(&self.inner.number_gaps).map_err(js_error)
    }

    #[wasm_bindgen(getter, js_name = numberLengths)]
    pub fn number_lengths(&self) -> Result<Vec<u32>, JsValue> {
        number_array(&self.inner.number_lengths).map_err(js_error)
    }

    #[wasm_bindgen(getter, js_name = numberBlocks)]
    pub fn number_blocks(&self) -> Result<Vec<u32>, JsValue> {
        number_array(&self.inner.number_blocks).map_err(js_error)
    }

    #[wasm_bindgen(getter, js_name = numberMask)]
    pub fn number_mask(&self) -> String {
        self.inner.number_mask.clone()
    }

    #[wasm_bindgen(getter, js_name = numberNice)]
    pub fn number_nice(&self) -> String {
        self.inner.number_nice().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn number(&self) -> String {
        self.inner.number().to_string()
    }

    #[wasm_bindgen(getter, js_name = numberSource)]
    pub fn number_source(&self) -> String {
        self.inner.number_source().to_string()
    }

    /// Serializes the whole result, for `JSON.stringify`.
    #[wasm_bindgen(js_name = toJSON)]
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        let json = serde_json::to_string(&self.inner).map_err(js_error)?;
        js_sys::JSON::parse(&json)
    }
}

/// A card registry living on the JavaScript side.
#[wasm_bindgen]
pub struct CardInfoEngine {
    registry: CardRegistry,
}

#[wasm_bindgen]
impl CardInfoEngine {
    /// Creates an engine with the built-in brands and no banks.
    #[wasm_bindgen(constructor)]
    pub fn new() -> CardInfoEngine {
        CardInfoEngine {
            registry: CardRegistry::new(),
        }
    }

    /// Creates an engine with the bundled bank data.
    #[wasm_bindgen(js_name = withBundledData)]
    pub fn with_bundled_data() -> Result<CardInfoEngine, JsValue> {
        let registry = CardRegistry::with_bundled_data().map_err(js_error)?;
        Ok(CardInfoEngine { registry })
    }

    /// Merges a `{"banks": {...}, "prefixes": {...}}` JSON payload.
    ///
    /// # Example
    /// ```javascript
    /// engine.addBanksAndPrefixes(await (await fetch('/banks.json')).text());
    /// ```
    #[wasm_bindgen(js_name = addBanksAndPrefixes)]
    pub fn add_banks_and_prefixes(&mut self, json: &str) -> Result<(), JsValue> {
        self.registry.merge_json(json).map_err(js_error)
    }

    /// Overrides default options with a JSON object of option fields.
    #[wasm_bindgen(js_name = setDefaultOptions)]
    pub fn set_default_options(&mut self, options_json: &str) -> Result<(), JsValue> {
        let overrides = OptionOverrides::from_json(options_json).map_err(js_error)?;
        self.registry.set_default_options(&overrides);
        Ok(())
    }

    /// Builds card info, with optional per-call option overrides as JSON.
    ///
    /// # Example
    /// ```javascript
    /// const info = engine.build("4242 4242", JSON.stringify({ brandLogoPolicy: "mono" }));
    /// console.log(info.brandAlias);  // "visa"
    /// console.log(info.numberNice);  // "4242 4242"
    /// ```
    pub fn build(
        &self,
        number_source: &str,
        options_json: Option<String>,
    ) -> Result<JsCardInfo, JsValue> {
        let overrides = parse_overrides(options_json)?;
        Ok(JsCardInfo {
            inner: self.registry.build(number_source, &overrides),
        })
    }

    /// Builds card info and returns it as a JSON string.
    #[wasm_bindgen(js_name = buildJson)]
    pub fn build_json(
        &self,
        number_source: &str,
        options_json: Option<String>,
    ) -> Result<String, JsValue> {
        let overrides = parse_overrides(options_json)?;
        let info = self.registry.build(number_source, &overrides);
        serde_json::to_string(&info).map_err(js_error)
    }

    /// Builds card info for an array of numbers.
    ///
    /// Non-string entries are skipped.
    #[wasm_bindgen(js_name = buildBatch)]
    pub fn build_batch(&self, numbers: js_sys::Array) -> js_sys::Array {
        let results = js_sys::Array::new();
        for value in numbers.iter() {
            if let Some(number) = value.as_string() {
                let info = JsCardInfo {
                    inner: self.registry.info(&number),
                };
                results.push(&JsValue::from(info));
            }
        }
        results
    }

    /// Lists every bank with resolved logos, as a JSON array.
    #[wasm_bindgen(js_name = banksJson)]
    pub fn banks_json(&self, options_json: Option<String>) -> Result<String, JsValue> {
        let overrides = parse_overrides(options_json)?;
        serde_json::to_string(&self.registry.bank_catalog(&overrides)).map_err(js_error)
    }

    /// Lists every brand with masks and logos, as a JSON array.
    #[wasm_bindgen(js_name = brandsJson)]
    pub fn brands_json(&self, options_json: Option<String>) -> Result<String, JsValue> {
        let overrides = parse_overrides(options_json)?;
        serde_json::to_string(&self.registry.brand_catalog(&overrides)).map_err(js_error)
    }

    /// Number of banks loaded.
    #[wasm_bindgen(getter, js_name = bankCount)]
    pub fn bank_count(&self) -> usize {
        self.registry.directory().bank_count()
    }
}

impl Default for CardInfoEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Groups digits by gap positions, e.g. `numberNice("424242", [4, 8, 12])`.
#[wasm_bindgen(js_name = numberNice)]
pub fn number_nice(number: &str, gaps: Vec<u32>) -> Result<String, JsValue> {
    let gaps = gap_positions(&gaps).map_err(js_error)?;
    Ok(crate::format::number_nice(
        &crate::normalize::normalize_number(number),
        &gaps,
    ))
}

/// Redacts a card number for logging.
#[wasm_bindgen(js_name = redactNumber)]
pub fn redact_number(number: &str) -> String {
    crate::mask::redact_number(&crate::normalize::normalize_number(number))
}
