//! End-to-end tests for card_info.
//!
//! These go through the public facade only: a registry, raw input strings and
//! the resulting `CardInfo`.

use card_info::bank::{BankRecord, Lightness, LogoStyle};
use card_info::batch::{build_batch, count_resolved};
use card_info::format::{number_blocks, number_mask, number_nice};
use card_info::options::{BrandLogoPolicy, ImageExt};
use card_info::{
    normalize_number, BankData, BrandDefinition, CardRegistry, DataError, OptionOverrides,
};

// =============================================================================
// TEST CARD NUMBERS
// =============================================================================
// Processor test numbers plus prefixes from the bundled bank data.

mod test_cards {
    pub const VISA: &str = "4242424242424242";
    pub const VISA_SPACED: &str = "4111 1111 1111 1111";
    pub const MASTERCARD: &str = "5555555555554444";
    // 2-series MasterCard overlaps MIR's "22"
    pub const MC_2SERIES: &str = "2223000048400011";
    pub const MC_27: &str = "2720990000000000";
    pub const AMEX: &str = "378282246310005";
    pub const DINERS: &str = "30569309025904";
    pub const DISCOVER: &str = "6011111111111117";
    pub const JCB: &str = "3566002020360505";
    pub const UNIONPAY: &str = "6250941006528599";
    pub const MAESTRO: &str = "6759649826438453";
    pub const MIR: &str = "2200000000000000";

    // Bundled banks
    pub const TINKOFF_MC: &str = "5244680000000000";
    pub const SBERBANK_VISA: &str = "4279010000000000";
    pub const ALFA_VISA: &str = "4584100000000000";
    pub const ABSOLUT_VISA: &str = "4063720000000000";
}

const BANKS_LOGOS: &str = "/bower_components/card-info/dist/banks-logos/";
const BRANDS_LOGOS: &str = "/bower_components/card-info/dist/brands-logos/";

fn bundled() -> CardRegistry {
    CardRegistry::with_bundled_data().unwrap()
}

fn bank(alias: &str) -> BankRecord {
    BankRecord {
        alias: alias.to_string(),
        name: "Mir Test Bank".to_string(),
        name_localized: "Мир Тест Банк".to_string(),
        country: "ru".to_string(),
        url: "https://mir.example/".to_string(),
        logo_png: Some(format!("{}.png", alias)),
        logo_svg: Some(format!("{}.svg", alias)),
        logo_style: LogoStyle::Black,
        background_color: "#f0f0f0".to_string(),
        background_colors: vec!["#ffffff".to_string(), "#e0e0e0".to_string()],
        background_lightness: Lightness::Light,
        text_color: "#111".to_string(),
    }
}

// =============================================================================
// NORMALIZATION
// =============================================================================

#[test]
fn test_normalize_spaced_number() {
    assert_eq!(normalize_number("4111 1111 1111 1111"), "4111111111111111");
    assert_eq!(normalize_number("  4111  "), "4111");
}

#[test]
fn test_normalize_rejects_other_characters() {
    for input in ["12a3", "4111-1111", "4111\t1111", "4111\n", "٤١١١", "+4111", "4111."] {
        assert_eq!(normalize_number(input), "", "input {:?}", input);
    }
}

#[test]
fn test_rejected_input_builds_defaults() {
    let info = CardRegistry::new().info("4242-4242-4242-4242");
    assert_eq!(info.number_source(), "4242-4242-4242-4242");
    assert_eq!(info.number(), "");
    assert!(info.brand_alias.is_none());
}

// =============================================================================
// END-TO-END BUILD
// =============================================================================

#[test]
fn test_visa_end_to_end() {
    let info = CardRegistry::new().info(test_cards::VISA);

    assert_eq!(info.brand_alias.as_deref(), Some("visa"));
    assert_eq!(info.brand_name.as_deref(), Some("Visa"));
    assert_eq!(info.code_name.as_deref(), Some("CVV"));
    assert_eq!(info.code_length, Some(3));
    assert_eq!(info.number_mask, "0000 0000 0000 0000");
    assert_eq!(info.number_nice(), "4242 4242 4242 4242");
    assert_eq!(info.number_blocks, vec![4, 4, 4, 4]);
    assert!(info.is_complete());
}

#[test]
fn test_all_builtin_brands() {
    let registry = CardRegistry::new();
    for (card, alias) in [
        (test_cards::VISA_SPACED, "visa"),
        (test_cards::MASTERCARD, "master-card"),
        (test_cards::MC_27, "master-card"),
        (test_cards::AMEX, "american-express"),
        (test_cards::DINERS, "diners-club"),
        (test_cards::DISCOVER, "discover"),
        (test_cards::JCB, "jcb"),
        (test_cards::UNIONPAY, "unionpay"),
        (test_cards::MAESTRO, "maestro"),
        (test_cards::MIR, "mir"),
    ] {
        let info = registry.info(card);
        assert_eq!(info.brand_alias.as_deref(), Some(alias), "card {}", card);
    }
}

#[test]
fn test_mir_without_bank_prefix() {
    let info = bundled().info(test_cards::MIR);

    assert_eq!(info.brand_alias.as_deref(), Some("mir"));
    assert!(info.bank_alias.is_none());
    assert!(info.bank_name.is_none());
    assert!(info.bank_logo.is_none());
    assert!(info.bank_logo_style.is_none());
    assert_eq!(info.background_color, "#eeeeee");
}

#[test]
fn test_mir_with_bank_prefix() {
    let mut registry = bundled();
    registry.merge(
        BankData::new()
            .bank("ru-mirtest", bank("ru-mirtest"))
            .prefix("220000", "ru-mirtest"),
    )
    .unwrap();

    let info = registry.info(test_cards::MIR);
    assert_eq!(info.brand_alias.as_deref(), Some("mir"));
    assert_eq!(info.bank_alias.as_deref(), Some("ru-mirtest"));
    assert_eq!(info.bank_name.as_deref(), Some("Mir Test Bank"));
    assert_eq!(info.bank_name_localized.as_deref(), Some("Мир Тест Банк"));
    assert_eq!(info.text_color, "#111");
    assert_eq!(
        info.background_gradient,
        "linear-gradient(135deg, #ffffff, #e0e0e0)"
    );
    // Auto policy follows the bank's black logo style
    assert_eq!(
        info.brand_logo,
        Some(format!("{}mir-black.svg", BRANDS_LOGOS))
    );
}

#[test]
fn test_empty_input_defaults() {
    let info = bundled().info("");

    assert!(info.bank_alias.is_none());
    assert!(info.bank_name.is_none());
    assert!(info.bank_logo.is_none());
    assert!(info.brand_alias.is_none());
    assert!(info.brand_logo.is_none());
    assert!(info.code_name.is_none());
    assert!(info.code_length.is_none());

    assert_eq!(info.background_color, "#eeeeee");
    assert_eq!(info.background_colors, vec!["#eeeeee", "#dddddd"]);
    assert_eq!(info.background_lightness, Lightness::Light);
    assert_eq!(info.text_color, "#000");
    assert_eq!(
        info.background_gradient,
        "linear-gradient(135deg, #eeeeee, #dddddd)"
    );

    assert_eq!(info.number_gaps, vec![4, 8, 12]);
    assert_eq!(info.number_lengths, vec![12, 13, 14, 15, 16, 17, 18, 19]);
    assert_eq!(info.number_blocks, vec![4, 4, 4, 7]);
    assert_eq!(info.number_mask, "0000 0000 0000 0000000");
    assert_eq!(info.number_nice(), "");
    assert!(!info.is_complete());
}

#[test]
fn test_display_input() {
    let info = CardRegistry::new().info(4242424242424242u64);
    assert_eq!(info.brand_alias.as_deref(), Some("visa"));
    assert_eq!(info.number_source(), test_cards::VISA);
}

// =============================================================================
// BANK RESOLUTION
// =============================================================================

#[test]
fn test_bundled_banks() {
    let registry = bundled();
    for (card, alias) in [
        (test_cards::TINKOFF_MC, "ru-tinkoff"),
        (test_cards::SBERBANK_VISA, "ru-sberbank"),
        (test_cards::ALFA_VISA, "ru-alfa"),
        (test_cards::ABSOLUT_VISA, "ru-absolut"),
    ] {
        let info = registry.info(card);
        assert_eq!(info.bank_alias.as_deref(), Some(alias), "card {}", card);
        assert_eq!(info.bank_country.as_deref(), Some("ru"));
    }
}

#[test]
fn test_tinkoff_styling() {
    let info = bundled().info(test_cards::TINKOFF_MC);

    assert_eq!(info.bank_name.as_deref(), Some("Tinkoff Bank"));
    assert_eq!(info.bank_name_localized.as_deref(), Some("Тинькофф Банк"));
    assert_eq!(info.bank_logo_style, Some(LogoStyle::White));
    assert_eq!(info.background_lightness, Lightness::Dark);
    assert_eq!(info.background_gradient, "linear-gradient(135deg, #444, #222)");
    assert_eq!(info.text_color, "#fff");
    assert_eq!(
        info.bank_logo,
        Some(format!("{}ru-tinkoff.svg", BANKS_LOGOS))
    );
    assert_eq!(
        info.brand_logo,
        Some(format!("{}master-card-white.svg", BRANDS_LOGOS))
    );
}

#[test]
fn test_short_numbers_never_resolve_bank() {
    let registry = bundled();
    for len in 0..6 {
        let partial = &test_cards::TINKOFF_MC[..len];
        assert!(
            registry.info(partial).bank_alias.is_none(),
            "prefix {:?} should not resolve",
            partial
        );
    }
    assert_eq!(
        registry.info("524468").bank_alias.as_deref(),
        Some("ru-tinkoff")
    );
}

#[test]
fn test_unknown_prefix() {
    let info = bundled().info(test_cards::VISA);
    assert_eq!(info.brand_alias.as_deref(), Some("visa"));
    assert!(info.bank_alias.is_none());
}

#[test]
fn test_merge_overwrites_same_key() {
    let mut registry = bundled();
    let mut replacement = bank("ru-tinkoff");
    replacement.name = "Renamed".to_string();
    registry
        .merge(BankData::new().bank("ru-tinkoff", replacement))
        .unwrap();

    let info = registry.info(test_cards::TINKOFF_MC);
    assert_eq!(info.bank_name.as_deref(), Some("Renamed"));
    // Other banks are untouched
    assert_eq!(
        registry.info(test_cards::ALFA_VISA).bank_alias.as_deref(),
        Some("ru-alfa")
    );
}

#[test]
fn test_typed_merge_is_validated() {
    let mut registry = bundled();
    let mut flat = bank("ru-flat");
    flat.background_colors = vec!["#ffffff".to_string()];

    let err = registry
        .merge(BankData::new().bank("ru-flat", flat).prefix("220000", "ru-flat"))
        .unwrap_err();
    assert!(matches!(err, DataError::InvalidBank { ref id, .. } if id == "ru-flat"));
    // Nothing from the rejected payload is visible
    assert!(registry.info(test_cards::MIR).bank_alias.is_none());

    let mut unnamed = bank("ru-unnamed");
    unnamed.alias = String::new();
    registry
        .merge(BankData::new().bank("ru-unnamed", unnamed).prefix("220000", "ru-unnamed"))
        .unwrap();
    assert_eq!(
        registry.info(test_cards::MIR).bank_alias.as_deref(),
        Some("ru-unnamed")
    );
}

#[test]
fn test_dangling_prefix_is_no_match() {
    let mut registry = CardRegistry::new();
    registry
        .merge(BankData::new().prefix("999999", "missing-bank"))
        .unwrap();
    assert!(registry.info("9999990000").bank_alias.is_none());
}

#[test]
fn test_merge_json_rejects_bad_payloads() {
    let mut registry = CardRegistry::new();

    let err = registry
        .merge_json(r#"{"prefixes": {"12345": "x"}}"#)
        .unwrap_err();
    assert!(matches!(err, DataError::InvalidPrefix(ref p) if p == "12345"));

    let err = registry
        .merge_json(
            r##"{"banks": {"x": {"name": "X", "nameEn": "X", "backgroundColor": "#fff",
                "backgroundColors": ["#fff"], "backgroundLightness": "light",
                "logoStyle": "colored", "text": "#000"}}}"##,
        )
        .unwrap_err();
    assert!(matches!(err, DataError::InvalidBank { ref id, .. } if id == "x"));

    assert!(matches!(
        registry.merge_json("not json").unwrap_err(),
        DataError::Parse(_)
    ));
    assert!(registry.directory().is_empty());
}

// =============================================================================
// BRAND RESOLUTION
// =============================================================================

#[test]
fn test_ambiguous_prefix_has_no_brand() {
    let registry = CardRegistry::new();

    // MasterCard 2-series and MIR share "222"
    assert!(registry.info("2221").brand_alias.is_none());
    assert!(registry.info(test_cards::MC_2SERIES).brand_alias.is_none());
    assert_eq!(
        registry.info("55").brand_alias.as_deref(),
        Some("master-card")
    );
}

#[test]
fn test_custom_brand_creates_ambiguity() {
    let mut registry = CardRegistry::new();
    assert_eq!(
        registry.info("4242").brand_alias.as_deref(),
        Some("visa")
    );

    registry.add_brand(
        BrandDefinition::new("visa-like", "Visa Like", "CVV", 3, &[4, 8, 12], &[16], "42").unwrap(),
    );
    assert!(registry.info("4242").brand_alias.is_none());
    // Outside the overlap Visa still resolves
    assert_eq!(
        registry.info("4111").brand_alias.as_deref(),
        Some("visa")
    );
}

#[test]
fn test_brand_resolution_is_idempotent() {
    let registry = bundled();
    for card in [test_cards::VISA, test_cards::MIR, "2221", "", "3"] {
        let first = registry.info(card);
        let second = registry.info(card);
        assert_eq!(first.brand_alias, second.brand_alias);
        assert_eq!(first.bank_alias, second.bank_alias);
        assert_eq!(first.number_mask, second.number_mask);
    }
}

#[test]
fn test_amex_layout() {
    let info = CardRegistry::new().info(test_cards::AMEX);
    assert_eq!(info.number_gaps, vec![4, 10]);
    assert_eq!(info.number_blocks, vec![4, 6, 5]);
    assert_eq!(info.number_mask, "0000 000000 00000");
    assert_eq!(info.number_nice(), "3782 822463 10005");
    assert_eq!(info.code_name.as_deref(), Some("CID"));
    assert_eq!(info.code_length, Some(4));
}

// =============================================================================
// LAYOUT
// =============================================================================

#[test]
fn test_layout_functions() {
    let blocks = number_blocks(&[4, 8, 12], &[16]);
    assert_eq!(blocks, vec![4, 4, 4, 4]);
    assert_eq!(number_mask(&blocks, "0", " "), "0000 0000 0000 0000");
    assert_eq!(number_nice("424242", &[4, 8, 12]), "4242 42");
    assert_eq!(number_nice("", &[4, 8, 12]), "");
}

#[test]
fn test_custom_mask_symbols() {
    let info = CardRegistry::new().build(
        test_cards::VISA,
        &OptionOverrides::new()
            .mask_digit_symbol("X")
            .mask_delimiter_symbol("-"),
    );
    assert_eq!(info.number_mask, "XXXX-XXXX-XXXX-XXXX");
    // Nice grouping always uses one space
    assert_eq!(info.number_nice(), "4242 4242 4242 4242");
}

#[test]
fn test_partial_number_nice() {
    let info = CardRegistry::new().info("4242 42");
    assert_eq!(info.number_nice(), "4242 42");
    assert_eq!(info.number_mask, "0000 0000 0000 0000");
}

// =============================================================================
// LOGOS AND OPTIONS
// =============================================================================

#[test]
fn test_png_only_bank_falls_back_from_svg() {
    let info = bundled().build(
        test_cards::ABSOLUT_VISA,
        &OptionOverrides::new().preferred_ext(ImageExt::Svg),
    );

    assert_eq!(info.bank_alias.as_deref(), Some("ru-absolut"));
    assert!(info.bank_logo_svg.is_none());
    assert_eq!(
        info.bank_logo_png,
        Some(format!("{}ru-absolut.png", BANKS_LOGOS))
    );
    assert_eq!(info.bank_logo, info.bank_logo_png);
}

#[test]
fn test_brand_logo_policies() {
    let registry = bundled();
    let logo = |card: &str, policy: BrandLogoPolicy| {
        registry
            .build(
                card,
                &OptionOverrides::new()
                    .brand_logo_policy(policy)
                    .brands_logos_path("/b/")
                    .preferred_ext(ImageExt::Png),
            )
            .brand_logo
            .clone()
    };

    // Dark bank with a white logo
    let card = test_cards::TINKOFF_MC;
    assert_eq!(logo(card, BrandLogoPolicy::Auto).as_deref(), Some("/b/master-card-white.png"));
    assert_eq!(logo(card, BrandLogoPolicy::Mono).as_deref(), Some("/b/master-card-white.png"));
    assert_eq!(logo(card, BrandLogoPolicy::Colored).as_deref(), Some("/b/master-card-colored.png"));
    assert_eq!(logo(card, BrandLogoPolicy::Black).as_deref(), Some("/b/master-card-black.png"));

    // No bank: auto falls back to colored, mono to black on the light default
    let card = test_cards::VISA;
    assert_eq!(logo(card, BrandLogoPolicy::Auto).as_deref(), Some("/b/visa-colored.png"));
    assert_eq!(logo(card, BrandLogoPolicy::Mono).as_deref(), Some("/b/visa-black.png"));
    assert_eq!(logo(card, BrandLogoPolicy::White).as_deref(), Some("/b/visa-white.png"));
}

#[test]
fn test_default_options_and_overrides() {
    let mut registry = bundled();
    registry.set_default_options(
        &OptionOverrides::new()
            .banks_logos_path("/img/banks/")
            .gradient_degrees(90),
    );

    let info = registry.info(test_cards::TINKOFF_MC);
    assert_eq!(info.bank_logo.as_deref(), Some("/img/banks/ru-tinkoff.svg"));
    assert_eq!(info.background_gradient, "linear-gradient(90deg, #444, #222)");

    // Per-call overrides win, and do not stick
    let info = registry.build(
        test_cards::TINKOFF_MC,
        &OptionOverrides::new().gradient_degrees(45),
    );
    assert_eq!(info.background_gradient, "linear-gradient(45deg, #444, #222)");
    assert_eq!(registry.default_options().gradient_degrees, 90);
}

#[test]
fn test_unknown_policy_fails_fast() {
    assert!("sepia".parse::<BrandLogoPolicy>().is_err());
    assert!("gif".parse::<ImageExt>().is_err());
    assert!(OptionOverrides::from_json(r#"{"brandLogoPolicy": "sepia"}"#).is_err());
    assert!(OptionOverrides::from_json(r#"{"brandLogoPolicy": "mono"}"#).is_ok());
}

// =============================================================================
// CATALOGS
// =============================================================================

#[test]
fn test_bank_catalog() {
    let registry = bundled();
    let banks = registry.bank_catalog(&OptionOverrides::new().banks_logos_path("/b/"));

    assert_eq!(banks.len(), registry.directory().bank_count());
    assert!(banks.windows(2).all(|w| w[0].alias < w[1].alias));

    let absolut = banks.iter().find(|b| b.alias == "ru-absolut").unwrap();
    assert_eq!(absolut.logo.as_deref(), Some("/b/ru-absolut.png"));
    assert!(absolut.background_gradient.starts_with("linear-gradient(135deg"));
}

#[test]
fn test_brand_catalog() {
    let brands = CardRegistry::new().brand_catalog(&OptionOverrides::default());
    let aliases: Vec<&str> = brands.iter().map(|b| b.alias.as_str()).collect();
    assert_eq!(
        aliases,
        vec![
            "visa",
            "master-card",
            "american-express",
            "diners-club",
            "discover",
            "jcb",
            "unionpay",
            "maestro",
            "mir"
        ]
    );
    let maestro = &brands[7];
    assert_eq!(maestro.mask, "0000 0000 0000 0000000");
    assert_eq!(
        maestro.logo_black.logo,
        Some(format!("{}maestro-black.svg", BRANDS_LOGOS))
    );
}

// =============================================================================
// BATCH
// =============================================================================

#[test]
fn test_batch_preserves_order() {
    let registry = bundled();
    let numbers = [test_cards::TINKOFF_MC, "", test_cards::AMEX, "2221"];
    let results = build_batch(&registry, &numbers, &OptionOverrides::default());

    assert_eq!(results.len(), 4);
    assert_eq!(results[0].bank_alias.as_deref(), Some("ru-tinkoff"));
    assert!(results[1].brand_alias.is_none());
    assert_eq!(results[2].brand_alias.as_deref(), Some("american-express"));
    assert!(results[3].brand_alias.is_none());

    assert_eq!(count_resolved(&registry, &numbers), (2, 1));
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_batch_matches_sequential() {
    use card_info::batch::{build_batch_parallel, count_resolved_parallel};

    let registry = bundled();
    let numbers: Vec<String> = (0..500)
        .map(|i| format!("{}{:010}", ["524468", "427901", "220000", "378282"][i % 4], i))
        .collect();
    let overrides = OptionOverrides::new().brand_logo_policy(BrandLogoPolicy::Mono);

    let sequential = build_batch(&registry, &numbers, &overrides);
    let parallel = build_batch_parallel(&registry, &numbers, &overrides);
    for (a, b) in sequential.iter().zip(&parallel) {
        assert_eq!(a.number(), b.number());
        assert_eq!(a.bank_alias, b.bank_alias);
        assert_eq!(a.brand_logo, b.brand_logo);
    }
    assert_eq!(
        count_resolved(&registry, &numbers),
        count_resolved_parallel(&registry, &numbers)
    );
}

// =============================================================================
// SECURITY
// =============================================================================

#[test]
fn test_logging_output_is_redacted() {
    let info = bundled().info(test_cards::TINKOFF_MC);

    let display = info.to_string();
    assert_eq!(display, "MasterCard 524468******0000 (Tinkoff Bank)");
    assert!(!format!("{:?}", info).contains(test_cards::TINKOFF_MC));
    assert_eq!(info.last_four(), "0000");
}

#[test]
fn test_serialized_json_shape() {
    let info = bundled().info(test_cards::TINKOFF_MC);
    let json = serde_json::to_value(&info).unwrap();

    assert_eq!(json["bankAlias"], "ru-tinkoff");
    assert_eq!(json["brandAlias"], "master-card");
    assert_eq!(json["backgroundLightness"], "dark");
    assert_eq!(json["bankLogoStyle"], "white");
    assert_eq!(json["numberNice"], "5244 6800 0000 0000");
    assert_eq!(json["numberBlocks"], serde_json::json!([4, 4, 4, 4]));

    let empty = serde_json::to_value(CardRegistry::new().info("")).unwrap();
    assert!(empty["bankAlias"].is_null());
    assert!(empty["codeLength"].is_null());
}

// =============================================================================
// CSV PREFIXES
// =============================================================================

#[cfg(feature = "prefix-csv")]
#[test]
fn test_csv_prefixes_attach_to_bundled_bank() {
    use card_info::bank::CsvPrefixLoader;

    let mut registry = bundled();
    let data = CsvPrefixLoader::parse("prefix,bank\n220000,ru-tinkoff\n").unwrap();
    registry.merge(data).unwrap();

    let info = registry.info(test_cards::MIR);
    assert_eq!(info.brand_alias.as_deref(), Some("mir"));
    assert_eq!(info.bank_alias.as_deref(), Some("ru-tinkoff"));
}
