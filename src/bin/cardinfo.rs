//! CLI tool for card info lookup.
//!
//! # Usage
//!
//! ```bash
//! # Full card info
//! cardinfo info "5244 6800 0000 0000"
//! cardinfo info 4242424242424242 --output json --policy mono --ext png
//!
//! # Extra bank data and option overrides from JSON files
//! cardinfo info 9999990000000000 --data my-banks.json --options options.json
//!
//! # Group digits, redact, explain brand detection
//! cardinfo nice 378282246310005
//! cardinfo mask 4242424242424242
//! cardinfo detect 2221
//!
//! # Catalogs
//! cardinfo banks
//! cardinfo brands --output json
//! ```

use card_info::bank::load_file;
use card_info::detect::matching_brands;
use card_info::options::{BrandLogoPolicy, ImageExt};
use card_info::{normalize_number, redact_number, CardInfo, CardRegistry, OptionOverrides};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cardinfo")]
#[command(
    author,
    version,
    about = "Bank, brand, logo and layout lookup for payment card numbers"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Extra bank/prefix data to merge (JSON, or CSV prefixes)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Option overrides (JSON object, camelCase keys)
    #[arg(long, global = true)]
    options: Option<PathBuf>,

    /// Don't load the bundled bank data
    #[arg(long, global = true)]
    no_bundled: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show everything known about a card number
    Info {
        /// Card number (digits and spaces)
        card_number: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,

        /// Brand logo policy
        #[arg(long)]
        policy: Option<PolicyArg>,

        /// Preferred logo format
        #[arg(long)]
        ext: Option<ExtArg>,
    },

    /// Group the digits of a card number
    Nice {
        /// Card number (digits and spaces)
        card_number: String,
    },

    /// Redact a card number (PCI-DSS compliant)
    Mask {
        /// Card number (digits and spaces)
        card_number: String,
    },

    /// Detect the card brand and list every matching pattern
    Detect {
        /// Card number (or partial number)
        card_number: String,
    },

    /// List all known banks
    Banks {
        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// List all brands with masks and logos
    Brands {
        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    Auto,
    Colored,
    Mono,
    Black,
    White,
}

impl From<PolicyArg> for BrandLogoPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Auto => BrandLogoPolicy::Auto,
            PolicyArg::Colored => BrandLogoPolicy::Colored,
            PolicyArg::Mono => BrandLogoPolicy::Mono,
            PolicyArg::Black => BrandLogoPolicy::Black,
            PolicyArg::White => BrandLogoPolicy::White,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ExtArg {
    Png,
    Svg,
}

impl From<ExtArg> for ImageExt {
    fn from(arg: ExtArg) -> Self {
        match arg {
            ExtArg::Png => ImageExt::Png,
            ExtArg::Svg => ImageExt::Svg,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let registry = load_registry(cli.no_bundled, cli.data.as_deref()).unwrap_or_else(|e| fail(&e));
    let overrides = load_overrides(cli.options.as_deref()).unwrap_or_else(|e| fail(&e));

    match cli.command {
        Commands::Info {
            card_number,
            output,
            policy,
            ext,
        } => {
            let mut overrides = overrides;
            if let Some(policy) = policy {
                overrides.brand_logo_policy = Some(policy.into());
            }
            if let Some(ext) = ext {
                overrides.preferred_ext = Some(ext.into());
            }
            cmd_info(&registry, &card_number, &overrides, output);
        }
        Commands::Nice { card_number } => {
            cmd_nice(&registry, &card_number);
        }
        Commands::Mask { card_number } => {
            cmd_mask(&card_number);
        }
        Commands::Detect { card_number } => {
            cmd_detect(&registry, &card_number);
        }
        Commands::Banks { output } => {
            cmd_banks(&registry, &overrides, output);
        }
        Commands::Brands { output } => {
            cmd_brands(&registry, &overrides, output);
        }
    }
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn load_registry(no_bundled: bool, data: Option<&Path>) -> Result<CardRegistry, String> {
    let mut registry = if no_bundled {
        CardRegistry::new()
    } else {
        CardRegistry::with_bundled_data().map_err(|e| e.to_string())?
    };

    if let Some(path) = data {
        let payload = load_file(path)
            .map_err(|e| format!("{}: {}", path.display(), e))?;
        registry
            .merge(payload)
            .map_err(|e| format!("{}: {}", path.display(), e))?;
    }

    Ok(registry)
}

fn load_overrides(path: Option<&Path>) -> Result<OptionOverrides, String> {
    let Some(path) = path else {
        return Ok(OptionOverrides::default());
    };
    let json = std::fs::read_to_string(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    OptionOverrides::from_json(&json).map_err(|e| format!("{}: {}", path.display(), e))
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => fail(&e.to_string()),
    }
}

fn or_dash(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

fn cmd_info(
    registry: &CardRegistry,
    card_number: &str,
    overrides: &OptionOverrides,
    output: OutputFormat,
) {
    let info = registry.build(card_number, overrides);
    match output {
        OutputFormat::Text => print_info_text(&info),
        OutputFormat::Json => print_json(&info),
    }
}

fn print_info_text(info: &CardInfo) {
    println!("Number: {}", info.redacted());
    println!("Nice: {}", info.number_nice());
    println!("Mask: {}", info.number_mask);
    println!(
        "Brand: {} ({})",
        or_dash(&info.brand_name),
        or_dash(&info.brand_alias)
    );
    if let (Some(code), Some(length)) = (&info.code_name, info.code_length) {
        println!("Security Code: {} ({} digits)", code, length);
    }
    println!("Lengths: {:?}", info.number_lengths);
    println!(
        "Bank: {} ({})",
        or_dash(&info.bank_name),
        or_dash(&info.bank_alias)
    );
    if let Some(localized) = &info.bank_name_localized {
        println!("Bank Name (local): {}", localized);
    }
    if let Some(country) = &info.bank_country {
        println!("Country: {}", country);
    }
    println!("Bank Logo: {}", or_dash(&info.bank_logo));
    println!("Brand Logo: {}", or_dash(&info.brand_logo));
    println!("Background: {}", info.background_gradient);
    println!("Lightness: {}", info.background_lightness);
    println!("Text Color: {}", info.text_color);
}

fn cmd_nice(registry: &CardRegistry, card_number: &str) {
    let info = registry.info(card_number);
    if info.number().is_empty() {
        fail("No digits provided (only digits and spaces are accepted)");
    }
    println!("{}", info.number_nice());
}

fn cmd_mask(card_number: &str) {
    let number = normalize_number(card_number);
    if number.is_empty() {
        fail("No digits provided (only digits and spaces are accepted)");
    }
    println!("{}", redact_number(&number));
}

fn cmd_detect(registry: &CardRegistry, card_number: &str) {
    let number = normalize_number(card_number);
    if number.is_empty() {
        fail("No digits provided (only digits and spaces are accepted)");
    }

    match registry.resolve_brand(&number) {
        Some(b) => {
            println!("Detected Brand: {}", b.name);
            println!("Valid Lengths: {:?}", b.lengths);
        }
        None => {
            let candidates = matching_brands(registry.brands(), &number);
            if candidates.is_empty() {
                println!("Detected Brand: Unknown");
            } else {
                let names: Vec<&str> = candidates.iter().map(|b| b.name.as_str()).collect();
                println!("Detected Brand: Ambiguous ({})", names.join(", "));
            }
        }
    }
}

fn cmd_banks(registry: &CardRegistry, overrides: &OptionOverrides, output: OutputFormat) {
    let banks = registry.bank_catalog(overrides);
    match output {
        OutputFormat::Text => {
            for bank in &banks {
                println!("{:<20} {:<4} {}", bank.alias, bank.country, bank.name);
            }
            println!(
                "{} banks, {} prefixes",
                banks.len(),
                registry.directory().prefix_count()
            );
        }
        OutputFormat::Json => print_json(&banks),
    }
}

fn cmd_brands(registry: &CardRegistry, overrides: &OptionOverrides, output: OutputFormat) {
    let brands = registry.brand_catalog(overrides);
    match output {
        OutputFormat::Text => {
            for brand in &brands {
                println!(
                    "{:<18} {:<18} {} {} {}",
                    brand.alias, brand.name, brand.code_name, brand.code_length, brand.mask
                );
            }
        }
        OutputFormat::Json => print_json(&brands),
    }
}
