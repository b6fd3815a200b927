//! REST API server for card info lookup.
//!
//! # Usage
//!
//! ```bash
//! # Start server with the bundled bank data
//! cardinfo-server
//!
//! # With custom port and extra bank data
//! cardinfo-server --port 8080 --data my-banks.json
//! ```
//!
//! # Swagger UI
//!
//! Visit http://localhost:3000/swagger-ui/ for interactive API documentation.

use axum::{
    extract::{Query, State},
    http::{header, Method, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::{Arc, RwLock};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::{IntoParams, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use card_info::bank::{load_file, Lightness, LogoStyle};
use card_info::batch::build_batch;
use card_info::catalog::LogoSet;
use card_info::options::{BrandLogoPolicy, ImageExt};
use card_info::{
    BankData, BankEntry, BankRecord, BrandEntry, CardInfo, CardRegistry, OptionOverrides,
};

/// Upper bound on numbers per batch request.
const MAX_BATCH: usize = 1000;

type SharedRegistry = Arc<RwLock<CardRegistry>>;
type ApiError = (StatusCode, String);

// ============================================================================
// OpenAPI Documentation
// ============================================================================

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Card Info API",
        version = "0.1.0",
        description = "Bank, brand, logo and layout lookup for payment card numbers. Work in progress - no auth or rate limiting.",
        license(name = "MIT"),
        contact(name = "API Support")
    ),
    tags(
        (name = "Card Info", description = "Card info lookup for full or partial numbers"),
        (name = "Catalog", description = "Known banks and brands"),
        (name = "Data", description = "Bank and prefix data management"),
        (name = "System", description = "Health and status endpoints")
    ),
    paths(
        card_info_handler,
        card_info_batch,
        banks_handler,
        brands_handler,
        merge_data,
        health,
    ),
    components(schemas(
        CardInfo,
        BatchRequest,
        BatchResponse,
        BatchSummary,
        BankEntry,
        BrandEntry,
        LogoSet,
        BankData,
        BankRecord,
        LogoStyle,
        Lightness,
        MergeResponse,
        HealthResponse,
    ))
)]
struct ApiDoc;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
struct NumberQuery {
    /// Card number, full or partial. Digits and spaces only; anything else resolves to an empty number.
    number: String,
}

/// Per-request option overrides, all optional.
#[derive(Deserialize, IntoParams, Default)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
struct OptionsQuery {
    /// Directory prefix for bank logos
    banks_logos_path: Option<String>,
    /// Directory prefix for brand logos
    brands_logos_path: Option<String>,
    /// Brand logo policy: auto, colored, mono, black or white
    brand_logo_policy: Option<String>,
    /// Preferred logo format: png or svg
    preferred_ext: Option<String>,
    /// Symbol standing for one digit in the mask
    mask_digit_symbol: Option<String>,
    /// Symbol separating mask blocks
    mask_delimiter_symbol: Option<String>,
    /// Gradient angle in degrees
    gradient_degrees: Option<i32>,
}

impl OptionsQuery {
    fn into_overrides(self) -> Result<OptionOverrides, ApiError> {
        let brand_logo_policy = self
            .brand_logo_policy
            .map(|p| p.parse::<BrandLogoPolicy>())
            .transpose()
            .map_err(bad_request)?;
        let preferred_ext = self
            .preferred_ext
            .map(|e| e.parse::<ImageExt>())
            .transpose()
            .map_err(bad_request)?;

        Ok(OptionOverrides {
            banks_logos_path: self.banks_logos_path,
            brands_logos_path: self.brands_logos_path,
            brand_logo_policy,
            preferred_ext,
            mask_digit_symbol: self.mask_digit_symbol,
            mask_delimiter_symbol: self.mask_delimiter_symbol,
            gradient_degrees: self.gradient_degrees,
        })
    }
}

#[derive(Deserialize, ToSchema)]
#[schema(example = json!({
    "numbers": ["5244 6800 0000 0000", "4242424242424242", "2221"],
    "options": {"brandLogoPolicy": "mono", "preferredExt": "png"}
}))]
struct BatchRequest {
    /// Card numbers, full or partial.
    numbers: Vec<String>,
    /// Option overrides applied to every number (camelCase keys).
    #[schema(value_type = Option<Object>)]
    options: Option<OptionOverrides>,
}

#[derive(Serialize, ToSchema)]
struct BatchResponse {
    /// Card info for each number, in request order
    results: Vec<CardInfo>,
    /// Summary statistics
    summary: BatchSummary,
}

#[derive(Serialize, ToSchema)]
struct BatchSummary {
    /// Number of cards in the request
    total: usize,
    /// Cards whose brand resolved unambiguously
    with_brand: usize,
    /// Cards whose issuing bank resolved
    with_bank: usize,
}

#[derive(Serialize, ToSchema)]
#[schema(example = json!({"banks": 1, "prefixes": 2, "total_banks": 50, "total_prefixes": 2575}))]
struct MergeResponse {
    /// Banks in the payload
    banks: usize,
    /// Prefixes in the payload
    prefixes: usize,
    /// Banks in the directory after the merge
    total_banks: usize,
    /// Prefixes in the directory after the merge
    total_prefixes: usize,
}

#[derive(Serialize, ToSchema)]
#[schema(example = json!({"status": "healthy", "version": "0.1.0", "banks": 49, "prefixes": 2573}))]
struct HealthResponse {
    /// Service health status
    status: String,
    /// API version
    version: String,
    /// Banks loaded
    banks: usize,
    /// Prefixes indexed
    prefixes: usize,
}

fn bad_request(e: impl std::fmt::Display) -> ApiError {
    (StatusCode::BAD_REQUEST, e.to_string())
}

fn lock_poisoned<T>(_: T) -> ApiError {
    tracing::error!("registry lock poisoned");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "registry unavailable".to_string(),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// Look up a card number
///
/// Resolves bank, brand, logos, colors and layout for a full or partial card
/// number. Never fails on malformed numbers; unresolved fields are null and
/// style fields fall back to neutral defaults.
#[utoipa::path(
    get,
    path = "/card-info",
    tag = "Card Info",
    params(NumberQuery, OptionsQuery),
    responses(
        (status = 200, description = "Card info", body = CardInfo),
        (status = 400, description = "Unknown option value")
    )
)]
async fn card_info_handler(
    State(registry): State<SharedRegistry>,
    Query(query): Query<NumberQuery>,
    Query(options): Query<OptionsQuery>,
) -> Result<Json<CardInfo>, ApiError> {
    let overrides = options.into_overrides()?;
    let registry = registry.read().map_err(lock_poisoned)?;
    let info = registry.build(&query.number, &overrides);

    tracing::debug!(
        number = %info.redacted(),
        brand = info.brand_alias.as_deref().unwrap_or("-"),
        bank = info.bank_alias.as_deref().unwrap_or("-"),
        "card info built"
    );
    Ok(Json(info))
}

/// Look up multiple card numbers
///
/// Builds card info for up to 1000 numbers with shared option overrides.
#[utoipa::path(
    post,
    path = "/card-info/batch",
    tag = "Card Info",
    request_body = BatchRequest,
    responses(
        (status = 200, description = "Batch results", body = BatchResponse),
        (status = 400, description = "Too many numbers")
    )
)]
async fn card_info_batch(
    State(registry): State<SharedRegistry>,
    Json(req): Json<BatchRequest>,
) -> Result<Json<BatchResponse>, ApiError> {
    if req.numbers.len() > MAX_BATCH {
        return Err(bad_request(format!(
            "batch of {} numbers exceeds the limit of {}",
            req.numbers.len(),
            MAX_BATCH
        )));
    }

    let overrides = req.options.unwrap_or_default();
    let registry = registry.read().map_err(lock_poisoned)?;
    let results = build_batch(&registry, &req.numbers, &overrides);

    let summary = BatchSummary {
        total: results.len(),
        with_brand: results.iter().filter(|i| i.has_brand()).count(),
        with_bank: results.iter().filter(|i| i.has_bank()).count(),
    };
    tracing::info!(
        total = summary.total,
        with_brand = summary.with_brand,
        with_bank = summary.with_bank,
        "batch built"
    );

    Ok(Json(BatchResponse { results, summary }))
}

/// List known banks
///
/// Every bank in the directory with resolved logo paths and gradient, in
/// identifier order.
#[utoipa::path(
    get,
    path = "/banks",
    tag = "Catalog",
    params(OptionsQuery),
    responses(
        (status = 200, description = "Bank catalog", body = Vec<BankEntry>),
        (status = 400, description = "Unknown option value")
    )
)]
async fn banks_handler(
    State(registry): State<SharedRegistry>,
    Query(options): Query<OptionsQuery>,
) -> Result<Json<Vec<BankEntry>>, ApiError> {
    let overrides = options.into_overrides()?;
    let registry = registry.read().map_err(lock_poisoned)?;
    Ok(Json(registry.bank_catalog(&overrides)))
}

/// List brands
///
/// Every brand with its layout and logo variants, in resolution order.
#[utoipa::path(
    get,
    path = "/brands",
    tag = "Catalog",
    params(OptionsQuery),
    responses(
        (status = 200, description = "Brand catalog", body = Vec<BrandEntry>),
        (status = 400, description = "Unknown option value")
    )
)]
async fn brands_handler(
    State(registry): State<SharedRegistry>,
    Query(options): Query<OptionsQuery>,
) -> Result<Json<Vec<BrandEntry>>, ApiError> {
    let overrides = options.into_overrides()?;
    let registry = registry.read().map_err(lock_poisoned)?;
    Ok(Json(registry.brand_catalog(&overrides)))
}

/// Merge bank data
///
/// Adds banks and prefixes to the running directory. Entries with an existing
/// key are replaced. The payload is validated first and rejected as a whole
/// on error.
#[utoipa::path(
    post,
    path = "/data",
    tag = "Data",
    request_body = BankData,
    responses(
        (status = 200, description = "Data merged", body = MergeResponse),
        (status = 400, description = "Invalid prefix or bank record")
    )
)]
async fn merge_data(
    State(registry): State<SharedRegistry>,
    Json(data): Json<BankData>,
) -> Result<Json<MergeResponse>, ApiError> {
    let banks = data.banks.len();
    let prefixes = data.prefixes.len();

    let mut registry = registry.write().map_err(lock_poisoned)?;
    registry.merge(data).map_err(bad_request)?;

    let directory = registry.directory();
    tracing::info!(banks, prefixes, "bank data merged");

    Ok(Json(MergeResponse {
        banks,
        prefixes,
        total_banks: directory.bank_count(),
        total_prefixes: directory.prefix_count(),
    }))
}

/// Health check
///
/// Returns the service status and the size of the loaded bank directory.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
async fn health(State(registry): State<SharedRegistry>) -> Result<Json<HealthResponse>, ApiError> {
    let registry = registry.read().map_err(lock_poisoned)?;
    let directory = registry.directory();
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        banks: directory.bank_count(),
        prefixes: directory.prefix_count(),
    }))
}

// ============================================================================
// Main
// ============================================================================

fn arg_value(name: &str) -> Option<String> {
    std::env::args().skip_while(|a| a != name).nth(1)
}

fn load_registry(data: Option<&str>) -> Result<CardRegistry, String> {
    let mut registry = CardRegistry::with_bundled_data().map_err(|e| e.to_string())?;
    if let Some(path) = data {
        let payload = load_file(path).map_err(|e| format!("{}: {}", path, e))?;
        registry
            .merge(payload)
            .map_err(|e| format!("{}: {}", path, e))?;
    }
    Ok(registry)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse args
    let port: u16 = arg_value("--port")
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let registry = match load_registry(arg_value("--data").as_deref()) {
        Ok(registry) => registry,
        Err(e) => {
            tracing::error!(error = %e, "failed to load bank data");
            std::process::exit(1);
        }
    };
    tracing::info!(
        banks = registry.directory().bank_count(),
        prefixes = registry.directory().prefix_count(),
        "bank data loaded"
    );

    let state: SharedRegistry = Arc::new(RwLock::new(registry));

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(Any);

    // Build router with Swagger UI
    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/card-info", get(card_info_handler))
        .route("/card-info/batch", post(card_info_batch))
        .route("/banks", get(banks_handler))
        .route("/brands", get(brands_handler))
        .route("/data", post(merge_data))
        .route("/health", get(health))
        .with_state(state)
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}:{}/swagger-ui/", "localhost", port);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
