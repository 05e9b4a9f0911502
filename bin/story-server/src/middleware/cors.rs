use crate::config::Config;
use tower_http::cors::{Any, CorsLayer};

/// Build the CORS layer from `STORY_CORS_ORIGINS`.
///
/// Without a configured list (or when none of its entries parse) every
/// origin is allowed.
pub fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<axum::http::HeaderValue> = config
        .cors_allowed_origins
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse().ok())
        .collect();

    let cors = CorsLayer::new().allow_headers(Any).allow_methods(Any);
    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(origins)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
