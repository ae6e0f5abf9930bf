use axum::http::{HeaderValue, Method, header};
use std::time::Duration;
use thiserror::Error;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Environment variable holding comma-separated allowed origins
pub const CORS_ALLOWED_ORIGIN: &str = "CORS_ALLOWED_ORIGIN";

#[derive(Debug, Error)]
pub enum CorsConfigError {
    #[error("Invalid {CORS_ALLOWED_ORIGIN} value '{0}'")]
    InvalidOrigin(String),
}

/// Creates a CORS layer for the given origins.
///
/// Allows GET, POST, PUT, DELETE and OPTIONS with `Content-Type` and
/// `Accept` headers, one hour max age.
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// Parse a comma-separated origin list, skipping blank entries
pub fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, CorsConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            HeaderValue::from_str(s).map_err(|_| CorsConfigError::InvalidOrigin(s.to_string()))
        })
        .collect()
}

/// CORS layer from `CORS_ALLOWED_ORIGIN`, or `None` when unset or empty
pub fn cors_layer_from_env() -> Result<Option<CorsLayer>, CorsConfigError> {
    let Ok(raw) = std::env::var(CORS_ALLOWED_ORIGIN) else {
        return Ok(None);
    };

    let origins = parse_origins(&raw)?;
    if origins.is_empty() {
        return Ok(None);
    }

    tracing::info!("CORS configured with allowed origins: {}", raw);
    Ok(Some(create_cors_layer(origins)))
}
