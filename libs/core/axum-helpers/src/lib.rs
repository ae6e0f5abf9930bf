//! # Axum Helpers
//!
//! Shared building blocks for the Axum services in this workspace.
//!
//! ## Modules
//!
//! - **[`errors`]**: `ApiError`, the `ErrorMessage` payload and the translator middleware
//! - **[`extractors`]**: Id path and validated JSON extractors rejecting with `ApiError`
//! - **[`http`]**: HTTP middleware (CORS, security headers)
//! - **[`server`]**: Router setup, health checks, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> eyre::Result<()> {
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(api_routes, Router::new()).await?;
//!
//!     let config = ServerConfig::default();
//!     create_production_app(router, &config, Duration::from_secs(30), async {}).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal, trim_trailing_slash, with_error_translation,
};

pub use http::{cors_layer_from_env, create_cors_layer, security_headers};

pub use errors::{ApiError, ErrorMessage, FieldViolation, RequestDescription};

pub use extractors::{IdPath, ValidatedJson};
