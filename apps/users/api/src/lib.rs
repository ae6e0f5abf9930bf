//! Users API service: wiring of configuration, storage and routes.

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use axum::Router;
use axum_helpers::server::{create_router, health_router};

use state::AppState;

/// Full application router: documented API routes plus /health and /ready
pub async fn build_app(state: &AppState) -> std::io::Result<Router> {
    let api_routes = api::routes(state);
    let root_routes = health_router(state.config.app).merge(api::ready_router(state.clone()));

    create_router::<openapi::ApiDoc>(api_routes, root_routes).await
}
