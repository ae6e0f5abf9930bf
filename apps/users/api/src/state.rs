use sea_orm::DatabaseConnection;

use crate::config::Config;

/// Shared state for the readiness endpoint and shutdown cleanup
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub db: Option<DatabaseConnection>,
}
