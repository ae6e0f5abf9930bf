use axum::Router;
use domain_users::{InMemoryUserRepository, PgUserRepository, UserService, handlers};

/// Users routes backed by PostgreSQL when connected, memory otherwise
pub fn router(state: &crate::state::AppState) -> Router {
    match &state.db {
        Some(db) => handlers::router(UserService::new(PgUserRepository::new(db.clone()))),
        None => {
            tracing::warn!("DATABASE_URL not set, users are kept in memory");
            handlers::router(UserService::new(InMemoryUserRepository::new()))
        }
    }
}
