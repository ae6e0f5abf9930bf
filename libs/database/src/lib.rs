//! Database library providing the PostgreSQL connector and a generic SeaORM repository
//!
//! # Features
//!
//! - `postgres` (default) - PostgreSQL support with SeaORM
//! - `config` (default) - Configuration support with `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::postgres;
//! use migration::Migrator;
//!
//! let config = postgres::PostgresConfig::from_env()?;
//! let db = postgres::connect_from_config_with_retry(config, None).await?;
//! postgres::run_migrations::<Migrator>(&db, "users_api").await?;
//! ```

// Always available modules
pub mod common;

// Repository abstraction (requires postgres feature since it uses SeaORM)
#[cfg(feature = "postgres")]
pub mod repository;

#[cfg(feature = "postgres")]
pub mod postgres;

// Re-exports for convenience
pub use common::DatabaseError;

#[cfg(feature = "postgres")]
pub use repository::BaseRepository;
