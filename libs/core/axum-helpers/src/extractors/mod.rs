//! Custom extractors for Axum handlers.
//!
//! Both reject with [`ApiError`](crate::errors::ApiError), so handler
//! signatures never deal with framework rejections.

pub mod id_path;
pub mod validated_json;

pub use id_path::IdPath;
pub use validated_json::ValidatedJson;
