//! Numeric id path parameter extractor.

use crate::errors::ApiError;
use axum::{
    extract::{FromRequestParts, Path, rejection::PathRejection},
    http::request::Parts,
};

/// Extractor for a positive `i64` `{id}` segment.
///
/// A segment that is not a number is a type mismatch; a number below 1 is a
/// constraint violation.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_user(IdPath(id): IdPath) -> String {
///     format!("User ID: {}", id)
/// }
///
/// let app = Router::new().route("/users/{id}", get(get_user));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| match rejection {
                PathRejection::MissingPathParams(_) => ApiError::MissingParameter("id".into()),
                other => ApiError::TypeMismatch(other.body_text()),
            })?;

        parse_id(&raw).map(IdPath)
    }
}

fn parse_id(raw: &str) -> Result<i64, ApiError> {
    let id: i64 = raw.parse().map_err(|e| {
        ApiError::TypeMismatch(format!("Failed to convert '{}' to i64: {}", raw, e))
    })?;

    if id < 1 {
        return Err(ApiError::ConstraintViolation(
            "id: must be greater than or equal to 1".into(),
        ));
    }

    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use tower::ServiceExt;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(matches!(parse_id("abc"), Err(ApiError::TypeMismatch(_))));
        assert!(matches!(parse_id("1.5"), Err(ApiError::TypeMismatch(_))));
        assert!(matches!(
            parse_id("0"),
            Err(ApiError::ConstraintViolation(_))
        ));
        assert!(matches!(
            parse_id("-3"),
            Err(ApiError::ConstraintViolation(_))
        ));
    }

    #[test]
    fn test_mismatch_detail_names_the_input() {
        let err = parse_id("abc").unwrap_err();
        assert_eq!(
            err.description(None),
            vec!["Failed to convert 'abc' to i64: invalid digit found in string"]
        );
    }

    #[tokio::test]
    async fn test_extracts_from_route() {
        let app = Router::new().route(
            "/items/{id}",
            get(|IdPath(id): IdPath| async move { id.to_string() }),
        );

        let response = app
            .clone()
            .oneshot(Request::get("/items/7").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(Request::get("/items/x").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
