use axum::{
    extract::{OriginalUri, Request},
    http::Method,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::any::Any;

use super::{ApiError, RequestDescription};

/// Middleware that turns every [`ApiError`] into its final payload.
///
/// Errors render themselves without request context; this layer knows the
/// URI, so 404 and 500 bodies gain their `uri=<path>` description here.
/// Responses that carry no `ApiError` pass through untouched.
pub async fn translate_errors(request: Request, next: Next) -> Response {
    let description = request
        .extensions()
        .get::<OriginalUri>()
        .map(|OriginalUri(uri)| RequestDescription::from_uri(uri))
        .unwrap_or_else(|| RequestDescription::from_uri(request.uri()));

    let mut response = next.run(request).await;

    match response.extensions_mut().remove::<ApiError>() {
        Some(error) => error.render(Some(&description)),
        None => response,
    }
}

/// Fallback for requests no route (or no method on a route) accepts
pub async fn no_handler_found(method: Method, OriginalUri(uri): OriginalUri) -> Response {
    ApiError::NoHandler {
        method: method.to_string(),
        url: uri.path().to_string(),
    }
    .into_response()
}

/// Response factory for `CatchPanicLayer::custom`
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        String::new()
    };

    ApiError::Internal(message).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        middleware,
        routing::get,
    };
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;
    use tower_http::catch_panic::CatchPanicLayer;

    async fn boom() -> &'static str {
        panic!("kaboom")
    }

    fn app() -> Router {
        Router::new()
            .route(
                "/missing",
                get(|| async { ApiError::NotFound("nothing here".into()) }),
            )
            .route("/plain", get(|| async { "ok" }))
            .route("/boom", get(boom))
            .fallback(no_handler_found)
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(middleware::from_fn(translate_errors))
    }

    async fn call(uri: &str) -> (StatusCode, Option<Value>) {
        let response = app()
            .oneshot(HttpRequest::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).ok())
    }

    #[tokio::test]
    async fn test_not_found_gets_request_description() {
        let (status, body) = call("/missing").await;
        let body = body.unwrap();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "nothing here");
        assert_eq!(body["description"], serde_json::json!(["uri=/missing"]));
    }

    #[tokio::test]
    async fn test_success_passes_through() {
        let response = app()
            .oneshot(HttpRequest::get("/plain").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn test_panic_becomes_internal_error() {
        let (status, body) = call("/boom").await;
        let body = body.unwrap();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status"], 500);
        assert_eq!(body["message"], "kaboom");
        assert_eq!(body["description"], serde_json::json!(["uri=/boom"]));
    }

    #[tokio::test]
    async fn test_unknown_route_is_method_not_found() {
        let (status, body) = call("/nowhere").await;
        let body = body.unwrap();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Method Not Found");
        assert_eq!(
            body["description"],
            serde_json::json!(["Could not find the GET method for URL /nowhere"])
        );
    }

    #[test]
    fn test_panic_payload_without_message() {
        let response = panic_response(Box::new(42_u8));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(matches!(
            response.extensions().get::<ApiError>(),
            Some(ApiError::Internal(msg)) if msg.is_empty()
        ));
    }
}
