use super::shutdown::{ShutdownCoordinator, coordinated_shutdown};
use crate::errors::handlers::{no_handler_found, panic_response, translate_errors};
use crate::http::{cors_layer_from_env, security_headers};
use axum::{Json, Router, middleware, routing::get};
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Path the generated OpenAPI document is served from
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Wrap a router with the error translator.
///
/// Panics are caught first and become `500` errors, then every `ApiError`
/// response is completed with its request description. Unmatched routes and
/// unsupported methods on every route registered so far answer with a
/// `Method Not Found` error, so merge all routes before calling this.
pub fn with_error_translation(router: Router) -> Router {
    router
        .fallback(no_handler_found)
        .method_not_allowed_fallback(no_handler_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(translate_errors))
}

/// Creates a configured Axum router with common middleware and documentation.
///
/// This function sets up:
/// - OpenAPI document at `/api-docs/openapi.json`, plus Scalar and ReDoc
/// - API routes nested under `/api`
/// - `root_routes` (health, readiness) merged at the top level
/// - The error translator (see [`with_error_translation`])
/// - Request tracing and security headers
/// - CORS, when `CORS_ALLOWED_ORIGIN` lists at least one origin
///
/// # Errors
/// Returns `InvalidInput` when `CORS_ALLOWED_ORIGIN` holds an invalid header value.
///
/// # Example
/// ```ignore
/// #[derive(OpenApi)]
/// #[openapi(paths(/* your paths */))]
/// struct ApiDoc;
///
/// let api_routes = Router::new().nest("/users", users_router);
/// let router = create_router::<ApiDoc>(api_routes, health_router(app_info!())).await?;
/// ```
pub async fn create_router<T>(apis: Router, root_routes: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};

    let cors_layer = cors_layer_from_env()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    let document = T::openapi();
    let router = Router::new()
        .route(
            OPENAPI_JSON_PATH,
            get({
                let document = document.clone();
                move || {
                    let document = document.clone();
                    async move { Json(document) }
                }
            }),
        )
        .merge(Redoc::with_url("/redoc", document.clone()))
        .merge(Scalar::with_url("/scalar", document))
        .nest("/api", apis)
        .merge(root_routes);

    let router = with_error_translation(router)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers));

    Ok(match cors_layer {
        Some(cors) => router.layer(cors),
        None => router,
    })
}

/// Route `/api/users/` the same as `/api/users`.
///
/// Wraps the router from outside; router layers only run after routing.
pub fn trim_trailing_slash(router: Router) -> NormalizePath<Router> {
    NormalizePath::trim_trailing_slash(router)
}

/// Production-ready server with coordinated shutdown and cleanup.
///
/// Waits for SIGINT/SIGTERM, lets in-flight requests drain, and runs
/// `cleanup` (closing database pools and the like) bounded by
/// `shutdown_timeout`. Trailing slashes are trimmed before routing.
///
/// # Example
/// ```ignore
/// create_production_app(router, &config, Duration::from_secs(30), async move {
///     db.close().await.ok();
/// })
/// .await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let (coordinator, mut shutdown_rx) = ShutdownCoordinator::new();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let cleanup_handle = tokio::spawn(async move {
        if shutdown_rx.recv().await.is_err() {
            // Coordinator dropped without signalling; still clean up
            tracing::debug!("Shutdown channel closed");
        }

        info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(_) => info!("Cleanup completed successfully"),
            Err(_) => {
                tracing::warn!(
                    "Cleanup exceeded timeout of {:?}, forcing shutdown",
                    shutdown_timeout
                );
            }
        }
    });

    let app = trim_trailing_slash(router);
    let serve_result = axum::serve(
        listener,
        axum::ServiceExt::<axum::extract::Request>::into_make_service(app),
    )
        .with_graceful_shutdown(coordinated_shutdown(coordinator.clone()))
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    // Make sure cleanup runs even when serve returned on its own
    coordinator.shutdown();
    cleanup_handle.await.ok();

    serve_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi(info(title = "test"))]
    struct EmptyDoc;

    async fn router() -> Router {
        let apis = Router::new().route("/ping", get(|| async { "pong" }));
        let root = Router::new().route("/status", get(|| async { "up" }));
        create_router::<EmptyDoc>(apis, root).await.unwrap()
    }

    async fn error_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_api_routes_are_nested() {
        let response = router()
            .await
            .oneshot(Request::get("/api/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["x-frame-options"], "DENY");
    }

    #[tokio::test]
    async fn test_openapi_document_served() {
        let response = router()
            .await
            .oneshot(Request::get(OPENAPI_JSON_PATH).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let doc: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(doc["info"]["title"], "test");
    }

    #[tokio::test]
    async fn test_unknown_path_is_translated() {
        let response = router()
            .await
            .oneshot(Request::delete("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = error_body(response).await;
        assert_eq!(
            body["description"][0],
            "Could not find the DELETE method for URL /nope"
        );
    }

    #[tokio::test]
    async fn test_wrong_method_on_any_route_is_translated() {
        let app = router().await;

        for (method, uri) in [
            ("POST", "/status"),
            ("POST", OPENAPI_JSON_PATH),
            ("DELETE", "/api/ping"),
        ] {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method(method)
                        .uri(uri)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{method} {uri}");
            assert_eq!(response.headers()["x-frame-options"], "DENY");
            let body = error_body(response).await;
            assert_eq!(body["message"], "Method Not Found");
            assert_eq!(
                body["description"][0],
                format!("Could not find the {method} method for URL {uri}")
            );
        }
    }

    #[tokio::test]
    async fn test_trailing_slash_is_trimmed() {
        let response = trim_trailing_slash(router().await)
            .oneshot(Request::get("/api/ping/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"pong");
    }
}
