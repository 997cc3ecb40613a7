use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use axum::Router;
use core_config::Environment;
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};
use utoipa_swagger_ui::SwaggerUi;

/// Where the OpenAPI document is served in development
pub const OPENAPI_JSON_PATH: &str = "/openapi/v1.json";

/// Combines domain routers with cross-cutting concerns.
///
/// This function sets up:
/// - API documentation (development only): OpenAPI JSON at
///   [`OPENAPI_JSON_PATH`], Scalar at `/scalar`, Swagger UI at `/swagger-ui`
/// - Request tracing at INFO
/// - Response compression based on `Accept-Encoding`
/// - JSON 404 fallback
///
/// Routes are mounted as given. Health endpoints should be merged by the app
/// using [`health_router`](super::health_router) and its own ready handler.
///
/// # Example
/// ```ignore
/// let api_routes = Router::new().nest("/products", products::router(service));
/// let router = create_router::<ApiDoc>(api_routes, &Environment::from_env());
/// ```
pub fn create_router<T>(apis: Router, environment: &Environment) -> Router
where
    T: OpenApi + 'static,
{
    let mut router = Router::new().merge(apis);

    if environment.expose_api_docs() {
        info!("Serving API documentation at {}", OPENAPI_JSON_PATH);
        router = router
            .merge(SwaggerUi::new("/swagger-ui").url(OPENAPI_JSON_PATH, T::openapi()))
            .merge(Scalar::with_url("/scalar", T::openapi()));
    }

    router
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CompressionLayer::new())
}

/// Production-ready server with coordinated shutdown and cleanup.
///
/// This provides:
/// - Graceful shutdown on SIGINT/SIGTERM, letting in-flight requests finish
/// - A cleanup future (closing pools etc.) bounded by `shutdown_timeout`
/// - Cleanup also runs when the server stops because of an error
///
/// # Example
/// ```ignore
/// let cleanup = async move {
///     db.close().await.ok();
/// };
///
/// create_production_app(router, &config, Duration::from_secs(30), cleanup).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let coordinator = ShutdownCoordinator::new();
    let mut shutdown_rx = coordinator.subscribe();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let cleanup_handle = tokio::spawn(async move {
        // Only a closed channel makes this fail, and then nothing is left to wait for
        let _ = shutdown_rx.recv().await;

        info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(()) => info!("Cleanup completed successfully"),
            Err(_) => {
                tracing::warn!(
                    "Cleanup exceeded timeout of {:?}, forcing shutdown",
                    shutdown_timeout
                );
            }
        }
    });

    let signal_coordinator = coordinator.clone();
    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { signal_coordinator.wait_for_signal().await })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    coordinator.shutdown();
    cleanup_handle.await.ok();

    serve_result
}
