use axum::{Router, routing::get};
use axum_helpers::server::{create_router, health_router};

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod health;
pub mod products;

/// Domain routes, mounted at the root. Every sub-router already has its
/// state applied.
pub fn routes(state: &AppState) -> Router {
    Router::new().nest(domain_products::handlers::URL, products::router(state))
}

/// Creates a router with the /ready endpoint that checks the database.
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

/// The complete application: domain routes, docs (development only),
/// middleware, `/health` and `/ready`.
pub fn app(state: &AppState) -> Router {
    create_router::<ApiDoc>(routes(state), &state.config.environment)
        .merge(health_router(state.config.app))
        .merge(ready_router(state.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum_helpers::OPENAPI_JSON_PATH;
    use core_config::{app_info, server::ServerConfig};
    use database::postgres::PostgresConfig;
    use http_body_util::BodyExt;
    use rust_decimal::Decimal;
    use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, MockDatabase, Value as DbValue};
    use serde_json::{Value, json};
    use std::collections::BTreeMap;
    use tower::ServiceExt;

    fn state(environment: Environment, db: DatabaseConnection) -> AppState {
        AppState {
            config: Config {
                app: app_info!(),
                database: PostgresConfig::default(),
                server: ServerConfig::default(),
                environment,
            },
            db,
        }
    }

    fn empty_db() -> DatabaseConnection {
        MockDatabase::new(DatabaseBackend::Postgres).into_connection()
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_products_routes_are_mounted() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![domain_products::entity::Model {
                id: 5,
                name: "Stool".to_string(),
                description: None,
                price: Decimal::new(4550, 2),
            }]])
            .into_connection();
        let app = app(&state(Environment::Production, db));

        let (status, body) = get(app, "/products/getproducts").await;
        assert_eq!(status, StatusCode::OK);
        let expected: Value = serde_json::from_str(
            r#"[{ "id": 5, "name": "Stool", "description": null, "price": 45.50 }]"#,
        )
        .unwrap();
        assert_eq!(body, expected);
    }

    #[tokio::test]
    async fn test_development_exposes_openapi_document() {
        let app = app(&state(Environment::Development, empty_db()));

        let (status, doc) = get(app, OPENAPI_JSON_PATH).await;
        assert_eq!(status, StatusCode::OK);
        assert!(doc["paths"]["/products/addproduct"]["post"].is_object());
        assert!(doc["paths"]["/products/getproducts"]["get"].is_object());
    }

    #[tokio::test]
    async fn test_production_hides_openapi_document() {
        let app = app(&state(Environment::Production, empty_db()));

        let (status, _) = get(app, OPENAPI_JSON_PATH).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_health_reports_binary_metadata() {
        let app = app(&state(Environment::Production, empty_db()));

        let (status, body) = get(app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_ready_when_database_answers() {
        let row: BTreeMap<String, DbValue> = BTreeMap::from([("?column?".to_string(), 1i32.into())]);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row]])
            .into_connection();
        let app = app(&state(Environment::Production, db));

        let (status, body) = get(app, "/ready").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ready", "database": "connected" }));
    }

    #[tokio::test]
    async fn test_not_ready_when_database_fails() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let app = app(&state(Environment::Production, db));

        let (status, body) = get(app, "/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["database"], "disconnected");
    }
}
