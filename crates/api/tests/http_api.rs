//! HTTP-level integration tests.
//!
//! Builds the same router as the production binary and drives it with
//! `tower::ServiceExt::oneshot`, verifying route wiring, the response
//! envelope, and the error-to-status mapping.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use fleet_api::config::ServerConfig;
use fleet_api::router::build_app_router;
use fleet_api::state::AppState;

fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

fn test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_reports_ok(pool: PgPool) {
    let app = test_app(pool);
    let (status, body) = send_json(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db_healthy"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn organization_create_and_fetch(pool: PgPool) {
    let app = test_app(pool);

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/v1/organizations",
        Some(json!({ "inn": 1234567890i64, "organization_name": "Acme" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["inn"], 1234567890i64);

    let (status, body) =
        send_json(&app, Method::GET, "/api/v1/organizations/1234567890", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["organization_name"], "Acme");
    assert_eq!(body["data"]["devices"], json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn organization_create_maps_invalid_inn_to_415(pool: PgPool) {
    let app = test_app(pool);

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/v1/organizations",
        Some(json!({ "inn": 123456789i64, "organization_name": "Acme" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body["code"], "INVALID_FORMAT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn organization_duplicate_maps_to_400(pool: PgPool) {
    let app = test_app(pool);

    let payload = json!({ "inn": 1234567890i64, "organization_name": "Acme" });
    send_json(&app, Method::POST, "/api/v1/organizations", Some(payload.clone())).await;

    let (status, body) = send_json(&app, Method::POST, "/api/v1/organizations", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "ALREADY_EXISTS");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_device_maps_to_404(pool: PgPool) {
    let app = test_app(pool);

    let (status, body) = send_json(
        &app,
        Method::GET,
        "/api/v1/devices/67e55044-10b1-426f-9247-bb680e5fe0c8",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_user_list_maps_to_404(pool: PgPool) {
    let app = test_app(pool);

    let (status, body) = send_json(&app, Method::GET, "/api/v1/users", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "EMPTY_COLLECTION");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn device_with_embedded_organization_round_trip(pool: PgPool) {
    let app = test_app(pool);
    let device_uuid = uuid::Uuid::new_v4().to_string();

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/v1/devices/with-organization",
        Some(json!({
            "uuid": device_uuid,
            "device_name": "sensor1",
            "organization": { "inn": 1234567890i64, "organization_name": "Acme" },
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["organization_id"], 1234567890i64);

    let (status, body) =
        send_json(&app, Method::GET, "/api/v1/organizations/1234567890", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["devices"][0]["uuid"], device_uuid.as_str());

    // Deleting while the device is attached trips the cascade guard.
    let (status, body) = send_json(
        &app,
        Method::DELETE,
        "/api/v1/organizations/1234567890",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "HAS_DEPENDENTS");
}
