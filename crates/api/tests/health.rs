//! Integration tests for the health check endpoint and general HTTP
//! behaviour.
//!
//! Postgres comes from `#[sqlx::test]`; MongoDB and Redis are not
//! required to be running, so their health entries are only checked for
//! shape ("connected" or "error: ...").

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get};
use sqlx::PgPool;
use tower::ServiceExt;

fn is_status_string(value: &serde_json::Value) -> bool {
    match value.as_str() {
        Some(s) => s == "connected" || s.starts_with("error: "),
        None => false,
    }
}

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with per-store statuses
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn health_check_reports_each_store(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;

    // The sqlx test pool is live, so postgres must report connected.
    assert_eq!(json["databases"]["postgresql"], "connected");
    assert!(is_status_string(&json["databases"]["mongodb"]));
    assert!(is_status_string(&json["databases"]["redis"]));

    // Overall status degrades on partial outage but the check still
    // returns 200.
    let status = json["status"].as_str().unwrap();
    assert!(status == "healthy" || status == "degraded");
    assert_eq!(json["service"], "wayfarer-api");
}

// ---------------------------------------------------------------------------
// Test: GET / returns the service banner
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn root_returns_service_banner(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Welcome to the Wayfarer API");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["architecture"].as_str().unwrap().contains("PostgreSQL"));
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns JSON 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_route_returns_json_404(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn response_contains_x_request_id_header(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    // The value should be a valid UUID (36 chars with hyphens).
    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}

// ---------------------------------------------------------------------------
// Test: CORS preflight OPTIONS request returns correct headers
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn cors_preflight_returns_correct_headers(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    // CORS preflight requires custom headers, so we build the request
    // manually.
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/route/analyze")
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "GET")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:3000")
    );
}
