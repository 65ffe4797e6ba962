use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `healthy` when every store is reachable, else `degraded`.
    pub status: &'static str,
    pub service: &'static str,
    pub databases: DatabaseHealth,
}

/// Per-dependency connectivity, `"connected"` or `"error: <reason>"`.
///
/// A partial outage degrades the report; it never fails the check.
#[derive(Serialize)]
pub struct DatabaseHealth {
    pub postgresql: String,
    pub mongodb: String,
    pub redis: String,
}

fn status_string<E: std::fmt::Display>(result: Result<(), E>) -> String {
    match result {
        Ok(()) => "connected".to_string(),
        Err(e) => format!("error: {e}"),
    }
}

/// GET /health -- per-store connectivity report.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let (postgres, mongo, redis) = tokio::join!(
        wayfarer_db::health_check(&state.pool),
        state.content.ping(),
        state.cache.ping(),
    );

    let databases = DatabaseHealth {
        postgresql: status_string(postgres),
        mongodb: status_string(mongo),
        redis: status_string(redis),
    };

    let all_connected = [&databases.postgresql, &databases.mongodb, &databases.redis]
        .iter()
        .all(|s| *s == "connected");

    Json(HealthResponse {
        status: if all_connected { "healthy" } else { "degraded" },
        service: env!("CARGO_PKG_NAME"),
        databases,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
