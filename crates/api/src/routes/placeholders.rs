//! Placeholder routes for features that are not built yet.
//!
//! Each handler returns a static payload and touches no store, so
//! repeated calls are idempotent and byte-identical. Their real
//! behavior (route analysis, POI facts, recommendations, collaboration
//! status) is deliberately unspecified here.

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Static payload for a not-yet-implemented endpoint.
#[derive(Serialize)]
pub struct PlaceholderResponse {
    pub message: &'static str,
}

async fn analyze_route() -> Json<PlaceholderResponse> {
    Json(PlaceholderResponse {
        message: "Route analysis is not implemented yet",
    })
}

async fn poi_facts() -> Json<PlaceholderResponse> {
    Json(PlaceholderResponse {
        message: "POI fact retrieval is not implemented yet",
    })
}

async fn stop_recommendations() -> Json<PlaceholderResponse> {
    Json(PlaceholderResponse {
        message: "Stop recommendations are not implemented yet",
    })
}

async fn collaboration_status() -> Json<PlaceholderResponse> {
    Json(PlaceholderResponse {
        message: "Collaboration status is not implemented yet",
    })
}

/// Mount the four placeholder routes (nested under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/route/analyze", get(analyze_route))
        .route("/poi/facts", get(poi_facts))
        .route("/recommendations/stops", get(stop_recommendations))
        .route("/collaboration/status", get(collaboration_status))
}
