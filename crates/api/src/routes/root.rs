use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Service banner returned from `GET /`.
#[derive(Serialize)]
pub struct BannerResponse {
    pub message: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub architecture: &'static str,
}

/// GET / -- service banner and version.
async fn banner() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "Welcome to the Wayfarer API",
        version: env!("CARGO_PKG_VERSION"),
        architecture: "hybrid storage (PostgreSQL + MongoDB + Redis)",
    })
}

/// Mount the root banner route.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(banner))
}
