pub mod health;
pub mod placeholders;
pub mod root;

use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /route/analyze           route analysis (placeholder)
/// /poi/facts               POI fact retrieval (placeholder)
/// /recommendations/stops   stop recommendations (placeholder)
/// /collaboration/status    collaboration status (placeholder)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(placeholders::router())
}

/// Fallback for unknown routes: consistent JSON 404 instead of an
/// empty body.
pub async fn not_found() -> AppError {
    AppError::NotFound("The requested route does not exist".to_string())
}
