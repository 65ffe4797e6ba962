//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wayfarer_core::trip::TimeBudget;
use wayfarer_core::types::{DbId, Timestamp};

/// Full user row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub username: String,
    /// JSON array of POI category strings, stored as TEXT.
    /// Use [`User::preferred_poi_types`] for the decoded form.
    #[serde(rename = "preferred_poi_types")]
    #[sqlx(rename = "preferred_poi_types")]
    pub preferred_poi_types_raw: String,
    pub time_budget_default: String,
    pub created_at: Timestamp,
}

impl User {
    /// Decode the stored category list. A malformed value (hand-edited
    /// rows, pre-migration data) decodes as empty rather than erroring.
    pub fn preferred_poi_types(&self) -> Vec<String> {
        serde_json::from_str(&self.preferred_poi_types_raw).unwrap_or_default()
    }
}

/// DTO for creating a new user.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub preferred_poi_types: Vec<String>,
    #[serde(default)]
    pub time_budget_default: TimeBudget,
}
