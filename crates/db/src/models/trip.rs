//! Trip entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wayfarer_core::trip::{TimeBudget, TripType};
use wayfarer_core::types::{DbId, Timestamp};

/// Full trip row from the `trips` table.
///
/// Lifecycle timestamps are nullable until reached: a trip is created,
/// may later be started, and may later be completed.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Trip {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub start_location: String,
    pub end_location: String,
    pub start_lat: f64,
    pub start_lng: f64,
    pub end_lat: f64,
    pub end_lng: f64,
    pub time_budget: String,
    pub trip_type: String,
    pub total_distance_miles: Option<f64>,
    pub estimated_duration_hours: Option<f64>,
    pub planned_days: i32,
    pub created_at: Timestamp,
    pub started_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
}

/// DTO for creating a new trip.
#[derive(Debug, Deserialize)]
pub struct CreateTrip {
    pub user_id: DbId,
    pub name: String,
    pub start_location: String,
    pub end_location: String,
    pub start_lat: f64,
    pub start_lng: f64,
    pub end_lat: f64,
    pub end_lng: f64,
    #[serde(default)]
    pub time_budget: TimeBudget,
    pub trip_type: TripType,
    pub total_distance_miles: Option<f64>,
    pub estimated_duration_hours: Option<f64>,
    #[serde(default = "default_planned_days")]
    pub planned_days: i32,
}

fn default_planned_days() -> i32 {
    1
}
