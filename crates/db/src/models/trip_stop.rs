//! Trip stop entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wayfarer_core::types::{DbId, Timestamp};

/// Full stop row from the `trip_stops` table.
///
/// `stop_order` is 1-based and kept unique and contiguous within a trip
/// by [`TripStopRepo`](crate::repositories::trip_stop_repo::TripStopRepo).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TripStop {
    pub id: DbId,
    pub trip_id: DbId,
    pub name: String,
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
    pub planned_arrival: Option<Timestamp>,
    pub estimated_duration_minutes: Option<i32>,
    pub stop_order: i32,
    /// True for user-added stops, false for system suggestions.
    pub added_by_user: bool,
    pub completed: bool,
    /// External booking reference (hotels, restaurants).
    pub booking_reference: Option<String>,
}

/// DTO for appending a stop to a trip. The repository assigns
/// `stop_order`; callers never pick it.
#[derive(Debug, Deserialize)]
pub struct CreateTripStop {
    pub name: String,
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
    pub planned_arrival: Option<Timestamp>,
    pub estimated_duration_minutes: Option<i32>,
    #[serde(default = "default_added_by_user")]
    pub added_by_user: bool,
    pub booking_reference: Option<String>,
}

fn default_added_by_user() -> bool {
    true
}
