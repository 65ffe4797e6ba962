//! Repository for the `trips` table.

use sqlx::PgPool;
use wayfarer_core::types::DbId;

use crate::models::trip::{CreateTrip, Trip};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, start_location, end_location, \
                       start_lat, start_lng, end_lat, end_lng, \
                       time_budget, trip_type, total_distance_miles, \
                       estimated_duration_hours, planned_days, \
                       created_at, started_at, completed_at";

/// Provides CRUD operations for trips.
pub struct TripRepo;

impl TripRepo {
    /// Insert a new trip, returning the created row.
    ///
    /// Fails with a foreign-key violation when `user_id` does not
    /// reference an existing user.
    pub async fn create(pool: &PgPool, input: &CreateTrip) -> Result<Trip, sqlx::Error> {
        let query = format!(
            "INSERT INTO trips (user_id, name, start_location, end_location,
                                start_lat, start_lng, end_lat, end_lng,
                                time_budget, trip_type, total_distance_miles,
                                estimated_duration_hours, planned_days)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Trip>(&query)
            .bind(input.user_id)
            .bind(&input.name)
            .bind(&input.start_location)
            .bind(&input.end_location)
            .bind(input.start_lat)
            .bind(input.start_lng)
            .bind(input.end_lat)
            .bind(input.end_lng)
            .bind(input.time_budget.as_str())
            .bind(input.trip_type.as_str())
            .bind(input.total_distance_miles)
            .bind(input.estimated_duration_hours)
            .bind(input.planned_days)
            .fetch_one(pool)
            .await
    }

    /// Find a trip by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Trip>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trips WHERE id = $1");
        sqlx::query_as::<_, Trip>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's trips, most recently created first.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Trip>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM trips WHERE user_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Trip>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Mark a trip as started. No-op if it already started.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn mark_started(pool: &PgPool, id: DbId) -> Result<Option<Trip>, sqlx::Error> {
        let query = format!(
            "UPDATE trips SET started_at = COALESCE(started_at, now())
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Trip>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Mark a trip as completed. No-op if it already completed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn mark_completed(pool: &PgPool, id: DbId) -> Result<Option<Trip>, sqlx::Error> {
        let query = format!(
            "UPDATE trips SET completed_at = COALESCE(completed_at, now())
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Trip>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a trip; its stops go with it (ON DELETE CASCADE).
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM trips WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
