//! Repository for the `trip_stops` table.
//!
//! `stop_order` is repository-managed: appends take the next slot and
//! removals compact the remaining sequence, so orders within a trip are
//! always unique and contiguous from 1.

use sqlx::PgPool;
use wayfarer_core::types::DbId;

use crate::models::trip_stop::{CreateTripStop, TripStop};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, trip_id, name, category, latitude, longitude, address, \
                       planned_arrival, estimated_duration_minutes, stop_order, \
                       added_by_user, completed, booking_reference";

/// Provides CRUD operations for trip stops.
pub struct TripStopRepo;

impl TripStopRepo {
    /// Append a stop to the end of a trip's route.
    ///
    /// Locks the parent trip row to serialize concurrent appends, then
    /// assigns `max(stop_order) + 1`. Fails with `RowNotFound` when the
    /// trip does not exist.
    pub async fn append(
        pool: &PgPool,
        trip_id: DbId,
        input: &CreateTripStop,
    ) -> Result<TripStop, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("SELECT id FROM trips WHERE id = $1 FOR UPDATE")
            .bind(trip_id)
            .fetch_one(&mut *tx)
            .await?;

        let (next_order,): (i32,) = sqlx::query_as(
            "SELECT COALESCE(MAX(stop_order), 0) + 1 FROM trip_stops WHERE trip_id = $1",
        )
        .bind(trip_id)
        .fetch_one(&mut *tx)
        .await?;

        let query = format!(
            "INSERT INTO trip_stops (trip_id, name, category, latitude, longitude,
                                     address, planned_arrival, estimated_duration_minutes,
                                     stop_order, added_by_user, booking_reference)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        let stop = sqlx::query_as::<_, TripStop>(&query)
            .bind(trip_id)
            .bind(&input.name)
            .bind(&input.category)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.address)
            .bind(input.planned_arrival)
            .bind(input.estimated_duration_minutes)
            .bind(next_order)
            .bind(input.added_by_user)
            .bind(&input.booking_reference)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(stop)
    }

    /// Find a stop by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TripStop>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trip_stops WHERE id = $1");
        sqlx::query_as::<_, TripStop>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a trip's stops in route order.
    pub async fn list_for_trip(
        pool: &PgPool,
        trip_id: DbId,
    ) -> Result<Vec<TripStop>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM trip_stops WHERE trip_id = $1 ORDER BY stop_order");
        sqlx::query_as::<_, TripStop>(&query)
            .bind(trip_id)
            .fetch_all(pool)
            .await
    }

    /// Set a stop's completion flag.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_completed(
        pool: &PgPool,
        id: DbId,
        completed: bool,
    ) -> Result<Option<TripStop>, sqlx::Error> {
        let query = format!(
            "UPDATE trip_stops SET completed = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TripStop>(&query)
            .bind(id)
            .bind(completed)
            .fetch_optional(pool)
            .await
    }

    /// Remove a stop and close the gap it leaves, so the trip's orders
    /// stay contiguous. The unique constraint is deferred, which lets
    /// the shift happen inside the same transaction.
    ///
    /// Takes the same parent-trip lock as [`append`](Self::append), so
    /// a removal never compacts past an order assignment it cannot see
    /// yet (and concurrent removals never double-shift).
    ///
    /// Returns `true` if a row was deleted.
    pub async fn remove(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let found: Option<(DbId,)> =
            sqlx::query_as("SELECT trip_id FROM trip_stops WHERE id = $1")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some((trip_id,)) = found else {
            tx.rollback().await?;
            return Ok(false);
        };

        sqlx::query("SELECT id FROM trips WHERE id = $1 FOR UPDATE")
            .bind(trip_id)
            .fetch_one(&mut *tx)
            .await?;

        // The stop may have been removed while we waited for the lock.
        let removed: Option<(i32,)> = sqlx::query_as(
            "DELETE FROM trip_stops WHERE id = $1 RETURNING stop_order",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((stop_order,)) = removed else {
            tx.rollback().await?;
            return Ok(false);
        };

        sqlx::query(
            "UPDATE trip_stops SET stop_order = stop_order - 1
             WHERE trip_id = $1 AND stop_order > $2",
        )
        .bind(trip_id)
        .bind(stop_order)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(true)
    }
}
