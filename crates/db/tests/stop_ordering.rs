//! Stop-order invariant tests: orders within a trip are unique and
//! contiguous from 1, through appends and removals.

use sqlx::PgPool;
use wayfarer_core::trip::{TimeBudget, TripType};
use wayfarer_db::models::trip::CreateTrip;
use wayfarer_db::models::trip_stop::CreateTripStop;
use wayfarer_db::models::user::CreateUser;
use wayfarer_db::repositories::{TripRepo, TripStopRepo, UserRepo};

async fn seed_trip(pool: &PgPool) -> i64 {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: "ada@example.com".to_string(),
            username: "ada".to_string(),
            preferred_poi_types: vec![],
            time_budget_default: TimeBudget::Moderate,
        },
    )
    .await
    .unwrap();

    TripRepo::create(
        pool,
        &CreateTrip {
            user_id: user.id,
            name: "Day loop".to_string(),
            start_location: "Home".to_string(),
            end_location: "Home".to_string(),
            start_lat: 40.0,
            start_lng: -105.0,
            end_lat: 40.0,
            end_lng: -105.0,
            time_budget: TimeBudget::Moderate,
            trip_type: TripType::Local,
            total_distance_miles: None,
            estimated_duration_hours: None,
            planned_days: 1,
        },
    )
    .await
    .unwrap()
    .id
}

fn stop(name: &str) -> CreateTripStop {
    CreateTripStop {
        name: name.to_string(),
        category: "attraction".to_string(),
        latitude: 40.01,
        longitude: -105.02,
        address: None,
        planned_arrival: None,
        estimated_duration_minutes: Some(45),
        added_by_user: true,
        booking_reference: None,
    }
}

fn orders(stops: &[wayfarer_db::models::trip_stop::TripStop]) -> Vec<i32> {
    stops.iter().map(|s| s.stop_order).collect()
}

#[sqlx::test(migrations = "./migrations")]
async fn appends_assign_contiguous_orders(pool: PgPool) {
    let trip_id = seed_trip(&pool).await;

    for name in ["first", "second", "third"] {
        TripStopRepo::append(&pool, trip_id, &stop(name)).await.unwrap();
    }

    let stops = TripStopRepo::list_for_trip(&pool, trip_id).await.unwrap();
    assert_eq!(orders(&stops), vec![1, 2, 3]);
    assert_eq!(stops[0].name, "first");
    assert_eq!(stops[2].name, "third");
}

#[sqlx::test(migrations = "./migrations")]
async fn removal_compacts_the_sequence(pool: PgPool) {
    let trip_id = seed_trip(&pool).await;

    let mut ids = Vec::new();
    for name in ["a", "b", "c", "d"] {
        ids.push(TripStopRepo::append(&pool, trip_id, &stop(name)).await.unwrap().id);
    }

    // Remove the second stop; the tail shifts down to close the gap.
    assert!(TripStopRepo::remove(&pool, ids[1]).await.unwrap());

    let stops = TripStopRepo::list_for_trip(&pool, trip_id).await.unwrap();
    assert_eq!(orders(&stops), vec![1, 2, 3]);
    assert_eq!(
        stops.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
        vec!["a", "c", "d"]
    );

    // Appending after a removal reuses the freed tail slot.
    let appended = TripStopRepo::append(&pool, trip_id, &stop("e")).await.unwrap();
    assert_eq!(appended.stop_order, 4);
}

/// A removal must wait out an in-flight append on the same trip.
/// Without the shared parent-trip lock, the compaction UPDATE cannot
/// see the append's uncommitted row and leaves a gap (1, 2, 4).
#[sqlx::test(migrations = "./migrations")]
async fn remove_waits_for_in_flight_append(pool: PgPool) {
    let trip_id = seed_trip(&pool).await;

    let mut ids = Vec::new();
    for name in ["a", "b", "c"] {
        ids.push(TripStopRepo::append(&pool, trip_id, &stop(name)).await.unwrap().id);
    }

    // Simulate an append caught mid-flight: hold the trip lock with an
    // uncommitted insert of order 4, exactly as append does.
    let mut tx = pool.begin().await.unwrap();
    sqlx::query("SELECT id FROM trips WHERE id = $1 FOR UPDATE")
        .bind(trip_id)
        .fetch_one(&mut *tx)
        .await
        .unwrap();
    sqlx::query(
        "INSERT INTO trip_stops (trip_id, name, category, latitude, longitude, stop_order)
         VALUES ($1, 'd', 'attraction', 40.0, -105.0, 4)",
    )
    .bind(trip_id)
    .execute(&mut *tx)
    .await
    .unwrap();

    let pool2 = pool.clone();
    let stop_b = ids[1];
    let remove_task = tokio::spawn(async move { TripStopRepo::remove(&pool2, stop_b).await });

    // The removal must block on the trip lock, not race ahead.
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    assert!(
        !remove_task.is_finished(),
        "remove must wait for the in-flight append to commit"
    );

    tx.commit().await.unwrap();
    assert!(remove_task.await.unwrap().unwrap());

    // After both settle the sequence is contiguous: b is gone, c and
    // the appended d shifted down.
    let stops = TripStopRepo::list_for_trip(&pool, trip_id).await.unwrap();
    assert_eq!(orders(&stops), vec![1, 2, 3]);
    assert_eq!(
        stops.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
        vec!["a", "c", "d"]
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn removing_unknown_stop_is_a_noop(pool: PgPool) {
    let trip_id = seed_trip(&pool).await;
    TripStopRepo::append(&pool, trip_id, &stop("only")).await.unwrap();

    assert!(!TripStopRepo::remove(&pool, 424242).await.unwrap());

    let stops = TripStopRepo::list_for_trip(&pool, trip_id).await.unwrap();
    assert_eq!(orders(&stops), vec![1]);
}

/// A stop referencing a nonexistent trip must be rejected.
#[sqlx::test(migrations = "./migrations")]
async fn orphan_stop_is_rejected(pool: PgPool) {
    let err = TripStopRepo::append(&pool, 9999, &stop("ghost")).await.unwrap_err();
    assert!(matches!(err, sqlx::Error::RowNotFound));
}

#[sqlx::test(migrations = "./migrations")]
async fn completion_flag_round_trips(pool: PgPool) {
    let trip_id = seed_trip(&pool).await;
    let created = TripStopRepo::append(&pool, trip_id, &stop("lunch")).await.unwrap();
    assert!(!created.completed);

    let done = TripStopRepo::set_completed(&pool, created.id, true)
        .await
        .unwrap()
        .unwrap();
    assert!(done.completed);

    let fetched = TripStopRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert!(fetched.completed);
}
