pub mod trip_repo;
pub mod trip_stop_repo;
pub mod user_repo;

pub use trip_repo::TripRepo;
pub use trip_stop_repo::TripStopRepo;
pub use user_repo::UserRepo;
