pub mod trip;
pub mod trip_stop;
pub mod user;
