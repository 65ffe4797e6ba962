//! Shared domain types for the Wayfarer backend.
//!
//! Storage-agnostic: this crate knows nothing about sqlx, MongoDB, or
//! Redis. Crates that need these types depend on it, never the other
//! way around.

pub mod error;
pub mod trip;
pub mod types;
