//! Repository implementations for database access
//!
//! Each repository issues single parameterized statements against the shared
//! pool:
//! - lookups return `Ok(None)` for missing rows; errors stay errors
//! - inserts use `RETURNING` and map unique violations to `Conflict`
//! - list queries bind their limit as the final parameter

use lodgekit_core::models::ValidationError;

pub mod properties;
pub mod reservations;
pub mod users;

pub use properties::{Property, PropertyRepo, PropertyWithRating};
pub use reservations::{GuestReservation, ReservationRepo};
pub use users::{User, UserRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// A uniqueness constraint rejected the write.
    #[error("conflict: {resource} {detail}")]
    Conflict {
        resource: &'static str,
        detail: String,
    },

    /// Payload failed validation before any statement was issued.
    #[error("invalid payload: {0}")]
    Invalid(#[from] ValidationError),
}
