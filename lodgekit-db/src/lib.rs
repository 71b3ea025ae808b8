//! lodgekit-db: PostgreSQL data access for the lodgekit rental platform.
//!
//! # Design principles
//!
//! - One parameterized statement per call against a shared pool - no
//!   cross-call transaction state
//! - Lookups return `Ok(None)` for missing rows - a failed statement is an
//!   error, never an empty result
//! - Rely on DB constraints, map conflicts - no check-then-insert
//!
//! Search statements are assembled by [`query::ClauseBuilder`], which keeps
//! positional placeholders in sync with bind order.

pub mod pool;
pub mod query;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use query::{ClauseBuilder, SqlParam};
pub use repos::{
    DbError, GuestReservation, Property, PropertyRepo, PropertyWithRating, ReservationRepo, User,
    UserRepo,
};
