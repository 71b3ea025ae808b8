//! Reservation repository
//!
//! Read-only in this layer: reservations are created by the booking flow,
//! which is out of scope here. Guests list their stays joined with the
//! property record and its review average.

use chrono::NaiveDate;
use lodgekit_core::models::Limit;
use serde::Serialize;
use sqlx::{FromRow, PgPool, Row};

use super::properties::Property;
use super::DbError;

/// Reservation joined with its property for a guest's stay history
#[derive(Debug, Clone, Serialize)]
pub struct GuestReservation {
    #[serde(flatten)]
    pub property: Property,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub average_rating: Option<f64>,
}

/// Reservation repository
pub struct ReservationRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReservationRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List a guest's reservations, earliest start date first.
    ///
    /// One statement: properties joined to the guest's reservations and to
    /// the reviews the rating average groups over. Grouping by both primary
    /// keys keeps one row per stay.
    pub async fn list_for_guest(
        &self,
        guest_id: i64,
        limit: Limit,
    ) -> Result<Vec<GuestReservation>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT properties.*, reservations.start_date, reservations.end_date,
                   avg(property_reviews.rating)::double precision as average_rating
            FROM properties
            JOIN reservations ON reservations.property_id = properties.id
            JOIN property_reviews ON property_reviews.property_id = properties.id
            WHERE reservations.guest_id = $1
            GROUP BY properties.id, reservations.id
            ORDER BY reservations.start_date
            LIMIT $2
            "#,
        )
        .bind(guest_id)
        .bind(limit.get())
        .fetch_all(self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                Ok(GuestReservation {
                    property: Property::from_row(row)?,
                    start_date: row.try_get("start_date")?,
                    end_date: row.try_get("end_date")?,
                    average_rating: row.try_get("average_rating")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(DbError::from)
    }
}
