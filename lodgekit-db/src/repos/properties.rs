//! Property repository
//!
//! Search assembles its statement from optional filters via
//! [`ClauseBuilder`]; every other call is a single fixed statement.

use lodgekit_core::models::{Limit, NewProperty, PropertySearch};
use serde::Serialize;
use sqlx::{FromRow, PgPool, Row};

use super::DbError;
use crate::query::{bind_all, ClauseBuilder, SqlParam};

/// Property record from database
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Property {
    pub id: i64,
    pub owner_id: i64,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// Nightly price in cents.
    pub cost_per_night: i64,
    pub parking_spaces: i16,
    pub number_of_bathrooms: i16,
    pub number_of_bedrooms: i16,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub active: bool,
}

/// Property with averaged review rating for search results
#[derive(Debug, Clone, Serialize)]
pub struct PropertyWithRating {
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: Option<f64>,
}

/// Render the search statement without executing it.
///
/// Clauses append in a fixed order: city match, owner match, price bounds,
/// the unconditional group (the rating average requires it), the rating
/// threshold, then ordering and the limit. Placeholder numbers come from the
/// builder's running bind count, so the limit is always the final parameter.
pub fn search_statement(filters: &PropertySearch, limit: Limit) -> (String, Vec<SqlParam>) {
    let mut builder = ClauseBuilder::new(
        "SELECT properties.*, avg(property_reviews.rating)::double precision as average_rating \
         FROM properties \
         JOIN property_reviews ON properties.id = property_id \
         WHERE 1=1",
    );

    if let Some(city) = &filters.city {
        builder.push_with(
            "AND city LIKE {}",
            vec![SqlParam::Text(format!("%{city}%"))],
        );
    }

    if let Some(owner_id) = filters.owner_id {
        builder.push_with("AND owner_id = {}", vec![SqlParam::Int(owner_id)]);
    }

    // price bounds arrive in dollars; cost_per_night is stored in cents.
    // Both bounds present takes the BETWEEN branch, a single bound is strict.
    match (
        filters.minimum_price_per_night,
        filters.maximum_price_per_night,
    ) {
        (Some(min), Some(max)) => {
            builder.push_with(
                "AND cost_per_night BETWEEN {} AND {}",
                vec![SqlParam::Int(min * 100), SqlParam::Int(max * 100)],
            );
        }
        (Some(min), None) => {
            builder.push_with("AND cost_per_night > {}", vec![SqlParam::Int(min * 100)]);
        }
        (None, Some(max)) => {
            builder.push_with("AND cost_per_night < {}", vec![SqlParam::Int(max * 100)]);
        }
        (None, None) => {}
    }

    builder.push("GROUP BY properties.id");

    if let Some(rating) = filters.minimum_rating {
        builder.push_with(
            "HAVING avg(property_reviews.rating) >= {}",
            vec![SqlParam::Float(rating)],
        );
    }

    builder.push_with(
        "ORDER BY cost_per_night LIMIT {}",
        vec![SqlParam::Int(limit.get())],
    );

    builder.render()
}

/// Property repository
pub struct PropertyRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PropertyRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Search properties by optional filters, cheapest first.
    ///
    /// Only reviewed properties appear: the rating average joins through
    /// `property_reviews`, matching how listings are surfaced to guests.
    pub async fn search(
        &self,
        filters: &PropertySearch,
        limit: Limit,
    ) -> Result<Vec<PropertyWithRating>, DbError> {
        let (sql, params) = search_statement(filters, limit);
        tracing::debug!(binds = params.len(), sql = %sql, "property search");

        let rows = bind_all(sqlx::query(&sql), &params)
            .fetch_all(self.pool)
            .await?;

        rows.iter()
            .map(|row| {
                Ok(PropertyWithRating {
                    property: Property::from_row(row)?,
                    average_rating: row.try_get("average_rating")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(DbError::from)
    }

    /// Insert a property, returning the stored record with its generated id.
    ///
    /// New listings start active; the store sets the flag.
    pub async fn create(&self, property: &NewProperty) -> Result<Property, DbError> {
        property.validate()?;

        let inserted = sqlx::query_as::<_, Property>(
            r#"
            INSERT INTO properties
              (owner_id, title, description, thumbnail_photo_url, cover_photo_url,
               cost_per_night, parking_spaces, number_of_bathrooms, number_of_bedrooms,
               country, street, city, province, post_code)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(property.owner_id)
        .bind(&property.title)
        .bind(&property.description)
        .bind(&property.thumbnail_photo_url)
        .bind(&property.cover_photo_url)
        .bind(property.cost_per_night)
        .bind(property.parking_spaces)
        .bind(property.number_of_bathrooms)
        .bind(property.number_of_bedrooms)
        .bind(&property.country)
        .bind(&property.street)
        .bind(&property.city)
        .bind(&property.province)
        .bind(&property.post_code)
        .fetch_one(self.pool)
        .await?;

        Ok(inserted)
    }
}
