//! New-property payload

use serde::Deserialize;

use super::ValidationError;

/// Maximum length for user-supplied text columns
const MAX_TEXT: usize = 255;

/// Payload for listing a new property
///
/// Address and photo fields may be empty strings; the store treats them as
/// unset. `active` is not part of the payload, new listings always start
/// active.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProperty {
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
}

impl NewProperty {
    /// Check the payload before it is sent to the store.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }
        if self.title.len() > MAX_TEXT {
            return Err(ValidationError::TooLong {
                field: "title",
                max: MAX_TEXT,
            });
        }
        if self.cost_per_night < 0 {
            return Err(ValidationError::Negative {
                field: "cost_per_night",
            });
        }
        if self.parking_spaces < 0 {
            return Err(ValidationError::Negative {
                field: "parking_spaces",
            });
        }
        if self.number_of_bathrooms < 0 {
            return Err(ValidationError::Negative {
                field: "number_of_bathrooms",
            });
        }
        if self.number_of_bedrooms < 0 {
            return Err(ValidationError::Negative {
                field: "number_of_bedrooms",
            });
        }
        Ok(())
    }
}
