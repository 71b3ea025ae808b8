//! Property search filters

use serde::Deserialize;

/// Optional filters for property search.
///
/// Every field defaults to `None`, which omits the matching clause from the
/// generated statement. A present zero is a real bound: a form submitting
/// `minimum_price_per_night=0` filters on `> 0` instead of being dropped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertySearch {
    /// Substring match against the city column (case-sensitive LIKE).
    pub city: Option<String>,
    pub owner_id: Option<i64>,
    /// Dollars per night; converted to cents when the clause is rendered.
    pub minimum_price_per_night: Option<i64>,
    /// Dollars per night; converted to cents when the clause is rendered.
    pub maximum_price_per_night: Option<i64>,
    /// Lowest acceptable review average for the property.
    pub minimum_rating: Option<f64>,
}
