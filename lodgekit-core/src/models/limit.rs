//! Result limit for list queries

use serde::Deserialize;

/// Maximum rows a list query may return
const MAX_LIMIT: i64 = 100;

/// Rows returned when the caller does not ask for a specific count
const DEFAULT_LIMIT: i64 = 10;

/// Bounded LIMIT value for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit(i64);

impl Limit {
    /// Create a limit, clamped to 1..=100.
    pub fn new(n: i64) -> Self {
        Self(n.clamp(1, MAX_LIMIT))
    }

    /// Value to bind as the statement's LIMIT parameter.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self(DEFAULT_LIMIT)
    }
}

/// Raw query-parameter form, e.g. `?limit=25`
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct LimitParam {
    pub limit: Option<i64>,
}

impl From<LimitParam> for Limit {
    fn from(param: LimitParam) -> Self {
        param.limit.map_or_else(Limit::default, Limit::new)
    }
}
