//! Validation error types

use std::fmt;

/// Validation error for insert payloads
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// String doesn't match required format (e.g., email)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Numeric field is below zero where only zero or more makes sense
    Negative { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::Negative { field } => write!(f, "{} cannot be negative", field),
        }
    }
}

impl std::error::Error for ValidationError {}
