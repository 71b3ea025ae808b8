//! lodgekit-core: domain payloads and configuration for the lodgekit
//! property-rental data-access layer.
//!
//! Row types live beside their repositories in lodgekit-db; this crate holds
//! the inputs the application layer constructs (insert payloads, search
//! filters, result limits) and the connection configuration.

pub mod config;
pub mod models;

pub use config::DbConfig;
pub use models::{Limit, NewProperty, NewUser, PropertySearch, ValidationError};
