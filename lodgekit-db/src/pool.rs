//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. Connection parameters
//! come from [`DbConfig`] rather than being baked into source.

use lodgekit_core::DbConfig;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Create the shared PostgreSQL pool from loaded configuration.
///
/// # Errors
///
/// Returns an error if the connection fails.
pub async fn create_pool(config: &DbConfig) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(&config.url(), config.max_connections).await
}

/// Create a PostgreSQL pool for an explicit connection string.
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
/// * `max_connections` - Maximum number of connections in the pool
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    tracing::info!(max_connections, "connecting PostgreSQL pool");
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}
