//! Shared setup for live-database tests.
//!
//! Tests that pull in this module are `#[ignore]`d by default and expect
//! `DATABASE_URL` to point at a disposable PostgreSQL database:
//!
//!   DATABASE_URL=postgres://localhost/lodgekit_test \
//!     cargo test -p lodgekit-db -- --ignored

use lodgekit_db::create_pool_with_options;
use sqlx::PgPool;

/// Connect using DATABASE_URL.
pub async fn test_pool() -> PgPool {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required for integration tests");
    create_pool_with_options(&url, 5)
        .await
        .expect("pool creation failed")
}

/// Drop and recreate the schema, then load the standard fixture.
pub async fn reset(pool: &PgPool) {
    sqlx::raw_sql(include_str!("../schema.sql"))
        .execute(pool)
        .await
        .expect("schema reset failed");
    sqlx::raw_sql(include_str!("../fixture.sql"))
        .execute(pool)
        .await
        .expect("fixture load failed");
}
