//! PostgreSQL persistence for missions and their submission pools.
//!
//! Repositories are zero-sized structs taking `&PgPool`; [`PgBaselineSource`]
//! adapts them to the core's [`BaselineSource`](missionhub_core::baseline_policy::BaselineSource)
//! trait.

use sqlx::postgres::PgPoolOptions;

pub mod baseline_source;
pub mod models;
pub mod repositories;

pub use baseline_source::PgBaselineSource;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
