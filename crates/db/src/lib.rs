//! Persistence layer for the fleet registry.
//!
//! Three tables (organizations, devices, users) behind thin repositories,
//! plus the rule layer in [`rules`] that mediates every read and write:
//! identifier formats, uniqueness, referential existence, and cascade
//! guards are all enforced there. Schema-level constraints back the same
//! rules as a second line of defense.

pub mod models;
pub mod repositories;
pub mod rules;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
