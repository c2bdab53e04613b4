//! Postgres persistence for generated study sessions.
//!
//! Repositories are free functions generic over [`sqlx::Executor`], so the
//! same call works on the pool or inside a schedule transaction.

pub mod models;
pub mod repositories;

use anyhow::Context;
use sqlx::{PgPool, Postgres, migrate::MigrateDatabase, postgres::PgPoolOptions};

/// Connect to `database_url` with at most `max_connections` open at once.
pub async fn create_pool(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .with_context(|| format!("failed to connect with a pool of {max_connections}"))
}

/// Create the database if it is missing, then apply `migrations/`.
pub async fn ensure_db_and_migrate(database_url: &str, pool: &PgPool) -> anyhow::Result<()> {
    if !Postgres::database_exists(database_url)
        .await
        .context("failed to check for database")?
    {
        Postgres::create_database(database_url)
            .await
            .context("failed to create database")?;
    }

    sqlx::migrate!()
        .run(pool)
        .await
        .context("failed to run study session migrations")
}
