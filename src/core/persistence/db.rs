//! SQLite pool construction and embedded migrations.

use std::str::FromStr;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

/// A write hit a UNIQUE constraint. Services turn it into a field error.
#[derive(Debug, Error)]
#[error("unique constraint failed")]
pub struct UniqueViolation;

/// Wraps a failed write, keeping UNIQUE violations typed and attaching
/// `context` to everything else.
pub fn write_error(err: sqlx::Error, context: impl Into<String>) -> anyhow::Error {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => UniqueViolation.into(),
        _ => anyhow::Error::new(err).context(context.into()),
    }
}

pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.url)
        .with_context(|| format!("invalid database url {}", config.url))?
        .create_if_missing(true)
        .foreign_keys(true);

    let mut pool_options = SqlitePoolOptions::new().max_connections(config.max_connections.max(1));

    // Every connection to `:memory:` is a separate database; pin a single one.
    if config.url.contains(":memory:") {
        pool_options = pool_options
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    pool_options
        .connect_with(options)
        .await
        .context("failed to create database pool")
}

pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    info!("Running migrations...");
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("failed to run migrations")?;
    Ok(())
}

/// In-memory database with the schema applied.
pub async fn connect_in_memory() -> Result<SqlitePool> {
    let pool = connect(&DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
    })
    .await?;
    migrate(&pool).await?;
    Ok(pool)
}
