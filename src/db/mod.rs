//! Database connection management

pub mod schema;

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use crate::config::StorageConfig;

/// PostgreSQL database connection pool
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new database connection pool
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        Self::connect_with(database_url, 10, Duration::from_secs(5)).await
    }

    /// Create a pool sized from the storage section of the config
    pub async fn from_config(config: &StorageConfig) -> Result<Self, sqlx::Error> {
        let url = config
            .postgres_url
            .as_deref()
            .ok_or_else(|| sqlx::Error::Configuration("storage.postgres_url is not set".into()))?;
        Self::connect_with(
            url,
            config.max_connections,
            Duration::from_millis(config.acquire_timeout_ms),
        )
        .await
    }

    async fn connect_with(
        database_url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect(database_url)
            .await?;

        tracing::info!(max_connections, "PostgreSQL connection pool established");
        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Check database health
    pub async fn health_check(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
