//! Database connection and pool management
//!
//! SQLite pool creation, embedded migrations and health checks. An
//! in-memory URL gets a single connection that never expires, since every
//! new in-memory connection would open an empty database.

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

/// Database configuration for pool creation
pub struct DbConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: Option<u64>,
    pub max_lifetime_secs: Option<u64>,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 5,
            min_connections: 1,
            acquire_timeout_secs: 30,
            idle_timeout_secs: Some(600),  // 10 minutes
            max_lifetime_secs: Some(1800), // 30 minutes
        }
    }
}

impl DbConfig {
    /// Whether the URL points at a private in-memory database
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

/// Create a SQLite connection pool
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let mut config = DbConfig {
        url: database_url.to_string(),
        max_connections,
        ..Default::default()
    };
    if config.is_in_memory() {
        config.max_connections = 1;
        config.idle_timeout_secs = None;
        config.max_lifetime_secs = None;
    }
    create_pool_with_config(&config).await
}

/// Create a SQLite connection pool with custom configuration
pub async fn create_pool_with_config(config: &DbConfig) -> Result<SqlitePool> {
    let connect_options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(config.idle_timeout_secs.map(Duration::from_secs))
        .max_lifetime(config.max_lifetime_secs.map(Duration::from_secs))
        .connect_with(connect_options)
        .await?;

    info!(
        "Database pool created: max={}, min={}",
        config.max_connections, config.min_connections
    );

    Ok(pool)
}

/// Run database migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations completed successfully");
    Ok(())
}

/// Check database health
pub async fn health_check(pool: &SqlitePool) -> Result<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(|e| {
            warn!("Database health check failed: {}", e);
            e.into()
        })
}

/// Fresh, migrated in-memory database
pub async fn in_memory_pool() -> Result<SqlitePool> {
    let pool = create_pool("sqlite::memory:", 1).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_db_config() {
        let config = DbConfig::default();
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.min_connections, 1);
        assert_eq!(config.acquire_timeout_secs, 30);
    }

    #[test]
    fn test_memory_url_detection() {
        let config = DbConfig {
            url: "sqlite::memory:".to_string(),
            ..Default::default()
        };
        assert!(config.is_in_memory());

        let config = DbConfig {
            url: "sqlite://ru_active.db".to_string(),
            ..Default::default()
        };
        assert!(!config.is_in_memory());
    }

    #[tokio::test]
    async fn test_in_memory_pool_is_migrated_and_healthy() {
        let pool = in_memory_pool().await.unwrap();
        health_check(&pool).await.unwrap();

        let badges: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM badges")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(badges, 1);
    }
}
