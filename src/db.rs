use std::str::FromStr;
use std::time::Duration;

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use crate::config::DatabaseConfig;

#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("database is not configured, set DATABASE_URL to enable it")]
    NotConfigured,

    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Database handle owned by the application state.
///
/// Created once at startup; an empty url yields a disabled handle whose
/// [`Database::pool`] reports [`DatabaseError::NotConfigured`].
#[derive(Clone, Debug, Default)]
pub struct Database {
    pool: Option<SqlitePool>,
}

impl Database {
    pub fn disabled() -> Self {
        Self { pool: None }
    }

    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        if config.url.is_empty() {
            tracing::warn!("DATABASE_URL not set, database features disabled");
            return Ok(Self::disabled());
        }

        let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(20))
            .connect_with(options)
            .await?;

        tracing::info!(
            max_connections = config.max_connections,
            "Database connection initialized"
        );

        Ok(Self { pool: Some(pool) })
    }

    pub fn is_configured(&self) -> bool {
        self.pool.is_some()
    }

    pub fn pool(&self) -> Result<&SqlitePool, DatabaseError> {
        self.pool.as_ref().ok_or(DatabaseError::NotConfigured)
    }

    /// Checks the connection with a trivial query.
    pub async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").fetch_one(self.pool()?).await?;

        Ok(())
    }

    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
            tracing::info!("Database pool closed");
        }
    }
}
