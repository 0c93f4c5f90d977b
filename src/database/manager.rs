use sqlx::{postgres::PgPoolOptions, PgPool};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::config::DatabaseConfig;

/// Errors from DatabaseManager and the repositories built on it
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Invalid database URL")]
    InvalidDatabaseUrl,

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Store client owning the catalog connection pool.
///
/// Constructed once at startup and handed to every repository. Cloning is cheap
/// and all clones share the same pool slot, so a reconnect performed by the
/// health monitor is visible to every repository.
#[derive(Clone)]
pub struct DatabaseManager {
    pool: Arc<RwLock<PgPool>>,
    connection_string: Arc<str>,
    settings: DatabaseConfig,
}

impl DatabaseManager {
    /// Connect and verify the database answers a ping
    pub async fn connect(settings: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let connection_string = Self::validate_connection_string(settings.url.as_deref())?;
        let pool = Self::open_pool(&connection_string, settings).await?;

        info!(
            max_connections = settings.max_connections,
            "Connected to Postgres successfully"
        );

        Ok(Self {
            pool: Arc::new(RwLock::new(pool)),
            connection_string: connection_string.into(),
            settings: settings.clone(),
        })
    }

    /// Current pool handle; connections are acquired per query and released on drop
    pub async fn pool(&self) -> PgPool {
        self.pool.read().await.clone()
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check(&self) -> Result<(), DatabaseError> {
        let pool = self.pool().await;
        sqlx::query("SELECT 1").execute(&pool).await?;
        Ok(())
    }

    /// Apply the bundled schema migrations
    pub async fn migrate(&self) -> Result<(), DatabaseError> {
        let pool = self.pool().await;
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Database migrations applied");
        Ok(())
    }

    /// Periodically ping the store and swap in a fresh pool when the ping fails.
    ///
    /// A failed reconnect is retried on the next tick.
    pub fn spawn_health_monitor(&self) -> JoinHandle<()> {
        let manager = self.clone();
        let period = Duration::from_secs(self.settings.health_check_interval_secs.max(1));

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // First tick fires immediately; the pool was just verified by connect()
            ticker.tick().await;

            loop {
                ticker.tick().await;

                let ping = tokio::time::timeout(Duration::from_secs(1), manager.health_check()).await;
                let failure = match ping {
                    Ok(Ok(())) => continue,
                    Ok(Err(e)) => e.to_string(),
                    Err(_) => "ping timed out".to_string(),
                };

                error!(error = %failure, "Postgres connection lost, trying to reconnect");
                match manager.reconnect().await {
                    Ok(()) => info!("Reconnected to Postgres successfully"),
                    Err(e) => warn!(
                        error = %e,
                        retry_in_secs = period.as_secs(),
                        "Failed to reconnect to Postgres, will retry"
                    ),
                }
            }
        })
    }

    /// Close the pool (e.g., on shutdown)
    pub async fn close(&self) {
        self.pool().await.close().await;
        info!("Postgres connection closed");
    }

    async fn reconnect(&self) -> Result<(), DatabaseError> {
        let fresh = Self::open_pool(&self.connection_string, &self.settings).await?;
        let stale = {
            let mut slot = self.pool.write().await;
            std::mem::replace(&mut *slot, fresh)
        };
        stale.close().await;
        Ok(())
    }

    async fn open_pool(connection_string: &str, settings: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .min_connections(settings.min_connections)
            .acquire_timeout(Duration::from_secs(settings.connection_timeout))
            .max_lifetime(Some(Duration::from_secs(settings.max_lifetime_secs)))
            .connect(connection_string)
            .await?;

        sqlx::query("SELECT 1").execute(&pool).await?;
        Ok(pool)
    }

    fn validate_connection_string(url: Option<&str>) -> Result<String, DatabaseError> {
        let raw = url.ok_or(DatabaseError::ConfigMissing("DATABASE_URL"))?;
        let parsed = url::Url::parse(raw).map_err(|_| DatabaseError::InvalidDatabaseUrl)?;

        match parsed.scheme() {
            "postgres" | "postgresql" => Ok(parsed.into()),
            _ => Err(DatabaseError::InvalidDatabaseUrl),
        }
    }
}
