use crate::config::AppConfig;
use crate::errors::{AppError, ServiceError};
use metrics::{counter, gauge, histogram};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Type alias for a database connection pool
pub type DbPool = DatabaseConnection;

/// Pool sizing and timeouts, usually derived from [`AppConfig`].
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub url: String,
    pub max_connections: u32,
    /// Clamped to `max_connections`.
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
    /// How long a request waits for a free connection before failing with 503.
    pub acquire_timeout: Duration,
}

impl DbConfig {
    pub fn new(url: impl Into<String>) -> Self {
        let defaults = AppConfig::new(url);
        Self::from(&defaults)
    }

    fn connect_options(&self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.url.clone());
        opt.max_connections(self.max_connections)
            .min_connections(self.min_connections.min(self.max_connections))
            .connect_timeout(self.connect_timeout)
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(self.idle_timeout)
            .sqlx_logging(false);
        opt
    }
}

impl From<&AppConfig> for DbConfig {
    fn from(cfg: &AppConfig) -> Self {
        Self {
            url: cfg.database_url.clone(),
            max_connections: cfg.db_max_connections,
            min_connections: cfg.db_min_connections.min(cfg.db_max_connections),
            connect_timeout: Duration::from_secs(cfg.db_connect_timeout_secs),
            idle_timeout: Duration::from_secs(cfg.db_idle_timeout_secs),
            acquire_timeout: Duration::from_secs(cfg.db_acquire_timeout_secs),
        }
    }
}

/// Opens a pool with default sizing.
pub async fn establish_connection(database_url: &str) -> Result<DbPool, AppError> {
    establish_connection_with_config(&DbConfig::new(database_url)).await
}

/// Opens a pool with explicit sizing and timeouts.
///
/// # Errors
/// `ServiceUnavailable` when the server cannot be reached; `DatabaseError`
/// for anything else (bad URL, authentication).
pub async fn establish_connection_with_config(config: &DbConfig) -> Result<DbPool, AppError> {
    debug!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        acquire_timeout = ?config.acquire_timeout,
        "Opening database pool"
    );
    gauge!("dairy_sales_db.max_connections", config.max_connections as f64);

    let start = Instant::now();
    let db_pool = Database::connect(config.connect_options())
        .await
        .map_err(|e| {
            error!(error = %e, "Could not open database pool");
            counter!("dairy_sales_db.connection_failures", 1);
            ServiceError::db_error(e)
        })?;

    info!(
        backend = ?db_pool.get_database_backend(),
        "Database pool ready in {:?}",
        start.elapsed()
    );
    Ok(db_pool)
}

/// Opens the pool described by the application configuration.
pub async fn establish_connection_from_app_config(cfg: &AppConfig) -> Result<DbPool, AppError> {
    establish_connection_with_config(&DbConfig::from(cfg)).await
}

/// Creates any missing sales tables.
pub async fn create_schema(pool: &DbPool) -> Result<(), AppError> {
    crate::schema::create_tables(pool)
        .await
        .map_err(ServiceError::db_error)
}

/// Pings the database. Used by `/health`.
pub async fn check_connection(pool: &DbPool) -> Result<(), AppError> {
    let start = Instant::now();
    let outcome = pool.ping().await;
    let elapsed = start.elapsed();

    match outcome {
        Ok(()) => {
            histogram!("dairy_sales_db.ping_latency", elapsed);
            debug!(latency = ?elapsed, "Database ping ok");
            Ok(())
        }
        Err(e) => {
            counter!("dairy_sales_db.ping_failures", 1);
            error!(latency = ?elapsed, error = %e, "Database ping failed");
            Err(ServiceError::db_error(e))
        }
    }
}

/// Closes every pooled connection. Called once the server has stopped.
pub async fn close_pool(pool: DbPool) -> Result<(), AppError> {
    info!("Closing database pool");
    pool.close().await.map_err(ServiceError::db_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sqlite_config() -> DbConfig {
        let mut cfg = DbConfig::new("sqlite::memory:");
        cfg.max_connections = 1;
        cfg
    }

    #[test]
    fn app_config_tuning_is_carried_over() {
        let mut cfg = AppConfig::new("postgres://localhost/ventas");
        cfg.db_max_connections = 4;
        cfg.db_min_connections = 9;
        cfg.db_acquire_timeout_secs = 3;

        let db_cfg = DbConfig::from(&cfg);
        assert_eq!(db_cfg.url, "postgres://localhost/ventas");
        assert_eq!(db_cfg.max_connections, 4);
        assert_eq!(db_cfg.min_connections, 4);
        assert_eq!(db_cfg.acquire_timeout, Duration::from_secs(3));
    }

    #[test]
    fn min_connections_never_exceed_max() {
        let mut cfg = sqlite_config();
        cfg.min_connections = 5;
        let opt = cfg.connect_options();
        assert_eq!(opt.get_min_connections(), Some(1));
        assert_eq!(opt.get_max_connections(), Some(1));
    }

    #[tokio::test]
    async fn open_ping_and_close() {
        let pool = establish_connection_with_config(&sqlite_config())
            .await
            .unwrap();
        check_connection(&pool).await.unwrap();
        close_pool(pool).await.unwrap();
    }

    #[tokio::test]
    async fn schema_creation_is_repeatable() {
        let pool = establish_connection_with_config(&sqlite_config())
            .await
            .unwrap();
        create_schema(&pool).await.unwrap();
        create_schema(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn unsupported_url_is_rejected() {
        let result = establish_connection("mysql-ish://nowhere").await;
        assert!(result.is_err());
    }
}
