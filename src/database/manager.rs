use once_cell::sync::OnceCell;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

/// Errors from the persistence layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Database pool not initialized")]
    NotInitialized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error(transparent)]
    Sqlx(sqlx::Error),
}

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DatabaseError::NotFound("Record not found".to_string()),
            sqlx::Error::Database(db_err)
                if db_err.is_foreign_key_violation() || db_err.is_unique_violation() =>
            {
                DatabaseError::ConstraintViolation(
                    db_err.constraint().unwrap_or("unknown").to_string(),
                )
            }
            other => DatabaseError::Sqlx(other),
        }
    }
}

static POOL: OnceCell<PgPool> = OnceCell::new();

/// Owner of the single process-wide Postgres pool.
///
/// The pool is created once at startup with [`DatabaseManager::init`], handed to
/// repositories by clone, and closed on shutdown with [`DatabaseManager::close`].
pub struct DatabaseManager;

impl DatabaseManager {
    /// Connect the shared pool. Later calls return the existing pool.
    pub async fn init(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
        if let Some(pool) = POOL.get() {
            return Ok(pool.clone());
        }

        let url = config
            .url
            .as_deref()
            .ok_or(DatabaseError::ConfigMissing("DATABASE_URL"))?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .connect(url)
            .await?;

        let pool = POOL.get_or_init(|| pool).clone();
        info!(
            max_connections = config.max_connections,
            "Created database pool"
        );
        Ok(pool)
    }

    /// The shared pool, if [`DatabaseManager::init`] has run
    pub fn pool() -> Result<PgPool, DatabaseError> {
        POOL.get().cloned().ok_or(DatabaseError::NotInitialized)
    }

    /// Apply pending migrations from `migrations/`
    pub async fn migrate() -> Result<(), DatabaseError> {
        let pool = Self::pool()?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Database migrations applied");
        Ok(())
    }

    /// Close the shared pool (e.g., on shutdown)
    pub async fn close() {
        if let Some(pool) = POOL.get() {
            pool.close().await;
            info!("Closed database pool");
        }
    }
}
