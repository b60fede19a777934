//! SQLite persistence layer: pool construction, schema bootstrap, and the
//! repository modules.

pub mod models;
pub mod repositories;

use sqlx::sqlite::SqlitePoolOptions;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a SQLite URL
/// (e.g. `sqlite://sensors.db?mode=rwc` or `sqlite::memory:`).
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}

/// DDL for both tables. `IF NOT EXISTS` keeps bootstrap idempotent.
const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS data (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    device_id VARCHAR(50) NOT NULL,
    device_name VARCHAR(50) NOT NULL,
    temp_value FLOAT NOT NULL,
    humi_value FLOAT NOT NULL,
    type VARCHAR(20) NOT NULL,
    date_time TIMESTAMP NOT NULL
);
CREATE TABLE IF NOT EXISTS thresholds (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    sensor_type VARCHAR(50) NOT NULL,
    min_value FLOAT NOT NULL,
    max_value FLOAT NOT NULL,
    updated_at TIMESTAMP NOT NULL
);
";

/// Create both tables, failing fast before any repository is used.
pub async fn init_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    info!("database schema ready");
    Ok(())
}

/// Create a pool and bootstrap the schema in one step.
///
/// Any preparation failure surfaces here, before a repository is handed out;
/// there is no partially-initialized state to tear down beyond dropping the
/// pool.
pub async fn connect(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let pool = create_pool(database_url).await?;
    init_schema(&pool).await?;
    Ok(pool)
}

/// Cheap liveness probe.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Await the shutdown token, then close the pool.
///
/// `Pool::close` is idempotent, so the release happens exactly once even if
/// the pool is also closed elsewhere. Closing drains every connection along
/// with its cached prepared statements.
pub async fn close_on_shutdown(pool: DbPool, shutdown: CancellationToken) {
    shutdown.cancelled().await;
    info!("shutdown signal received, closing database pool");
    pool.close().await;
}
