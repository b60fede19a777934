//! Repository for the `thresholds` table.

use sensorlog_core::pagination::Page;
use sensorlog_core::types::DbId;
use sqlx::SqlitePool;
use tracing::debug;

use crate::models::Threshold;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, sensor_type, min_value, max_value, updated_at";

/// Provides CRUD operations for alert thresholds.
pub struct ThresholdRepo;

impl ThresholdRepo {
    /// Insert a new threshold, returning the created row.
    ///
    /// The id on `input` is ignored; storage assigns the identifier.
    pub async fn create(pool: &SqlitePool, input: &Threshold) -> Result<Threshold, sqlx::Error> {
        let query = format!(
            "INSERT INTO thresholds (sensor_type, min_value, max_value, updated_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, Threshold>(&query)
            .bind(&input.sensor_type)
            .bind(input.min_value)
            .bind(input.max_value)
            .bind(&input.updated_at)
            .fetch_one(pool)
            .await?;
        debug!(id = created.id, sensor_type = %created.sensor_type, "inserted threshold");
        Ok(created)
    }

    /// Find a threshold by id. `None` when no row matches.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Threshold>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM thresholds WHERE id = $1");
        sqlx::query_as::<_, Threshold>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List thresholds in insertion order. Empty when the page is past the end.
    pub async fn list(pool: &SqlitePool, page: Page) -> Result<Vec<Threshold>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM thresholds ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Threshold>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// Full-row update by id. Returns rows affected; 0 means no such threshold.
    pub async fn update(pool: &SqlitePool, input: &Threshold) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE thresholds
             SET sensor_type = $2, min_value = $3, max_value = $4, updated_at = $5
             WHERE id = $1",
        )
        .bind(input.id)
        .bind(&input.sensor_type)
        .bind(input.min_value)
        .bind(input.max_value)
        .bind(&input.updated_at)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete by id. Returns rows affected; deleting a missing row yields 0.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM thresholds WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
