//! Repository for the `data` table.

use sensorlog_core::pagination::Page;
use sensorlog_core::types::DbId;
use sqlx::SqlitePool;
use tracing::debug;

use crate::models::Data;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, device_id, device_name, temp_value, humi_value, type, date_time";

/// Provides CRUD operations for sensor readings.
pub struct DataRepo;

impl DataRepo {
    /// Insert a new reading, returning the created row.
    ///
    /// The id on `input` is ignored; storage assigns the identifier.
    pub async fn create(pool: &SqlitePool, input: &Data) -> Result<Data, sqlx::Error> {
        let query = format!(
            "INSERT INTO data (device_id, device_name, temp_value, humi_value, type, date_time)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, Data>(&query)
            .bind(&input.device_id)
            .bind(&input.device_name)
            .bind(input.temp_value)
            .bind(input.humi_value)
            .bind(&input.data_type)
            .bind(&input.date_time)
            .fetch_one(pool)
            .await?;
        debug!(id = created.id, device_id = %created.device_id, "inserted reading");
        Ok(created)
    }

    /// Find a reading by id. `None` when no row matches.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Data>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM data WHERE id = $1");
        sqlx::query_as::<_, Data>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List readings in insertion order. Empty when the page is past the end.
    pub async fn list(pool: &SqlitePool, page: Page) -> Result<Vec<Data>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM data ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Data>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// Full-row update by id. Returns rows affected; 0 means no such reading.
    pub async fn update(pool: &SqlitePool, input: &Data) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE data
             SET device_id = $2, device_name = $3, temp_value = $4,
                 humi_value = $5, type = $6, date_time = $7
             WHERE id = $1",
        )
        .bind(input.id)
        .bind(&input.device_id)
        .bind(&input.device_name)
        .bind(input.temp_value)
        .bind(input.humi_value)
        .bind(&input.data_type)
        .bind(&input.date_time)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete by id. Returns rows affected; deleting a missing row yields 0.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM data WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
