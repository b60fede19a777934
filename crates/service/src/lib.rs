//! Orchestration layer: validation plus repository calls for both resource
//! kinds, surfacing the shared [`CoreError`] taxonomy.
//!
//! Reads and deletes never validate; writes validate before touching storage,
//! so a validation failure can never reach the database. Every storage call
//! is bounded by a per-operation timeout, and the returned futures cancel the
//! underlying operation when dropped.

pub mod validation;

use std::future::Future;
use std::time::Duration;

use sensorlog_core::error::CoreError;
use sensorlog_core::pagination::Page;
use sensorlog_core::types::DbId;
use sensorlog_db::models::{Data, Threshold};
use sensorlog_db::repositories::{DataRepo, ThresholdRepo};
use sensorlog_db::DbPool;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::validation::{validate_data, validate_threshold};

/// Default bound on any single storage operation.
pub const DEFAULT_OP_TIMEOUT: Duration = Duration::from_secs(2);

/// Orchestrates validation and repository calls for readings and thresholds.
///
/// Cloning is cheap; the pool is internally reference-counted and safe for
/// concurrent use, so one service instance can be shared across request tasks
/// without extra locking.
#[derive(Clone)]
pub struct SensorService {
    pool: DbPool,
    op_timeout: Duration,
}

impl SensorService {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            op_timeout: DEFAULT_OP_TIMEOUT,
        }
    }

    /// Same as [`SensorService::new`] with an explicit per-operation timeout.
    pub fn with_timeout(pool: DbPool, op_timeout: Duration) -> Self {
        Self { pool, op_timeout }
    }

    async fn bounded<T>(
        &self,
        fut: impl Future<Output = Result<T, sqlx::Error>>,
    ) -> Result<T, CoreError> {
        match timeout(self.op_timeout, fut).await {
            Ok(result) => result.map_err(CoreError::from),
            Err(_) => {
                warn!(timeout_ms = self.op_timeout.as_millis() as u64, "storage operation timed out");
                Err(CoreError::Timeout)
            }
        }
    }

    // -----------------------------------------------------------------------
    // Data
    // -----------------------------------------------------------------------

    /// Validate and insert a reading. Returns the persisted row with its
    /// storage-assigned id.
    pub async fn create_data(&self, input: &Data) -> Result<Data, CoreError> {
        validate_data(input)?;
        let created = self.bounded(DataRepo::create(&self.pool, input)).await?;
        debug!(id = created.id, "created reading");
        Ok(created)
    }

    /// Read a single reading. `Ok(None)` when the id does not exist.
    pub async fn read_data(&self, id: DbId) -> Result<Option<Data>, CoreError> {
        self.bounded(DataRepo::find_by_id(&self.pool, id)).await
    }

    /// List readings for a page. An out-of-range page yields an empty vec.
    pub async fn list_data(&self, page: Page) -> Result<Vec<Data>, CoreError> {
        self.bounded(DataRepo::list(&self.pool, page)).await
    }

    /// Validate and update a reading by its id.
    ///
    /// Returns rows affected: 0 is the sole not-found signal, so callers can
    /// distinguish "not found" from "updated" without an error round-trip.
    pub async fn update_data(&self, input: &Data) -> Result<u64, CoreError> {
        validate_data(input)?;
        self.bounded(DataRepo::update(&self.pool, input)).await
    }

    /// Delete a reading. Deletion only requires identity, so no validation;
    /// deleting a missing id yields 0 rows affected, not an error.
    pub async fn delete_data(&self, id: DbId) -> Result<u64, CoreError> {
        self.bounded(DataRepo::delete(&self.pool, id)).await
    }

    // -----------------------------------------------------------------------
    // Threshold
    // -----------------------------------------------------------------------

    /// Validate and insert a threshold. Returns the persisted row with its
    /// storage-assigned id.
    pub async fn create_threshold(&self, input: &Threshold) -> Result<Threshold, CoreError> {
        validate_threshold(input)?;
        let created = self.bounded(ThresholdRepo::create(&self.pool, input)).await?;
        debug!(id = created.id, "created threshold");
        Ok(created)
    }

    /// Read a single threshold. `Ok(None)` when the id does not exist.
    pub async fn read_threshold(&self, id: DbId) -> Result<Option<Threshold>, CoreError> {
        self.bounded(ThresholdRepo::find_by_id(&self.pool, id)).await
    }

    /// List thresholds for a page.
    pub async fn list_thresholds(&self, page: Page) -> Result<Vec<Threshold>, CoreError> {
        self.bounded(ThresholdRepo::list(&self.pool, page)).await
    }

    /// Validate and update a threshold by its id. 0 rows affected means no
    /// such threshold.
    pub async fn update_threshold(&self, input: &Threshold) -> Result<u64, CoreError> {
        validate_threshold(input)?;
        self.bounded(ThresholdRepo::update(&self.pool, input)).await
    }

    /// Delete a threshold; no validation. 0 rows affected means the id never
    /// existed or was already deleted.
    pub async fn delete_threshold(&self, id: DbId) -> Result<u64, CoreError> {
        self.bounded(ThresholdRepo::delete(&self.pool, id)).await
    }
}
