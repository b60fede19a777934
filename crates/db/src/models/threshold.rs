//! Alert threshold model.

use sensorlog_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `thresholds` table.
///
/// Persisted rows always satisfy `min_value < max_value`; the service layer
/// rejects writes that would break it.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Threshold {
    #[serde(default)]
    pub id: DbId,
    pub sensor_type: String,
    pub min_value: f64,
    pub max_value: f64,
    pub updated_at: String,
}
