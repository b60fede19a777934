//! Sensor reading model.

use sensorlog_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `data` table.
///
/// Storage assigns the id on insert; callers leave it defaulted (0) when
/// creating. Timestamps stay as strings in the exact persisted format.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Data {
    #[serde(default)]
    pub id: DbId,
    pub device_id: String,
    pub device_name: String,
    pub temp_value: f64,
    pub humi_value: f64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub data_type: String,
    pub date_time: String,
}
