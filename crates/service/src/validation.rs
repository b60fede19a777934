//! Record-level validation rules.
//!
//! `validate_data` accumulates every violation into a single message so a
//! client sees all problems at once; `validate_threshold` returns on the
//! first. Existing clients depend on both behaviors, including the message
//! wording, so the asymmetry is deliberate.

use sensorlog_core::error::CoreError;
use sensorlog_core::validation::{
    check_max_len, check_max_value, check_required_text, check_timestamp,
};
use sensorlog_db::models::{Data, Threshold};

/// Max byte length for device identifiers and names.
pub const MAX_DEVICE_LEN: usize = 50;

/// Max byte length for the reading type tag.
pub const MAX_TYPE_LEN: usize = 20;

/// Upper bound for temperature and humidity readings.
pub const MAX_READING: f64 = 100.0;

/// Check every field constraint on a reading.
///
/// All violations are joined into one `CoreError::Validation` message.
pub fn validate_data(data: &Data) -> Result<(), CoreError> {
    let violations: Vec<String> = [
        check_required_text(&data.device_id, "device_id", MAX_DEVICE_LEN),
        check_max_len(&data.device_name, "device_name", MAX_DEVICE_LEN),
        check_max_len(&data.data_type, "type", MAX_TYPE_LEN),
        check_max_value(data.temp_value, "temp_value", MAX_READING),
        check_max_value(data.humi_value, "humi_value", MAX_READING),
        check_timestamp(&data.date_time, "date_time"),
    ]
    .into_iter()
    .flatten()
    .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(violations.join(" ")))
    }
}

/// Check a threshold, short-circuiting on the first violation.
pub fn validate_threshold(threshold: &Threshold) -> Result<(), CoreError> {
    if threshold.sensor_type.is_empty() {
        return Err(CoreError::Validation("sensor_type is required.".to_string()));
    }
    if threshold.min_value >= threshold.max_value {
        return Err(CoreError::Validation(
            "min_value must be less than max_value.".to_string(),
        ));
    }
    Ok(())
}
