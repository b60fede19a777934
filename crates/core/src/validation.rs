//! Primitive field validation helpers.
//!
//! Each helper checks a single field and reports a human-readable violation,
//! so record-level validators can either short-circuit or accumulate. The
//! record-level rules themselves live in `sensorlog-service`.

use chrono::NaiveDateTime;

use crate::types::TIMESTAMP_FORMAT;

/// A required string: non-empty and at most `max` bytes.
pub fn check_required_text(value: &str, name: &str, max: usize) -> Option<String> {
    if value.is_empty() || value.len() > max {
        return Some(format!(
            "{name} is required and must be at most {max} characters."
        ));
    }
    None
}

/// An optional string: at most `max` bytes.
pub fn check_max_len(value: &str, name: &str, max: usize) -> Option<String> {
    if value.len() > max {
        return Some(format!("{name} must be at most {max} characters."));
    }
    None
}

/// A numeric reading: at most `max`.
pub fn check_max_value(value: f64, name: &str, max: f64) -> Option<String> {
    if value > max {
        return Some(format!("{name} must be at most {max}."));
    }
    None
}

/// A timestamp string matching [`TIMESTAMP_FORMAT`] exactly.
pub fn check_timestamp(value: &str, name: &str) -> Option<String> {
    if NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).is_err() {
        return Some(format!(
            "{name} must be in the format: 2021-01-01T12:00:00Z."
        ));
    }
    None
}
