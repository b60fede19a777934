/// All database primary keys are SQLite `INTEGER PRIMARY KEY AUTOINCREMENT`.
pub type DbId = i64;

/// Exact format accepted for persisted timestamps, e.g. `2021-01-01T12:00:00Z`.
///
/// Timestamps are stored and exchanged as strings; this format is enforced at
/// validation time, not by the storage layer.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
