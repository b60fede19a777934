//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument. Backend failures are
//! returned as `sqlx::Error`; the service layer owns the translation into
//! the shared error taxonomy.

pub mod data_repo;
pub mod threshold_repo;

pub use data_repo::DataRepo;
pub use threshold_repo::ThresholdRepo;
