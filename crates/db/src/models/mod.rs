//! Entity models mapped to the `data` and `thresholds` tables.

pub mod data;
pub mod threshold;

pub use data::Data;
pub use threshold::Threshold;
