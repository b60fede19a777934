//! Shared domain primitives for the sensorlog workspace.
//!
//! This crate has no I/O of its own: it holds the error taxonomy, id and
//! timestamp conventions, pagination arithmetic, and the primitive field
//! checks the record validators in `sensorlog-service` are built from.

pub mod error;
pub mod pagination;
pub mod types;
pub mod validation;
