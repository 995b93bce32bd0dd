//! Activity reference data
//!
//! The MET reference table, loaded once at startup and shared read-only.

pub mod table;

pub use table::{format_mets, ActivityRecord, ActivityTable, DatasetError, DatasetResult};
