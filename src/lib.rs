//! Spanwatch - bridge condition queries and inspector dispatch
//!
//! Loads a bridge inventory export, normalizes it into typed records and
//! provides proximity search, condition filtering, inspection updates and
//! inspector assignment over the in-memory collection.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod geometry;
pub mod ingest;
pub mod inventory;
pub mod models;

#[cfg(test)]
mod fixtures;

pub use config::PolicyConfig;
pub use dispatch::{Assignment, PriorityTier};
pub use error::{ConfigError, NormalizeError};
pub use geometry::distance;
pub use inventory::BridgeInventory;
pub use models::{BridgeId, BridgeRecord, GeoPoint, RehabKind};
