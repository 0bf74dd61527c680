//! Core data models for the bridge inventory.

pub mod bridge;

pub use bridge::{BridgeId, BridgeRecord, GeoPoint, RehabKind};
