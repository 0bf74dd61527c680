//! Error types for normalization and policy configuration.

use thiserror::Error;

/// Raised when a raw row cannot be turned into a bridge record.
/// Normalization stops at the first bad row.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NormalizeError {
    #[error("row {row}: missing column '{column}'")]
    MissingColumn { row: usize, column: &'static str },

    #[error("row {row}: invalid number {value:?} in column '{column}'")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("row {row}: span summary {summary:?} has no span list")]
    MalformedSpans { row: usize, summary: String },

    #[error("row {row}: span count {expected} but {found} span lengths listed")]
    SpanCountMismatch {
        row: usize,
        expected: u32,
        found: usize,
    },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("priority radii must be ascending (high {high} <= medium {medium} <= low {low})")]
    RadiiNotAscending { high: f64, medium: f64, low: f64 },

    #[error("high priority BCI threshold {high} exceeds medium threshold {medium}")]
    ThresholdsInverted { high: f64, medium: f64 },

    #[error("earth radius must be positive, got {0}")]
    InvalidEarthRadius(f64),
}
