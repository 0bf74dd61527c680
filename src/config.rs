//! Dispatch policy parameters.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::geometry::EARTH_RADIUS_KM;

/// Radius and BCI thresholds that drive the query engine and inspector
/// dispatch. Radii are kilometers and must be ascending from high to low
/// priority.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PolicyConfig {
    pub high_priority_radius: f64,
    pub medium_priority_radius: f64,
    pub low_priority_radius: f64,

    /// Current BCI at or below this is high priority
    pub high_priority_bci: f64,
    /// Current BCI above `high_priority_bci` and at or below this is medium priority
    pub medium_priority_bci: f64,

    pub earth_radius_km: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            high_priority_radius: 25.0,
            medium_priority_radius: 50.0,
            low_priority_radius: 100.0,
            high_priority_bci: 60.0,
            medium_priority_bci: 70.0,
            earth_radius_km: EARTH_RADIUS_KM,
        }
    }
}

impl PolicyConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read policy config file")?;
        let config: PolicyConfig =
            toml::from_str(&content).context("Failed to parse policy config file")?;
        config.validate().context("Invalid policy config")?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let radii = [
            self.high_priority_radius,
            self.medium_priority_radius,
            self.low_priority_radius,
        ];
        if radii.iter().any(|r| !r.is_finite()) || !radii.windows(2).all(|w| w[0] <= w[1]) {
            return Err(ConfigError::RadiiNotAscending {
                high: self.high_priority_radius,
                medium: self.medium_priority_radius,
                low: self.low_priority_radius,
            });
        }
        if self.high_priority_bci > self.medium_priority_bci {
            return Err(ConfigError::ThresholdsInverted {
                high: self.high_priority_bci,
                medium: self.medium_priority_bci,
            });
        }
        if !self.earth_radius_km.is_finite() || self.earth_radius_km <= 0.0 {
            return Err(ConfigError::InvalidEarthRadius(self.earth_radius_km));
        }
        Ok(())
    }
}
