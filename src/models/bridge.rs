//! Bridge record structure produced by the normalizer.

use serde::{Deserialize, Serialize};

/// Sequential bridge identifier (1-based, dense after normalization)
pub type BridgeId = u32;

/// Geographic point (lat/lon)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Which rehabilitation field an update targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RehabKind {
    Major,
    Minor,
}

impl std::fmt::Display for RehabKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RehabKind::Major => write!(f, "major"),
            RehabKind::Minor => write!(f, "minor"),
        }
    }
}

/// One structural asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeRecord {
    /// Row position in the source file, starting at 1
    pub id: BridgeId,

    pub name: String,

    pub highway: String,

    pub location: GeoPoint,

    /// Free-form year token, not always numeric
    pub year_built: String,

    /// 4-character year or empty
    pub last_major_rehab_year: String,

    /// 4-character year or empty
    pub last_minor_rehab_year: String,

    pub span_count: u32,

    /// Span lengths in span-index order
    pub span_lengths: Vec<f64>,

    /// Total deck length in meters
    pub total_length: f64,

    /// MM/DD/YYYY
    pub last_inspection_date: String,

    /// Bridge Condition Index history, most recent first
    pub bci_history: Vec<f64>,
}

impl BridgeRecord {
    /// Current BCI (most recent inspection), if any inspection was recorded
    pub fn current_bci(&self) -> Option<f64> {
        self.bci_history.first().copied()
    }

    /// Mean of the BCI history, or 0 when there is none
    pub fn average_bci(&self) -> f64 {
        if self.bci_history.is_empty() {
            return 0.0;
        }
        self.bci_history.iter().sum::<f64>() / self.bci_history.len() as f64
    }

    /// Record as an ordered attribute sequence, in source column order.
    pub fn attributes(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.highway.clone(),
            self.location.lat.to_string(),
            self.location.lon.to_string(),
            self.year_built.clone(),
            self.last_major_rehab_year.clone(),
            self.last_minor_rehab_year.clone(),
            self.span_count.to_string(),
            join_floats(&self.span_lengths),
            self.total_length.to_string(),
            self.last_inspection_date.clone(),
            join_floats(&self.bci_history),
        ]
    }
}

fn join_floats(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(";")
}
