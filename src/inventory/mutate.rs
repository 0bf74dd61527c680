//! In-place updates: new inspections and rehabilitation years.
//!
//! Unknown ids are silently ignored.

use tracing::debug;

use super::BridgeInventory;
use crate::models::{BridgeId, RehabKind};

impl BridgeInventory {
    /// Record an inspection on every bridge in `ids`: overwrite the last
    /// inspection date and push `bci` to the front of the history.
    pub fn record_inspection(&mut self, ids: &[BridgeId], date: &str, bci: f64) {
        let mut updated = 0;
        for bridge in self.records.iter_mut().filter(|b| ids.contains(&b.id)) {
            bridge.last_inspection_date = date.to_string();
            bridge.bci_history.insert(0, bci);
            updated += 1;
        }
        debug!("Recorded inspection on {} ({}) for {} bridges", date, bci, updated);
    }

    /// Store the year of an MM/DD/YYYY `date` as the bridge's last major or
    /// minor rehab year.
    pub fn set_rehab_year(&mut self, id: BridgeId, date: &str, kind: RehabKind) {
        let year = rehab_year_token(date);
        if let Some(bridge) = self.records.iter_mut().find(|b| b.id == id) {
            match kind {
                RehabKind::Major => bridge.last_major_rehab_year = year,
                RehabKind::Minor => bridge.last_minor_rehab_year = year,
            }
            debug!("Bridge {}: {} rehab year set from {:?}", id, kind, date);
        }
    }
}

/// Characters 6..10 of the date. Shorter input yields whatever part of the
/// window exists, possibly an empty token.
fn rehab_year_token(date: &str) -> String {
    date.chars().skip(6).take(4).collect()
}
