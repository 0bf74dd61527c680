//! In-memory bridge inventory and the lookups that run over it.
//!
//! Not-found is never an error here: lookups return `None`, empty lists or
//! `0.0` for absent ids, matching what callers get for a genuine zero.

mod mutate;

use hashbrown::HashSet;
use tracing::{debug, info};

use crate::config::PolicyConfig;
use crate::geometry::haversine_km;
use crate::models::{BridgeId, BridgeRecord, GeoPoint};

/// Fixed-size collection of bridge records plus the policy used to query it
#[derive(Debug, Clone)]
pub struct BridgeInventory {
    records: Vec<BridgeRecord>,
    config: PolicyConfig,
}

impl BridgeInventory {
    /// Build an inventory with the default policy
    pub fn new(records: Vec<BridgeRecord>) -> Self {
        Self::with_config(records, PolicyConfig::default())
    }

    /// Build an inventory with a caller-supplied policy. The policy must pass
    /// [`PolicyConfig::validate`]; the priority tiers rely on nested radii.
    pub fn with_config(records: Vec<BridgeRecord>, config: PolicyConfig) -> Self {
        debug_assert!(
            config.validate().is_ok(),
            "invalid policy config: {:?}",
            config.validate()
        );
        info!("Bridge inventory built with {} records", records.len());
        Self { records, config }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    pub fn records(&self) -> &[BridgeRecord] {
        &self.records
    }

    /// Ids in collection order
    pub fn ids(&self) -> impl Iterator<Item = BridgeId> + '_ {
        self.records.iter().map(|b| b.id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record with this id
    pub fn get(&self, id: BridgeId) -> Option<&BridgeRecord> {
        self.records.iter().find(|b| b.id == id)
    }

    /// Mean BCI over the bridge's history; 0 if the bridge is absent or was
    /// never inspected.
    pub fn average_bci(&self, id: BridgeId) -> f64 {
        self.get(id).map_or(0.0, BridgeRecord::average_bci)
    }

    /// Sum of total lengths of the bridges on `highway` (exact, case-sensitive)
    pub fn total_length_on_highway(&self, highway: &str) -> f64 {
        self.records
            .iter()
            .filter(|b| b.highway == highway)
            .map(|b| b.total_length)
            .sum()
    }

    /// Distance in km between two bridges, rounded to the meter
    pub fn distance_between(&self, a: &BridgeRecord, b: &BridgeRecord) -> f64 {
        self.distance_to(a, b.location)
    }

    fn distance_to(&self, bridge: &BridgeRecord, point: GeoPoint) -> f64 {
        haversine_km(bridge.location, point, self.config.earth_radius_km)
    }

    /// Nearest other bridge. Ties go to the bridge that comes first in the
    /// collection.
    pub fn closest(&self, id: BridgeId) -> Option<BridgeId> {
        let target = self.get(id)?;

        let mut best: Option<(BridgeId, f64)> = None;
        for bridge in self.records.iter().filter(|b| b.id != id) {
            let d = self.distance_between(bridge, target);
            if best.map_or(true, |(_, best_d)| d < best_d) {
                best = Some((bridge.id, d));
            }
        }

        debug!("Closest bridge to {}: {:?}", id, best);
        best.map(|(closest_id, _)| closest_id)
    }

    /// Bridges within `radius` km of (lat, lon), inclusive. A non-positive
    /// radius matches nothing.
    pub fn in_radius(&self, lat: f64, lon: f64, radius: f64) -> Vec<BridgeId> {
        if radius <= 0.0 {
            return Vec::new();
        }
        let center = GeoPoint::new(lat, lon);
        self.records
            .iter()
            .filter(|b| self.distance_to(b, center) <= radius)
            .map(|b| b.id)
            .collect()
    }

    /// Bridges from `ids` whose current BCI is at or below `threshold`
    pub fn with_bci_at_or_below(&self, ids: &[BridgeId], threshold: f64) -> Vec<BridgeId> {
        let wanted: HashSet<BridgeId> = ids.iter().copied().collect();
        self.records
            .iter()
            .filter(|b| wanted.contains(&b.id))
            .filter(|b| b.current_bci().is_some_and(|bci| bci <= threshold))
            .map(|b| b.id)
            .collect()
    }

    /// Bridges whose name contains `search`, ignoring case
    pub fn containing_name(&self, search: &str) -> Vec<BridgeId> {
        let needle = search.to_lowercase();
        self.records
            .iter()
            .filter(|b| b.name.to_lowercase().contains(&needle))
            .map(|b| b.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::three_bridges;

    fn inventory() -> BridgeInventory {
        BridgeInventory::new(three_bridges())
    }

    #[test]
    fn test_get() {
        let inv = inventory();
        assert_eq!(inv.get(1), Some(&three_bridges()[0]));
        assert_eq!(inv.get(42), None);
        assert_eq!(BridgeInventory::new(vec![]).get(1), None);
    }

    #[test]
    #[should_panic(expected = "invalid policy config")]
    #[cfg(debug_assertions)]
    fn test_rejects_descending_radii() {
        let config = PolicyConfig {
            high_priority_radius: 500.0,
            medium_priority_radius: 250.0,
            low_priority_radius: 100.0,
            ..PolicyConfig::default()
        };
        BridgeInventory::with_config(three_bridges(), config);
    }

    #[test]
    fn test_get_is_stable() {
        let inv = inventory();
        assert_eq!(inv.get(2), inv.get(2));
    }

    #[test]
    fn test_average_bci() {
        let inv = inventory();
        assert!((inv.average_bci(1) - 70.88571428571429).abs() < 1e-9);
        assert_eq!(inv.average_bci(8), 0.0);
        assert_eq!(inv.average_bci(0), 0.0);
        assert_eq!(BridgeInventory::new(vec![]).average_bci(1), 0.0);
    }

    #[test]
    fn test_total_length_on_highway() {
        let inv = inventory();
        assert_eq!(inv.total_length_on_highway("403"), 126.0);
        assert_eq!(inv.total_length_on_highway("6"), 18.4);
        assert_eq!(inv.total_length_on_highway("69"), 0.0);
    }

    #[test]
    fn test_distance_between() {
        let inv = inventory();
        let bridges = inv.records();
        assert_eq!(inv.distance_between(&bridges[0], &bridges[1]), 1.968);
        assert_eq!(inv.distance_between(&bridges[0], &bridges[2]), 224.451);
    }

    #[test]
    fn test_closest() {
        let inv = inventory();
        assert_eq!(inv.closest(2), Some(1));
        assert_eq!(inv.closest(1), Some(2));
        assert_eq!(inv.closest(3), Some(1));
        assert_eq!(inv.closest(99), None);
        assert_eq!(BridgeInventory::new(vec![]).closest(1), None);
    }

    #[test]
    fn test_closest_single_record() {
        let mut bridges = three_bridges();
        bridges.truncate(1);
        assert_eq!(BridgeInventory::new(bridges).closest(1), None);
    }

    #[test]
    fn test_closest_tie_goes_to_first() {
        let mut bridges = three_bridges();
        // Bridge 3 becomes a twin of bridge 1, equidistant from bridge 2
        bridges[2].location = bridges[0].location;
        let inv = BridgeInventory::new(bridges);
        assert_eq!(inv.closest(2), Some(1));
    }

    #[test]
    fn test_in_radius() {
        let inv = inventory();
        assert_eq!(inv.in_radius(43.10, -80.15, 50.0), vec![1, 2]);
        assert!(inv.in_radius(20.15, -55.15, 50.0).is_empty());
        assert!(BridgeInventory::new(vec![]).in_radius(43.10, -80.15, 50.0).is_empty());
        assert!(inv.in_radius(43.10, -80.15, -50.0).is_empty());
        assert!(inv.in_radius(43.10, -80.15, 0.0).is_empty());
    }

    #[test]
    fn test_in_radius_zero_at_bridge_location() {
        let inv = inventory();
        assert!(inv.in_radius(43.167233, -80.275567, 0.0).is_empty());
        assert_eq!(inv.in_radius(43.167233, -80.275567, 0.001), vec![1]);
    }

    #[test]
    fn test_with_bci_at_or_below() {
        let inv = inventory();
        assert_eq!(inv.with_bci_at_or_below(&[1, 2], 72.0), vec![2]);
        assert!(inv.with_bci_at_or_below(&[1, 3], 0.0).is_empty());
        assert!(BridgeInventory::new(vec![]).with_bci_at_or_below(&[1, 2], 72.0).is_empty());
        assert!(inv.with_bci_at_or_below(&[1, 2], -72.0).is_empty());
        assert_eq!(inv.with_bci_at_or_below(&[3, 2, 1], 100.0), vec![1, 2, 3]);
    }

    #[test]
    fn test_with_bci_skips_uninspected() {
        let mut bridges = three_bridges();
        bridges[1].bci_history.clear();
        let inv = BridgeInventory::new(bridges);
        assert_eq!(inv.with_bci_at_or_below(&[1, 2, 3], 100.0), vec![1, 3]);
    }

    #[test]
    fn test_containing_name() {
        let inv = inventory();
        assert_eq!(inv.containing_name("underpass"), vec![1, 2]);
        assert_eq!(inv.containing_name("pass"), vec![1, 2]);
        assert!(BridgeInventory::new(vec![]).containing_name("underpass").is_empty());
        assert_eq!(inv.containing_name(""), vec![1, 2, 3]);
        assert!(inv.containing_name("hotdog").is_empty());
        assert_eq!(inv.containing_name("Stokes"), vec![3]);
    }
}
