//! Inspector dispatch: hands out bridges to inspectors by condition and
//! distance.
//!
//! Inspectors are served in the order given. Each one receives up to
//! `max_bridges` bridges that no earlier inspector took, worst condition tier
//! first, collection order within a tier.

use hashbrown::HashSet;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::PolicyConfig;
use crate::inventory::BridgeInventory;
use crate::models::{BridgeId, GeoPoint};

/// Dispatch priority derived from a bridge's current BCI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum PriorityTier {
    High,
    Medium,
    Low,
}

impl PriorityTier {
    /// All tiers, most urgent first
    pub fn all() -> &'static [PriorityTier] {
        &[PriorityTier::High, PriorityTier::Medium, PriorityTier::Low]
    }

    /// Search radius (km) around an inspector for this tier
    pub fn radius(&self, config: &PolicyConfig) -> f64 {
        match self {
            PriorityTier::High => config.high_priority_radius,
            PriorityTier::Medium => config.medium_priority_radius,
            PriorityTier::Low => config.low_priority_radius,
        }
    }

    /// Whether a current BCI falls in this tier's band
    pub fn admits(&self, bci: f64, config: &PolicyConfig) -> bool {
        match self {
            PriorityTier::High => bci <= config.high_priority_bci,
            PriorityTier::Medium => {
                config.high_priority_bci < bci && bci <= config.medium_priority_bci
            }
            PriorityTier::Low => bci > config.medium_priority_bci,
        }
    }

    /// Tier for a current BCI, ignoring distance
    pub fn for_bci(bci: f64, config: &PolicyConfig) -> Option<PriorityTier> {
        Self::all().iter().copied().find(|t| t.admits(bci, config))
    }
}

/// One bridge handed to an inspector
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Assignment {
    pub bridge: BridgeId,
    pub tier: PriorityTier,
}

impl BridgeInventory {
    /// Assign bridges to inspectors. Returns one id list per inspector, in
    /// input order. A bridge is never given to more than one inspector.
    pub fn assign_inspectors(
        &self,
        inspectors: &[GeoPoint],
        max_bridges: usize,
    ) -> Vec<Vec<BridgeId>> {
        self.assign_with_tiers(inspectors, max_bridges)
            .into_iter()
            .map(|assigned| assigned.into_iter().map(|a| a.bridge).collect())
            .collect()
    }

    /// Same as [`assign_inspectors`](Self::assign_inspectors), keeping the
    /// tier each bridge was drawn from.
    pub fn assign_with_tiers(
        &self,
        inspectors: &[GeoPoint],
        max_bridges: usize,
    ) -> Vec<Vec<Assignment>> {
        let mut unassigned: HashSet<BridgeId> = self.ids().collect();
        let mut assignments = Vec::with_capacity(inspectors.len());

        for (n, inspector) in inspectors.iter().enumerate() {
            let assigned: Vec<Assignment> = self
                .candidates(inspector, &unassigned)
                .into_iter()
                .take(max_bridges)
                .collect();

            for a in &assigned {
                unassigned.remove(&a.bridge);
            }

            debug!(
                "Inspector {} at ({}, {}): assigned {:?}",
                n,
                inspector.lat,
                inspector.lon,
                assigned.iter().map(|a| a.bridge).collect::<Vec<_>>()
            );
            assignments.push(assigned);
        }

        info!(
            "Assigned {} bridges across {} inspectors, {} left unassigned",
            self.len() - unassigned.len(),
            inspectors.len(),
            unassigned.len()
        );

        assignments
    }

    /// Unassigned bridges in reach of `inspector`, high tier first
    fn candidates(&self, inspector: &GeoPoint, unassigned: &HashSet<BridgeId>) -> Vec<Assignment> {
        let config = self.config();
        let mut candidates = Vec::new();

        for &tier in PriorityTier::all() {
            let in_reach: HashSet<BridgeId> = self
                .in_radius(inspector.lat, inspector.lon, tier.radius(config))
                .into_iter()
                .collect();

            candidates.extend(
                self.records()
                    .iter()
                    .filter(|b| unassigned.contains(&b.id) && in_reach.contains(&b.id))
                    .filter(|b| {
                        b.current_bci()
                            .and_then(|bci| PriorityTier::for_bci(bci, config))
                            == Some(tier)
                    })
                    .map(|b| Assignment {
                        bridge: b.id,
                        tier,
                    }),
            );
        }

        candidates
    }
}
