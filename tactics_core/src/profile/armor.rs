//! Armor zones and the strategy that picks which zone absorbs a hit

use serde::{Deserialize, Serialize};

/// Facing zone of a combatant's armor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmorZone {
    Base,
    Front,
    Side,
}

/// Raw armor values per zone, before the armor multiplier
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ArmorZones {
    #[serde(default)]
    pub base: f64,
    #[serde(default)]
    pub front: f64,
    #[serde(default)]
    pub side: f64,
}

impl ArmorZones {
    pub fn zone(&self, zone: ArmorZone) -> f64 {
        match zone {
            ArmorZone::Base => self.base,
            ArmorZone::Front => self.front,
            ArmorZone::Side => self.side,
        }
    }

    /// Largest of the three zone values
    pub fn highest(&self) -> f64 {
        self.base.max(self.front).max(self.side)
    }
}

/// Chooses the raw zone value that faces an incoming attack
pub trait ArmorZoneStrategy: Send + Sync {
    fn select(&self, zones: &ArmorZones) -> f64;
}

/// Always use the best-protected zone
#[derive(Debug, Clone, Copy, Default)]
pub struct HighestZone;

impl ArmorZoneStrategy for HighestZone {
    fn select(&self, zones: &ArmorZones) -> f64 {
        zones.highest()
    }
}

/// Use one specific zone, for callers that already resolved facing
#[derive(Debug, Clone, Copy)]
pub struct FixedZone(pub ArmorZone);

impl ArmorZoneStrategy for FixedZone {
    fn select(&self, zones: &ArmorZones) -> f64 {
        zones.zone(self.0)
    }
}
