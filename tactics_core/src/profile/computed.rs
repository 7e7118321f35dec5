//! Derived stat getters for CombatantProfile

use super::{ArmorZoneStrategy, CombatantProfile, HighestZone};
use crate::mult::Multiplier;

impl CombatantProfile {
    pub fn get_accuracy(&self) -> f64 {
        self.accuracy.value()
    }

    pub fn get_accuracy_dropoff(&self) -> f64 {
        self.accuracy_dropoff.value()
    }

    pub fn get_damage(&self) -> f64 {
        self.damage.value()
    }

    pub fn get_damage_dropoff(&self) -> f64 {
        self.damage_dropoff.value()
    }

    pub fn get_armor_penetration(&self) -> f64 {
        self.armor_penetration.value()
    }

    pub fn get_armor_durability_damage(&self) -> f64 {
        self.armor_durability_damage.value()
    }

    /// Maximum morale: `floor(morale_base × clamp(morale_mult))`
    pub fn get_morale_max(&self) -> f64 {
        self.morale.value()
    }

    /// Armor of the best-protected zone:
    /// `floor(max(base, front, side) × clamp(armor_mult))`
    pub fn get_armor(&self) -> f64 {
        self.armor_with(&HighestZone)
    }

    /// Armor using a caller-chosen zone strategy
    pub fn armor_with(&self, strategy: &dyn ArmorZoneStrategy) -> f64 {
        (strategy.select(&self.armor) * self.armor_mult.clamped()).floor()
    }
}
