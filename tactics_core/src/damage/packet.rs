//! DamageInfo - the resolved damage packet of one attack

use serde::{Deserialize, Serialize};

/// Damage packet produced by [`calculate_damage`](super::calculate_damage)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageInfo {
    pub damage: f64,
    pub armor_penetration: f64,
    pub armor_durability_damage: f64,
    pub total_shots: i32,
    pub can_dismember: bool,
    /// Set when the packet is applied and armor absorbed part of it
    pub absorbed_by_armor: bool,
}

impl Default for DamageInfo {
    fn default() -> Self {
        DamageInfo {
            damage: 0.0,
            armor_penetration: 0.0,
            armor_durability_damage: 0.0,
            total_shots: 1,
            can_dismember: false,
            absorbed_by_armor: false,
        }
    }
}

impl DamageInfo {
    /// Check if this packet has any damage
    pub fn has_damage(&self) -> bool {
        self.damage > 0.0
    }
}
