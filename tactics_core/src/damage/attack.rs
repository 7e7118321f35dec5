//! AttackProfile - damage parameters of the action being used

use serde::{Deserialize, Serialize};

/// Damage-side parameters of an attack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackProfile {
    /// Base damage per tile of distance
    #[serde(default)]
    pub base_damage: f64,
    #[serde(default)]
    pub min_damage: f64,
    #[serde(default)]
    pub damage_bonus: f64,
    #[serde(default)]
    pub armor_penetration: f64,
    /// Armor-durability damage per target element
    #[serde(default)]
    pub armor_durability_damage_base: f64,
    #[serde(default)]
    pub min_armor_damage: f64,
    /// Durability removed from the target's armor per hit
    #[serde(default)]
    pub armor_durability_damage: f64,
    #[serde(default)]
    pub shots_per_element: f64,
    #[serde(default)]
    pub base_shot_count: i32,
    #[serde(default)]
    pub can_dismember: bool,
}

impl Default for AttackProfile {
    fn default() -> Self {
        AttackProfile {
            base_damage: 0.0,
            min_damage: 0.0,
            damage_bonus: 0.0,
            armor_penetration: 0.0,
            armor_durability_damage_base: 0.0,
            min_armor_damage: 0.0,
            armor_durability_damage: 0.0,
            shots_per_element: 0.0,
            base_shot_count: 0,
            can_dismember: false,
        }
    }
}
