//! Base damage models

use super::AttackProfile;

/// Computes the base damage of an attack before bonuses
pub trait BaseDamageModel: Send + Sync {
    fn base_damage(&self, distance: i32, attack: &AttackProfile) -> f64;
}

/// `max(min_damage, distance × base_damage)`
///
/// Damage grows with range. Use [`FlatDamage`] where range should not matter.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceScaled;

impl BaseDamageModel for DistanceScaled {
    fn base_damage(&self, distance: i32, attack: &AttackProfile) -> f64 {
        attack
            .min_damage
            .max(distance.max(0) as f64 * attack.base_damage)
    }
}

/// `max(min_damage, base_damage)`, independent of range
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatDamage;

impl BaseDamageModel for FlatDamage {
    fn base_damage(&self, _distance: i32, attack: &AttackProfile) -> f64 {
        attack.min_damage.max(attack.base_damage)
    }
}
