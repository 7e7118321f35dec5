//! Damage resolution - build a damage packet and apply it to a target

mod application;
mod attack;
mod calculation;
mod model;
mod packet;

pub use application::{apply_damage, DamageResult};
pub use attack::AttackProfile;
pub use calculation::calculate_damage;
pub use model::{BaseDamageModel, DistanceScaled, FlatDamage};
pub use packet::DamageInfo;

use crate::combatant::CombatantState;
use crate::events::CombatHooks;
use crate::profile::{ArmorZoneStrategy, CombatantProfile, HighestZone};

/// Damage pipeline with pluggable base-damage and armor-zone strategies
pub struct DamageResolver {
    pub model: Box<dyn BaseDamageModel>,
    pub armor: Box<dyn ArmorZoneStrategy>,
}

impl Default for DamageResolver {
    fn default() -> Self {
        DamageResolver {
            model: Box::new(DistanceScaled),
            armor: Box::new(HighestZone),
        }
    }
}

impl DamageResolver {
    pub fn new(model: Box<dyn BaseDamageModel>, armor: Box<dyn ArmorZoneStrategy>) -> Self {
        DamageResolver { model, armor }
    }

    /// Build the packet for this attack and apply it to the target
    pub fn resolve(
        &self,
        distance: i32,
        element_count: i32,
        attack: &AttackProfile,
        defender: &CombatantProfile,
        target: &mut CombatantState,
        hooks: &mut dyn CombatHooks,
    ) -> DamageResult {
        let packet = calculate_damage(distance, element_count, attack, self.model.as_ref());
        apply_damage(target, defender, packet, self.armor.as_ref(), hooks)
    }
}
