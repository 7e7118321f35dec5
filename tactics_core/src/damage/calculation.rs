//! Damage calculation - turning an attack into a DamageInfo packet

use super::{AttackProfile, BaseDamageModel, DamageInfo};

/// Build the damage packet for one attack
///
/// `element_count` is the number of elements (squad members, vehicle
/// parts) in the target. Negative distances and counts are treated as zero.
pub fn calculate_damage(
    distance: i32,
    element_count: i32,
    attack: &AttackProfile,
    model: &dyn BaseDamageModel,
) -> DamageInfo {
    let distance = distance.max(0);
    let elements = element_count.max(0) as f64;

    let base_damage = model.base_damage(distance, attack);
    let armor_dur_damage = attack
        .min_armor_damage
        .max(elements * attack.armor_durability_damage_base);
    let shots = (elements * attack.shots_per_element).ceil() as i32;
    let total_shots = shots.saturating_add(attack.base_shot_count).max(1);

    DamageInfo {
        damage: (base_damage + attack.damage_bonus + armor_dur_damage).floor(),
        armor_penetration: attack.armor_penetration,
        armor_durability_damage: attack.armor_durability_damage,
        total_shots,
        can_dismember: attack.can_dismember,
        absorbed_by_armor: false,
    }
}
