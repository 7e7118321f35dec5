//! Damage application - Apply a DamageInfo packet to a target

use super::DamageInfo;
use crate::combatant::CombatantState;
use crate::events::CombatHooks;
use crate::profile::{ArmorZoneStrategy, CombatantProfile};
use serde::{Deserialize, Serialize};

/// Result of applying a damage packet to a combatant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageResult {
    /// The packet, with `absorbed_by_armor` filled in
    pub packet: DamageInfo,
    /// Armor left after penetration (may be negative)
    pub effective_armor: f64,
    /// Health actually removed
    pub applied_damage: f64,
    pub health_before: f64,
    pub health_after: f64,
    pub durability_before: f64,
    pub durability_after: f64,
    /// Health went from positive to zero or below
    pub is_killing_blow: bool,
}

impl DamageResult {
    /// Damage stopped by armor
    pub fn damage_absorbed(&self) -> f64 {
        (self.packet.damage - self.applied_damage).max(0.0)
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();

        if self.applied_damage > 0.0 {
            parts.push(format!("{:.0} damage taken", self.applied_damage));
        }

        if self.packet.absorbed_by_armor {
            parts.push(format!("{:.0} absorbed by armor", self.damage_absorbed()));
        }

        let durability_lost = self.durability_before - self.durability_after;
        if durability_lost > 0.0 {
            parts.push(format!("{:.0} armor durability lost", durability_lost));
        }

        if self.is_killing_blow {
            parts.push("FATAL".to_string());
        }

        if parts.is_empty() {
            "No damage".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Apply a damage packet to a target
///
/// 1. Effective armor is the defender's armor minus the packet's penetration
/// 2. Positive effective armor is subtracted from the damage and marks the
///    packet as absorbed
/// 3. Armor durability drops by the packet's durability damage, floored at 0
/// 4. Health drops by the applied damage and may go negative
pub fn apply_damage(
    target: &mut CombatantState,
    defender: &CombatantProfile,
    mut packet: DamageInfo,
    armor: &dyn ArmorZoneStrategy,
    hooks: &mut dyn CombatHooks,
) -> DamageResult {
    let effective_armor = defender.armor_with(armor) - packet.armor_penetration;

    let applied_damage = if effective_armor > 0.0 {
        packet.absorbed_by_armor = true;
        (packet.damage - effective_armor).max(0.0)
    } else {
        packet.damage.max(0.0)
    };

    let durability_before = target.armor_durability;
    target.armor_durability = (durability_before - packet.armor_durability_damage).max(0.0);

    let health_before = target.health;
    target.health -= applied_damage;

    tracing::debug!(
        unit = %target.id,
        damage = packet.damage,
        effective_armor,
        applied_damage,
        health = target.health,
        durability = target.armor_durability,
        "applied damage"
    );

    hooks.on_damage_resolved(&target.id, &packet);

    DamageResult {
        packet,
        effective_armor,
        applied_damage,
        health_before,
        health_after: target.health,
        durability_before,
        durability_after: target.armor_durability,
        is_killing_blow: health_before > 0.0 && target.health <= 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{CombatEvent, NoHooks, RecordingHooks};
    use crate::profile::{ArmorZone, FixedZone, HighestZone};
    use crate::types::Faction;

    fn packet(damage: f64, pen: f64) -> DamageInfo {
        DamageInfo {
            damage,
            armor_penetration: pen,
            armor_durability_damage: 5.0,
            ..Default::default()
        }
    }

    fn armored(armor: f64) -> CombatantProfile {
        let mut profile = CombatantProfile::new();
        profile.armor.front = armor;
        profile
    }

    fn target() -> CombatantState {
        CombatantState::new("trooper", Faction::Enemy)
            .with_health(100.0)
            .with_armor_durability(20.0)
    }

    #[test]
    fn test_armor_absorbs() {
        let mut state = target();
        let result = apply_damage(&mut state, &armored(15.0), packet(40.0, 5.0), &HighestZone, &mut NoHooks);

        assert_eq!(result.effective_armor, 10.0);
        assert_eq!(result.applied_damage, 30.0);
        assert!(result.packet.absorbed_by_armor);
        assert_eq!(state.health, 70.0);
        assert_eq!(state.armor_durability, 15.0);
        assert_eq!(result.damage_absorbed(), 10.0);
    }

    #[test]
    fn test_penetration_beats_armor() {
        let mut state = target();
        let result = apply_damage(&mut state, &armored(15.0), packet(40.0, 20.0), &HighestZone, &mut NoHooks);

        assert_eq!(result.applied_damage, 40.0);
        assert!(!result.packet.absorbed_by_armor);
        assert_eq!(state.health, 60.0);
    }

    #[test]
    fn test_armor_exactly_penetrated() {
        let mut state = target();
        let result = apply_damage(&mut state, &armored(15.0), packet(40.0, 15.0), &HighestZone, &mut NoHooks);
        assert_eq!(result.applied_damage, 40.0);
        assert!(!result.packet.absorbed_by_armor);
    }

    #[test]
    fn test_applied_never_negative() {
        let mut state = target();
        let result = apply_damage(&mut state, &armored(90.0), packet(40.0, 0.0), &HighestZone, &mut NoHooks);
        assert_eq!(result.applied_damage, 0.0);
        assert_eq!(state.health, 100.0);

        let result = apply_damage(&mut state, &armored(0.0), packet(-10.0, 0.0), &HighestZone, &mut NoHooks);
        assert_eq!(result.applied_damage, 0.0);
    }

    #[test]
    fn test_durability_floors_at_zero() {
        let mut state = target().with_armor_durability(3.0);
        apply_damage(&mut state, &armored(0.0), packet(10.0, 0.0), &HighestZone, &mut NoHooks);
        assert_eq!(state.armor_durability, 0.0);
    }

    #[test]
    fn test_health_may_go_negative() {
        let mut state = target().with_health(10.0);
        let result = apply_damage(&mut state, &armored(0.0), packet(35.0, 0.0), &HighestZone, &mut NoHooks);
        assert_eq!(state.health, -25.0);
        assert!(result.is_killing_blow);
        assert!(result.summary().contains("FATAL"));
    }

    #[test]
    fn test_zone_strategy() {
        let mut profile = armored(30.0);
        profile.armor.side = 5.0;
        let mut state = target();
        let result = apply_damage(&mut state, &profile, packet(20.0, 0.0), &FixedZone(ArmorZone::Side), &mut NoHooks);
        assert_eq!(result.applied_damage, 15.0);
    }

    #[test]
    fn test_notifies_hooks() {
        let mut state = target();
        let mut hooks = RecordingHooks::new();
        let result = apply_damage(&mut state, &armored(15.0), packet(40.0, 5.0), &HighestZone, &mut hooks);

        assert_eq!(
            hooks.events,
            vec![CombatEvent::DamageResolved {
                target: state.id.clone(),
                packet: result.packet.clone(),
            }]
        );
    }
}
