//! Attack resolution - run one attack from hit chance to suppression

use super::result::AttackOutcome;
use crate::combatant::CombatantState;
use crate::config::CombatConstants;
use crate::damage::{AttackProfile, DamageResolver};
use crate::events::CombatHooks;
use crate::hit::{compute_hit_chance, roll_hit, ActionProfile, HitChanceRequest};
use crate::map::TacticalMap;
use crate::morale::{apply_suppression, SuppressionHit};
use crate::profile::CombatantProfile;
use crate::types::{CombatantId, TilePos};
use rand::Rng;

/// One attack against one combatant
#[derive(Debug, Clone, Copy)]
pub struct Attack<'a> {
    pub attacker_id: &'a CombatantId,
    pub attacker: &'a CombatantProfile,
    pub defender: &'a CombatantProfile,
    pub source: TilePos,
    pub target: TilePos,
    pub target_contained: bool,
    pub action: &'a ActionProfile,
    pub damage: &'a AttackProfile,
    /// Elements (squad members, vehicle parts) in the target
    pub element_count: i32,
    /// Raw direct suppression carried by the attack
    pub suppression: f64,
}

impl<'a> Attack<'a> {
    /// The hit-resolution view of this attack
    pub fn hit_request(&self) -> HitChanceRequest<'a> {
        HitChanceRequest::new(self.attacker, self.action, self.source, self.target)
            .against(self.defender)
            .contained(self.target_contained)
    }
}

/// Stateless attack pipeline over injected constants and damage strategies
#[derive(Default)]
pub struct CombatEngine {
    pub constants: CombatConstants,
    pub damage: DamageResolver,
}

impl CombatEngine {
    pub fn new(constants: CombatConstants, damage: DamageResolver) -> Self {
        CombatEngine { constants, damage }
    }

    /// Engine using the bundled constants and default damage strategies
    pub fn with_defaults() -> Self {
        CombatEngine::new(crate::config::default_constants(), DamageResolver::default())
    }

    /// Resolve an attack, rolling the hit with the caller's RNG
    ///
    /// The engine holds no RNG of its own; the same inputs and the same RNG
    /// state always produce the same outcome.
    ///
    /// 1. Compute the hit chance and roll against it
    /// 2. On a hit, build the damage packet and apply it to the target
    /// 3. Apply the attack's suppression, hit or miss, with tile cover
    ///    taken from the target's tile
    pub fn resolve_attack_with_rng(
        &self,
        attack: &Attack<'_>,
        target: &mut CombatantState,
        map: &dyn TacticalMap,
        hooks: &mut dyn CombatHooks,
        rng: &mut impl Rng,
    ) -> AttackOutcome {
        let hit_chance = compute_hit_chance(&attack.hit_request(), map, &self.constants);
        let roll = roll_hit(&hit_chance, rng);

        let damage = if roll.hit {
            let distance = map.distance_between(attack.source, attack.target);
            Some(self.damage.resolve(
                distance,
                attack.element_count,
                attack.damage,
                attack.defender,
                target,
                hooks,
            ))
        } else {
            None
        };

        let hit = SuppressionHit::direct(attack.suppression).from_source(attack.attacker_id);
        let suppression = apply_suppression(
            target,
            attack.defender,
            &hit,
            map.tile_offers_cover(attack.target),
            &self.constants.suppression,
            hooks,
        );

        tracing::debug!(
            attacker = %attack.attacker_id,
            unit = %target.id,
            hit = roll.hit,
            roll = roll.roll,
            hit_chance = hit_chance.hit_chance,
            "resolved attack"
        );

        AttackOutcome {
            hit_chance,
            roll,
            damage,
            suppression,
        }
    }
}
