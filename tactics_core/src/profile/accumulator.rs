//! ProfileAccumulator - Collects modifiers before freezing them into a profile

use super::{CombatantProfile, ScaledStat};
use crate::mult::Multiplier;
use serde::{Deserialize, Serialize};

/// A stat that sources can modify
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileStat {
    Accuracy,
    AccuracyDropoff,
    Damage,
    DamageDropoff,
    ArmorPenetration,
    ArmorDurabilityDamage,
    /// Flat applies to every zone, mult to the shared armor multiplier
    Armor,
    ArmorBase,
    ArmorFront,
    ArmorSide,
    Dodge,
    CoverUsage,
    Morale,
    MoraleStateModifier,
    SuppressionResist,
    Discipline,
    MinHitChance,
}

/// How a modifier combines with the stat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierKind {
    /// Added to the base value
    Flat,
    /// Stacked onto the multiplier accumulator with `add_mult`
    Mult,
}

/// A single stat modification from equipment, a skill, or terrain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatModifier {
    pub stat: ProfileStat,
    pub kind: ModifierKind,
    pub value: f64,
}

impl StatModifier {
    pub fn flat(stat: ProfileStat, value: f64) -> Self {
        StatModifier {
            stat,
            kind: ModifierKind::Flat,
            value,
        }
    }

    pub fn mult(stat: ProfileStat, value: f64) -> Self {
        StatModifier {
            stat,
            kind: ModifierKind::Mult,
            value,
        }
    }
}

/// Accumulates stat modifications from various sources
///
/// Multipliers always combine additively, so the order in which sources
/// apply only matters for flags.
#[derive(Debug, Clone, Default)]
pub struct ProfileAccumulator {
    profile: CombatantProfile,
    discipline: ScaledStat,
    min_hit_chance: ScaledStat,
    morale_state_modifier: f64,
}

impl ProfileAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one modifier
    pub fn apply(&mut self, modifier: &StatModifier) {
        match modifier.kind {
            ModifierKind::Flat => self.add_flat(modifier.stat, modifier.value),
            ModifierKind::Mult => self.add_mult(modifier.stat, modifier.value),
        }
    }

    pub fn add_flat(&mut self, stat: ProfileStat, value: f64) {
        let p = &mut self.profile;
        match stat {
            ProfileStat::Armor => {
                p.armor.base += value;
                p.armor.front += value;
                p.armor.side += value;
            }
            ProfileStat::ArmorBase => p.armor.base += value,
            ProfileStat::ArmorFront => p.armor.front += value,
            ProfileStat::ArmorSide => p.armor.side += value,
            ProfileStat::Dodge => p.dodge += value,
            ProfileStat::CoverUsage => p.cover_usage += value,
            ProfileStat::SuppressionResist => p.suppression_resist += value,
            ProfileStat::MoraleStateModifier => self.morale_state_modifier += value,
            _ => {
                if let Some(s) = self.scaled_mut(stat) {
                    s.add_flat(value);
                }
            }
        }
    }

    pub fn add_mult(&mut self, stat: ProfileStat, mult: f64) {
        let p = &mut self.profile;
        match stat {
            ProfileStat::Armor
            | ProfileStat::ArmorBase
            | ProfileStat::ArmorFront
            | ProfileStat::ArmorSide => p.armor_mult = p.armor_mult.add_mult(mult),
            ProfileStat::Dodge => p.dodge = p.dodge.add_mult(mult),
            ProfileStat::CoverUsage => p.cover_usage = p.cover_usage.add_mult(mult),
            ProfileStat::SuppressionResist => {
                p.suppression_resist = p.suppression_resist.add_mult(mult)
            }
            ProfileStat::MoraleStateModifier => {
                tracing::trace!(mult, "multiplier on morale state modifier ignored");
            }
            _ => {
                if let Some(s) = self.scaled_mut(stat) {
                    s.add_mult(mult);
                }
            }
        }
    }

    pub fn set_ignores_suppression(&mut self, value: bool) {
        self.profile.ignores_suppression = value;
    }

    pub fn set_ignores_indirect_suppression(&mut self, value: bool) {
        self.profile.ignores_indirect_suppression = value;
    }

    /// Freeze the accumulated values into an immutable profile
    pub fn finish(self) -> CombatantProfile {
        let mut profile = self.profile;
        profile.discipline = self.discipline.value();
        profile.min_hit_chance = self.min_hit_chance.value();
        profile.morale_state_modifier = self.morale_state_modifier.round() as i32;
        profile
    }

    fn scaled_mut(&mut self, stat: ProfileStat) -> Option<&mut ScaledStat> {
        let p = &mut self.profile;
        match stat {
            ProfileStat::Accuracy => Some(&mut p.accuracy),
            ProfileStat::AccuracyDropoff => Some(&mut p.accuracy_dropoff),
            ProfileStat::Damage => Some(&mut p.damage),
            ProfileStat::DamageDropoff => Some(&mut p.damage_dropoff),
            ProfileStat::ArmorPenetration => Some(&mut p.armor_penetration),
            ProfileStat::ArmorDurabilityDamage => Some(&mut p.armor_durability_damage),
            ProfileStat::Morale => Some(&mut p.morale),
            ProfileStat::Discipline => Some(&mut self.discipline),
            ProfileStat::MinHitChance => Some(&mut self.min_hit_chance),
            _ => None,
        }
    }
}
