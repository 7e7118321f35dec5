//! CombatantProfile - the resolved combat stats of one unit for one attack

mod accumulator;
mod armor;
mod computed;
mod scaled_stat;

pub use accumulator::{ProfileAccumulator, ProfileStat, StatModifier};
pub use armor::{ArmorZone, ArmorZoneStrategy, ArmorZones, FixedZone, HighestZone};
pub use scaled_stat::ScaledStat;

use serde::{Deserialize, Serialize};

/// Immutable per-attack stat aggregate
///
/// Built fresh for every attack by a [`ProfileBuilder`](crate::source::ProfileBuilder)
/// (or any external collaborator) and only ever read by the resolution code.
/// Scalar stats resolve as `floor(base × clamp(mult))`; pure multipliers
/// (`dodge`, `cover_usage`, `suppression_resist`) are accumulators centered
/// on 1.0 and are clamped at the point of use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantProfile {
    // === Offense ===
    pub accuracy: ScaledStat,
    /// Accuracy change per tile away from the ideal range (usually negative)
    pub accuracy_dropoff: ScaledStat,
    pub damage: ScaledStat,
    pub damage_dropoff: ScaledStat,
    pub armor_penetration: ScaledStat,
    pub armor_durability_damage: ScaledStat,
    /// Floor for the final hit chance of this unit's attacks
    pub min_hit_chance: f64,

    // === Defense ===
    pub armor: ArmorZones,
    pub armor_mult: f64,
    /// Defender-side bonus; higher is harder to hit
    pub dodge: f64,
    /// How well the unit exploits cover; higher makes cover stronger
    pub cover_usage: f64,

    // === Morale ===
    /// `base` is the morale base, `mult` the morale multiplier
    pub morale: ScaledStat,
    /// Ordinal shift applied to the derived morale state
    pub morale_state_modifier: i32,

    // === Suppression ===
    pub suppression_resist: f64,
    pub discipline: f64,
    pub ignores_suppression: bool,
    pub ignores_indirect_suppression: bool,
}

impl Default for CombatantProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl CombatantProfile {
    /// A profile with zero base stats and every multiplier at 1.0
    pub fn new() -> Self {
        CombatantProfile {
            accuracy: ScaledStat::default(),
            accuracy_dropoff: ScaledStat::default(),
            damage: ScaledStat::default(),
            damage_dropoff: ScaledStat::default(),
            armor_penetration: ScaledStat::default(),
            armor_durability_damage: ScaledStat::default(),
            min_hit_chance: 0.0,

            armor: ArmorZones::default(),
            armor_mult: 1.0,
            dodge: 1.0,
            cover_usage: 1.0,

            morale: ScaledStat::default(),
            morale_state_modifier: 0,

            suppression_resist: 1.0,
            discipline: 0.0,
            ignores_suppression: false,
            ignores_indirect_suppression: false,
        }
    }
}
