//! Caller-side roll against a resolved hit chance

use super::{HitChanceResult, MAX_HIT_CHANCE};
use rand::Rng;

/// Outcome of rolling against a hit chance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRoll {
    /// Rolled value in 0..100
    pub roll: f64,
    pub hit_chance: f64,
    pub hit: bool,
}

/// Roll a hit using the provided RNG
///
/// A 100% chance always hits and a 0% chance never does.
pub fn roll_hit(result: &HitChanceResult, rng: &mut impl Rng) -> HitRoll {
    let roll = rng.gen_range(0.0..MAX_HIT_CHANCE);
    HitRoll {
        roll,
        hit_chance: result.hit_chance,
        hit: roll < result.hit_chance,
    }
}
