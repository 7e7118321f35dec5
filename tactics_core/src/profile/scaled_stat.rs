//! ScaledStat - a base value paired with an additive multiplier accumulator

use crate::mult::Multiplier;
use serde::{Deserialize, Serialize};

/// A stat resolved as `floor(base × clamp(mult))`
///
/// - `base`: the template value plus any flat additions
/// - `mult`: multiplier accumulator centered on 1.0; bonuses stack
///   additively through [`ScaledStat::add_mult`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaledStat {
    #[serde(default)]
    pub base: f64,
    #[serde(default = "one")]
    pub mult: f64,
}

fn one() -> f64 {
    1.0
}

impl Default for ScaledStat {
    fn default() -> Self {
        ScaledStat { base: 0.0, mult: 1.0 }
    }
}

impl ScaledStat {
    /// Create a stat with the given base and a neutral multiplier
    pub fn with_base(base: f64) -> Self {
        ScaledStat { base, mult: 1.0 }
    }

    /// `floor(base × clamp(mult))`
    pub fn value(&self) -> f64 {
        (self.base * self.mult.clamped()).floor()
    }

    /// Add a flat amount to the base
    pub fn add_flat(&mut self, value: f64) {
        self.base += value;
    }

    /// Stack a multiplier onto the accumulator
    pub fn add_mult(&mut self, mult: f64) {
        self.mult = self.mult.add_mult(mult);
    }
}
