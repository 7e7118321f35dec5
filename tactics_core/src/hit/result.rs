//! HitChanceResult - Outcome and breakdown of hit resolution

use super::MAX_HIT_CHANCE;
use crate::types::CoverLevel;
use serde::{Deserialize, Serialize};

/// Final hit chance plus every factor that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitChanceResult {
    /// Final chance in 0..=100
    pub hit_chance: f64,
    /// Attacker accuracy used as the base
    pub accuracy: f64,
    pub cover_mult: f64,
    pub dodge_mult: f64,
    pub distance_penalty_applied: bool,
    pub distance_penalty: f64,
    /// Tile distance between attacker and target (never negative)
    pub distance: i32,
    /// Cover level consulted, if cover was evaluated
    pub cover_level: Option<CoverLevel>,
    /// The action's always-hit override decided the result
    pub always_hits: bool,
    /// The result was raised to the attacker's minimum hit chance
    pub raised_to_floor: bool,
}

impl HitChanceResult {
    /// Result for an action that cannot miss
    pub fn always_hits() -> Self {
        HitChanceResult {
            hit_chance: MAX_HIT_CHANCE,
            accuracy: 0.0,
            cover_mult: 1.0,
            dodge_mult: 1.0,
            distance_penalty_applied: false,
            distance_penalty: 0.0,
            distance: 0,
            cover_level: None,
            always_hits: true,
            raised_to_floor: false,
        }
    }

    /// Hit chance as a 0..=1 probability
    pub fn probability(&self) -> f64 {
        self.hit_chance / MAX_HIT_CHANCE
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        if self.always_hits {
            return "100% (always hits)".to_string();
        }

        let mut parts = vec![format!("{:.0}% to hit", self.hit_chance)];
        parts.push(format!("accuracy {:.0}", self.accuracy));

        if (self.cover_mult - 1.0).abs() > f64::EPSILON {
            match self.cover_level {
                Some(level) => parts.push(format!("cover {:?} x{:.2}", level, self.cover_mult)),
                None => parts.push(format!("cover x{:.2}", self.cover_mult)),
            }
        }
        if (self.dodge_mult - 1.0).abs() > f64::EPSILON {
            parts.push(format!("dodge x{:.2}", self.dodge_mult));
        }
        if self.distance_penalty_applied && self.distance_penalty != 0.0 {
            parts.push(format!(
                "range {:+.0} at {} tiles",
                self.distance_penalty, self.distance
            ));
        }
        if self.raised_to_floor {
            parts.push("minimum chance".to_string());
        }

        parts.join(", ")
    }
}
