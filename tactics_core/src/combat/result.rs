//! AttackOutcome - everything one resolved attack produced

use crate::damage::DamageResult;
use crate::hit::{HitChanceResult, HitRoll};
use crate::morale::SuppressionChange;

/// Result of running one attack through the pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct AttackOutcome {
    /// Hit chance breakdown
    pub hit_chance: HitChanceResult,
    /// The roll made against `hit_chance`
    pub roll: HitRoll,
    /// Present only when the attack hit
    pub damage: Option<DamageResult>,
    /// Suppression landed on the target, hit or miss
    pub suppression: SuppressionChange,
}

impl AttackOutcome {
    pub fn is_hit(&self) -> bool {
        self.roll.hit
    }

    /// Health removed from the target
    pub fn applied_damage(&self) -> f64 {
        self.damage.as_ref().map_or(0.0, |d| d.applied_damage)
    }

    pub fn is_killing_blow(&self) -> bool {
        self.damage.as_ref().is_some_and(|d| d.is_killing_blow)
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let mut parts = vec![format!(
            "{} ({:.0} vs {:.0}%)",
            if self.is_hit() { "HIT" } else { "MISS" },
            self.roll.roll,
            self.hit_chance.hit_chance
        )];

        if let Some(damage) = &self.damage {
            parts.push(damage.summary());
        }

        let delta = self.suppression.applied_delta();
        if delta > 0.0 {
            parts.push(format!("+{:.0} suppression", delta));
        }
        if self.suppression.state_changed() {
            parts.push(format!("now {:?}", self.suppression.state_after));
        }

        parts.join(", ")
    }
}
