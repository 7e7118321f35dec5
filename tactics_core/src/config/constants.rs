//! Tunable combat constants

use super::ConfigError;
use crate::types::CoverLevel;
use serde::{Deserialize, Serialize};

/// Tunable combat constants
///
/// Every section and field has a default, so a config file only needs to
/// name the values it changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombatConstants {
    #[serde(default)]
    pub hit: HitConstants,
    #[serde(default)]
    pub cover: CoverTable,
    #[serde(default)]
    pub suppression: SuppressionConstants,
    #[serde(default)]
    pub morale: MoraleConstants,
}

impl CombatConstants {
    /// Check cross-field consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fail = |msg: String| {
            tracing::warn!(%msg, "invalid combat constants");
            Err(ConfigError::ValidationError(msg))
        };

        if !(0.0..=100.0).contains(&self.hit.min_hit_chance) {
            return fail(format!(
                "hit.min_hit_chance must be within 0..=100, got {}",
                self.hit.min_hit_chance
            ));
        }
        if self.hit.close_range < 0 {
            return fail(format!(
                "hit.close_range must not be negative, got {}",
                self.hit.close_range
            ));
        }
        for (level, value) in self.cover.entries() {
            if value < 0.0 {
                return fail(format!("cover.{level:?} must not be negative, got {value}"));
            }
        }
        let s = &self.suppression;
        if !(0.0..=1.0).contains(&s.suppressed_threshold)
            || !(0.0..=1.0).contains(&s.pinned_threshold)
        {
            return fail("suppression thresholds must be within 0..=1".to_string());
        }
        if s.suppressed_threshold > s.pinned_threshold {
            return fail(format!(
                "suppression.suppressed_threshold ({}) exceeds pinned_threshold ({})",
                s.suppressed_threshold, s.pinned_threshold
            ));
        }
        if !(0.0..=1.0).contains(&self.morale.wavering_threshold) {
            return fail(format!(
                "morale.wavering_threshold must be within 0..=1, got {}",
                self.morale.wavering_threshold
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitConstants {
    /// Global floor applied to every hit chance, before the attacker's own floor
    #[serde(default)]
    pub min_hit_chance: f64,
    /// Below this tile distance cover is ignored
    #[serde(default = "default_close_range")]
    pub close_range: i32,
}

impl Default for HitConstants {
    fn default() -> Self {
        HitConstants {
            min_hit_chance: 0.0,
            close_range: default_close_range(),
        }
    }
}

fn default_close_range() -> i32 {
    2
}

/// Hit-chance multiplier per discrete cover level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverTable {
    #[serde(default = "default_cover_none")]
    pub none: f64,
    #[serde(default = "default_cover_light")]
    pub light: f64,
    #[serde(default = "default_cover_medium")]
    pub medium: f64,
    #[serde(default = "default_cover_heavy")]
    pub heavy: f64,
}

impl CoverTable {
    pub fn value(&self, level: CoverLevel) -> f64 {
        match level {
            CoverLevel::None => self.none,
            CoverLevel::Light => self.light,
            CoverLevel::Medium => self.medium,
            CoverLevel::Heavy => self.heavy,
        }
    }

    fn entries(&self) -> [(CoverLevel, f64); 4] {
        [
            (CoverLevel::None, self.none),
            (CoverLevel::Light, self.light),
            (CoverLevel::Medium, self.medium),
            (CoverLevel::Heavy, self.heavy),
        ]
    }
}

impl Default for CoverTable {
    fn default() -> Self {
        CoverTable {
            none: default_cover_none(),
            light: default_cover_light(),
            medium: default_cover_medium(),
            heavy: default_cover_heavy(),
        }
    }
}

fn default_cover_none() -> f64 {
    1.0
}
fn default_cover_light() -> f64 {
    0.85
}
fn default_cover_medium() -> f64 {
    0.7
}
fn default_cover_heavy() -> f64 {
    0.5
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuppressionConstants {
    /// Fraction of maximum suppression at which a unit counts as suppressed (inclusive)
    #[serde(default = "default_suppressed_threshold")]
    pub suppressed_threshold: f64,
    /// Fraction of max at which a unit is pinned down (inclusive)
    #[serde(default = "default_pinned_threshold")]
    pub pinned_threshold: f64,
    /// Suppression reduction per point of discipline
    #[serde(default = "default_discipline_factor")]
    pub discipline_factor: f64,
    /// Multiplier stacked onto incoming suppression while standing in cover
    #[serde(default = "default_tile_cover_resist")]
    pub tile_cover_resist: f64,
}

impl Default for SuppressionConstants {
    fn default() -> Self {
        SuppressionConstants {
            suppressed_threshold: default_suppressed_threshold(),
            pinned_threshold: default_pinned_threshold(),
            discipline_factor: default_discipline_factor(),
            tile_cover_resist: default_tile_cover_resist(),
        }
    }
}

fn default_suppressed_threshold() -> f64 {
    0.5
}
fn default_pinned_threshold() -> f64 {
    0.8
}
fn default_discipline_factor() -> f64 {
    0.01
}
fn default_tile_cover_resist() -> f64 {
    0.75
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoraleConstants {
    /// Morale fraction at or below which a unit wavers
    #[serde(default = "default_wavering_threshold")]
    pub wavering_threshold: f64,
}

impl Default for MoraleConstants {
    fn default() -> Self {
        MoraleConstants {
            wavering_threshold: default_wavering_threshold(),
        }
    }
}

fn default_wavering_threshold() -> f64 {
    0.5
}
