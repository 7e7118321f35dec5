//! Inputs to hit resolution

use crate::profile::CombatantProfile;
use crate::types::TilePos;
use serde::{Deserialize, Serialize};

/// Targeting properties of the action being used
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionProfile {
    /// Skip all computation and hit with certainty
    #[serde(default)]
    pub always_hits: bool,
    /// Add the accuracy dropoff term for distance from the ideal range
    #[serde(default = "default_true")]
    pub apply_distance_penalty: bool,
    /// Range in tiles at which the action suffers no dropoff
    #[serde(default)]
    pub ideal_range: i32,
    /// Ignore cover everywhere
    #[serde(default)]
    pub ignores_cover: bool,
    /// Ignore cover only when the target is inside a building or vehicle
    #[serde(default)]
    pub ignores_cover_inside: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ActionProfile {
    fn default() -> Self {
        ActionProfile {
            always_hits: false,
            apply_distance_penalty: true,
            ideal_range: 0,
            ignores_cover: false,
            ignores_cover_inside: false,
        }
    }
}

impl ActionProfile {
    /// An action with the given ideal range and default behaviour otherwise
    pub fn with_ideal_range(ideal_range: i32) -> Self {
        ActionProfile {
            ideal_range,
            ..Default::default()
        }
    }
}

/// Everything hit resolution reads for one attack
#[derive(Debug, Clone, Copy)]
pub struct HitChanceRequest<'a> {
    pub attacker: &'a CombatantProfile,
    /// Absent when targeting an empty tile
    pub defender: Option<&'a CombatantProfile>,
    pub source: TilePos,
    pub target: TilePos,
    /// Target is contained (inside a structure or vehicle)
    pub target_contained: bool,
    pub action: &'a ActionProfile,
}

impl<'a> HitChanceRequest<'a> {
    pub fn new(
        attacker: &'a CombatantProfile,
        action: &'a ActionProfile,
        source: TilePos,
        target: TilePos,
    ) -> Self {
        HitChanceRequest {
            attacker,
            defender: None,
            source,
            target,
            target_contained: false,
            action,
        }
    }

    pub fn against(mut self, defender: &'a CombatantProfile) -> Self {
        self.defender = Some(defender);
        self
    }

    pub fn contained(mut self, contained: bool) -> Self {
        self.target_contained = contained;
        self
    }
}
