//! CombatantState - the mutable accumulators owned by one combatant

use crate::profile::CombatantProfile;
use crate::types::{CombatantId, Faction};
use serde::{Deserialize, Serialize};

/// Mutable per-combatant state
///
/// Owned by exactly one combatant and mutated only by the turn engine
/// through the resolution functions. Suppression and morale are kept
/// private so their bounds hold; use the functions in [`crate::morale`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantState {
    pub id: CombatantId,
    pub faction: Faction,
    pub(crate) suppression: f64,
    pub(crate) morale: f64,
    pub armor_durability: f64,
    /// May go negative; death handling belongs to the caller
    pub health: f64,
}

impl CombatantState {
    /// Fresh state with every accumulator at zero
    ///
    /// Morale starts at 0, which reads as fleeing against any profile with
    /// a positive morale max. Use [`CombatantState::for_profile`] or
    /// [`CombatantState::with_morale`] for a unit entering combat.
    pub fn new(id: impl Into<CombatantId>, faction: Faction) -> Self {
        CombatantState {
            id: id.into(),
            faction,
            suppression: 0.0,
            morale: 0.0,
            armor_durability: 0.0,
            health: 0.0,
        }
    }

    /// Fresh state with morale full for `profile`
    pub fn for_profile(id: impl Into<CombatantId>, faction: Faction, profile: &CombatantProfile) -> Self {
        Self::new(id, faction).with_morale(profile.get_morale_max())
    }

    pub fn with_health(mut self, health: f64) -> Self {
        self.health = health;
        self
    }

    pub fn with_armor_durability(mut self, durability: f64) -> Self {
        self.armor_durability = durability.max(0.0);
        self
    }

    /// Start with morale at `morale` (clamped at zero; the upper bound is
    /// enforced on the first morale change)
    pub fn with_morale(mut self, morale: f64) -> Self {
        self.morale = morale.max(0.0);
        self
    }

    /// Current suppression in 0..=100
    pub fn suppression(&self) -> f64 {
        self.suppression
    }

    /// Current morale in 0..=morale max
    pub fn morale(&self) -> f64 {
        self.morale
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    pub fn is_player_unit(&self) -> bool {
        self.faction == Faction::Player
    }
}
