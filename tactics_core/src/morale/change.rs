//! Morale changes and state queries on a combatant

use super::{morale_state, suppression_state, MoraleState, SuppressionState};
use crate::combatant::CombatantState;
use crate::config::CombatConstants;
use crate::profile::CombatantProfile;

/// Before/after view of one morale change
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoraleChange {
    pub old: f64,
    pub new: f64,
}

/// Change morale by `delta`, clamped into 0..=morale max
pub fn change_morale(
    state: &mut CombatantState,
    profile: &CombatantProfile,
    delta: f64,
) -> MoraleChange {
    let old = state.morale;
    let max = profile.get_morale_max().max(0.0);
    let target = old + delta;
    if !target.is_nan() {
        state.morale = target.clamp(0.0, max);
    }
    MoraleChange {
        old,
        new: state.morale,
    }
}

impl CombatantState {
    /// Current suppression state
    pub fn suppression_state(&self, constants: &CombatConstants) -> SuppressionState {
        suppression_state(self.suppression, &constants.suppression)
    }

    /// Current morale state
    ///
    /// `selected_by_player` marks the unit the player is actively
    /// controlling; it only matters for player-faction units.
    pub fn morale_state(
        &self,
        profile: &CombatantProfile,
        selected_by_player: bool,
        constants: &CombatConstants,
    ) -> MoraleState {
        morale_state(
            self.morale,
            profile.get_morale_max(),
            profile.morale_state_modifier,
            self.is_player_unit() && selected_by_player,
            &constants.morale,
        )
    }
}
