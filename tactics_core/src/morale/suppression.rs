//! Suppression mutation rules

use super::{suppression_state, SuppressionState, MAX_SUPPRESSION};
use crate::combatant::CombatantState;
use crate::config::SuppressionConstants;
use crate::events::CombatHooks;
use crate::mult::Multiplier;
use crate::profile::CombatantProfile;
use crate::types::CombatantId;

/// Incoming suppression from one source
#[derive(Debug, Clone, Copy)]
pub struct SuppressionHit<'a> {
    /// Positive applies suppression, zero or negative relieves it
    pub raw: f64,
    /// Fired at this unit, as opposed to splash or nearby fire
    pub is_direct: bool,
    pub source: Option<&'a CombatantId>,
}

impl<'a> SuppressionHit<'a> {
    pub fn direct(raw: f64) -> Self {
        SuppressionHit {
            raw,
            is_direct: true,
            source: None,
        }
    }

    pub fn indirect(raw: f64) -> Self {
        SuppressionHit {
            raw,
            is_direct: false,
            source: None,
        }
    }

    pub fn from_source(mut self, source: &'a CombatantId) -> Self {
        self.source = Some(source);
        self
    }
}

/// Before/after view of one suppression change
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuppressionChange {
    pub old: f64,
    pub new: f64,
    /// Delta computed before clamping
    pub requested_delta: f64,
    pub state_before: SuppressionState,
    pub state_after: SuppressionState,
}

impl SuppressionChange {
    fn unchanged(value: f64, constants: &SuppressionConstants) -> Self {
        let state = suppression_state(value, constants);
        SuppressionChange {
            old: value,
            new: value,
            requested_delta: 0.0,
            state_before: state,
            state_after: state,
        }
    }

    /// Change actually applied after clamping
    pub fn applied_delta(&self) -> f64 {
        self.new - self.old
    }

    pub fn state_changed(&self) -> bool {
        self.state_before != self.state_after
    }
}

/// Set suppression, clamped into 0..=100
///
/// A NaN value leaves the accumulator untouched.
pub fn set_suppression(state: &mut CombatantState, value: f64) {
    if value.is_nan() {
        tracing::trace!(unit = %state.id, "ignoring NaN suppression");
        return;
    }
    state.suppression = value.clamp(0.0, MAX_SUPPRESSION);
}

/// Change suppression by `delta` and report a state transition, if any
///
/// The action-point collaborator is notified through
/// [`CombatHooks::on_suppression_state_changed`] only when the derived
/// state actually changes.
pub fn change_suppression_and_update_ap(
    state: &mut CombatantState,
    delta: f64,
    constants: &SuppressionConstants,
    hooks: &mut dyn CombatHooks,
) -> SuppressionChange {
    let old = state.suppression;
    let state_before = suppression_state(old, constants);

    set_suppression(state, old + delta);

    let new = state.suppression;
    let state_after = suppression_state(new, constants);
    if state_before != state_after {
        hooks.on_suppression_state_changed(&state.id, state_before, state_after);
    }

    SuppressionChange {
        old,
        new,
        requested_delta: delta,
        state_before,
        state_after,
    }
}

/// Apply incoming suppression to a combatant
///
/// Positive values are scaled by tile cover, discipline and the profile's
/// suppression multiplier. Zero or negative values only see the tile
/// resistance, which is neutral for them, so relief always applies in full.
/// Emits `on_suppression_applied` when suppression actually rose.
pub fn apply_suppression(
    state: &mut CombatantState,
    profile: &CombatantProfile,
    hit: &SuppressionHit<'_>,
    target_in_cover: bool,
    constants: &SuppressionConstants,
    hooks: &mut dyn CombatHooks,
) -> SuppressionChange {
    if profile.ignores_suppression {
        tracing::trace!(unit = %state.id, "immune to suppression");
        return SuppressionChange::unchanged(state.suppression, constants);
    }
    if !hit.is_direct && profile.ignores_indirect_suppression {
        tracing::trace!(unit = %state.id, "immune to indirect suppression");
        return SuppressionChange::unchanged(state.suppression, constants);
    }

    let raw = hit.raw;
    let mut resistance = 1.0_f64;
    if raw > 0.0 && target_in_cover {
        resistance = resistance.add_mult(constants.tile_cover_resist);
    }

    let delta = if raw > 0.0 {
        let discipline_mult = (1.0 - profile.discipline * constants.discipline_factor).max(0.0);
        resistance.clamped() * raw * discipline_mult * profile.suppression_resist.clamped()
    } else {
        resistance.clamped() * raw
    };

    let change = change_suppression_and_update_ap(state, delta, constants, hooks);
    if change.new > change.old {
        hooks.on_suppression_applied(&state.id, change.applied_delta(), hit.source);
    }

    tracing::trace!(
        unit = %state.id,
        raw,
        delta,
        old = change.old,
        new = change.new,
        "suppression resolved"
    );
    change
}
