//! Derived suppression and morale states

use super::MAX_SUPPRESSION;
use crate::config::{MoraleConstants, SuppressionConstants};
use serde::{Deserialize, Serialize};

/// Psychological pressure from incoming fire
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuppressionState {
    None,
    Suppressed,
    PinnedDown,
}

impl SuppressionState {
    pub fn is_suppressed(self) -> bool {
        self != SuppressionState::None
    }
}

/// Willingness to keep fighting, ordered from worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoraleState {
    Fleeing = 0,
    Wavering = 1,
    Neutral = 2,
}

impl MoraleState {
    pub fn ordinal(self) -> i32 {
        self as i32
    }

    /// State for an ordinal, clamped into Fleeing..=Neutral
    pub fn from_ordinal(ordinal: i32) -> MoraleState {
        match ordinal {
            i32::MIN..=0 => MoraleState::Fleeing,
            1 => MoraleState::Wavering,
            _ => MoraleState::Neutral,
        }
    }

    /// Shift by `steps` ordinals, staying inside the valid range
    pub fn shifted(self, steps: i32) -> MoraleState {
        MoraleState::from_ordinal(self.ordinal().saturating_add(steps))
    }
}

/// Suppression state for an accumulator value in 0..=100
///
/// Thresholds are inclusive: exactly 50 is suppressed, exactly 80 pinned.
pub fn suppression_state(suppression: f64, constants: &SuppressionConstants) -> SuppressionState {
    let pct = suppression / MAX_SUPPRESSION;
    if pct >= constants.pinned_threshold {
        SuppressionState::PinnedDown
    } else if pct >= constants.suppressed_threshold {
        SuppressionState::Suppressed
    } else {
        SuppressionState::None
    }
}

/// Morale state for the current morale against its maximum
///
/// A unit under the player's direct control never drops to fleeing on its
/// own; its base state floors at neutral. The profile's state modifier is
/// applied afterwards. A non-positive maximum always reads as neutral.
pub fn morale_state(
    morale: f64,
    morale_max: f64,
    state_modifier: i32,
    directly_controlled: bool,
    constants: &MoraleConstants,
) -> MoraleState {
    if morale_max <= 0.0 || morale_max.is_nan() {
        return MoraleState::Neutral;
    }

    let pct = morale / morale_max;
    let base = if pct <= 0.0 {
        if directly_controlled {
            MoraleState::Neutral
        } else {
            MoraleState::Fleeing
        }
    } else if pct <= constants.wavering_threshold {
        MoraleState::Wavering
    } else {
        MoraleState::Neutral
    };

    base.shifted(state_modifier)
}
