//! Suppression and morale - threshold states over two accumulators
//!
//! Neither state is ever stored. Both are recomputed from the current
//! accumulator value on every query, so they cannot drift out of sync.

mod change;
mod state;
mod suppression;

pub use change::{change_morale, MoraleChange};
pub use state::{morale_state, suppression_state, MoraleState, SuppressionState};
pub use suppression::{
    apply_suppression, change_suppression_and_update_ap, set_suppression, SuppressionChange,
    SuppressionHit,
};

/// Upper bound of the suppression accumulator
pub const MAX_SUPPRESSION: f64 = 100.0;
