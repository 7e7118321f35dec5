//! Attack pipeline - hit, roll, damage and suppression in one call

mod resolution;
mod result;

pub use resolution::{Attack, CombatEngine};
pub use result::AttackOutcome;
