//! tactics_core - Combat resolution for turn-based tactical games
//!
//! This library provides:
//! - Multiplier algebra: additive stacking of multiplicative modifiers
//! - CombatantProfile: per-attack stat aggregate built from sources
//! - Hit resolution: chance to hit from accuracy, cover, dodge and range
//! - Damage resolution: damage packets applied against armor
//! - Suppression and morale: threshold states over two accumulators
//!
//! Everything here is synchronous and deterministic. Randomness only enters
//! through the caller-side hit roll.

pub mod combat;
pub mod combatant;
pub mod config;
pub mod damage;
pub mod events;
pub mod hit;
pub mod map;
pub mod morale;
pub mod mult;
pub mod prelude;
pub mod profile;
pub mod source;
pub mod types;

// Re-export core types for convenience
pub use combat::{Attack, AttackOutcome, CombatEngine};
pub use combatant::CombatantState;
pub use config::{CombatConstants, ConfigError};
pub use damage::{apply_damage, calculate_damage, AttackProfile, DamageInfo, DamageResolver, DamageResult};
pub use events::{CombatEvent, CombatHooks, NoHooks, RecordingHooks, TracingHooks};
pub use hit::{compute_hit_chance, roll_hit, ActionProfile, HitChanceRequest, HitChanceResult, HitRoll};
pub use map::{GridMap, TacticalMap};
pub use morale::{
    apply_suppression, change_morale, change_suppression_and_update_ap, morale_state, set_suppression,
    suppression_state, MoraleState, SuppressionState,
};
pub use mult::Multiplier;
pub use profile::{CombatantProfile, ScaledStat};
pub use source::{ModifierSource, ProfileBuilder, ProfileSource, TemplateSource};
pub use types::{CombatantId, CoverLevel, Direction, Faction, TilePos};
