//! Prelude module for convenient imports
//!
//! ```rust
//! use tactics_core::prelude::*;
//! ```

// Core types
pub use crate::combatant::CombatantState;
pub use crate::mult::Multiplier;
pub use crate::profile::{ArmorZones, CombatantProfile, ProfileStat, ScaledStat, StatModifier};
pub use crate::types::{CombatantId, CoverLevel, Direction, Faction, TilePos};

// Resolution
pub use crate::combat::{Attack, AttackOutcome, CombatEngine};
pub use crate::damage::{AttackProfile, DamageInfo, DamageResolver, DamageResult};
pub use crate::hit::{ActionProfile, HitChanceRequest, HitChanceResult};
pub use crate::morale::{MoraleState, SuppressionHit, SuppressionState};

// Collaborators
pub use crate::events::{CombatHooks, NoHooks, RecordingHooks, TracingHooks};
pub use crate::map::{GridMap, TacticalMap};

// Sources
pub use crate::source::{ModifierSource, ProfileBuilder, ProfileSource, SourceKind, TemplateSource, UnitTemplate};

// Config
pub use crate::config::{default_constants, CombatConstants};
