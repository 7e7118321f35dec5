//! Notifications emitted during resolution
//!
//! The engine owns no log storage and no action-point pool. It reports what
//! happened through [`CombatHooks`] and leaves the rest to the turn engine.

use crate::damage::DamageInfo;
use crate::morale::SuppressionState;
use crate::types::CombatantId;
use serde::{Deserialize, Serialize};

/// Receiver for resolution notifications; every method defaults to a no-op
pub trait CombatHooks {
    /// Suppression on `unit` rose by `delta`
    fn on_suppression_applied(
        &mut self,
        _unit: &CombatantId,
        _delta: f64,
        _source: Option<&CombatantId>,
    ) {
    }

    /// A damage packet was applied to `target`
    fn on_damage_resolved(&mut self, _target: &CombatantId, _packet: &DamageInfo) {}

    /// The suppression state of `unit` changed; action points should be adjusted
    fn on_suppression_state_changed(
        &mut self,
        _unit: &CombatantId,
        _from: SuppressionState,
        _to: SuppressionState,
    ) {
    }
}

/// Discards every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl CombatHooks for NoHooks {}

/// Forwards notifications to `tracing` at info level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingHooks;

impl CombatHooks for TracingHooks {
    fn on_suppression_applied(&mut self, unit: &CombatantId, delta: f64, source: Option<&CombatantId>) {
        tracing::info!(
            unit = %unit,
            delta,
            source = source.map(|s| s.0.as_str()).unwrap_or("-"),
            "suppression applied"
        );
    }

    fn on_damage_resolved(&mut self, target: &CombatantId, packet: &DamageInfo) {
        tracing::info!(
            unit = %target,
            damage = packet.damage,
            armor_penetration = packet.armor_penetration,
            shots = packet.total_shots,
            absorbed_by_armor = packet.absorbed_by_armor,
            "damage resolved"
        );
    }

    fn on_suppression_state_changed(
        &mut self,
        unit: &CombatantId,
        from: SuppressionState,
        to: SuppressionState,
    ) {
        tracing::info!(unit = %unit, ?from, ?to, "suppression state changed");
    }
}

/// A recorded notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CombatEvent {
    SuppressionApplied {
        unit: CombatantId,
        delta: f64,
        source: Option<CombatantId>,
    },
    DamageResolved {
        target: CombatantId,
        packet: DamageInfo,
    },
    SuppressionStateChanged {
        unit: CombatantId,
        from: SuppressionState,
        to: SuppressionState,
    },
}

/// Keeps every notification in order, for tests and combat logs
#[derive(Debug, Clone, Default)]
pub struct RecordingHooks {
    pub events: Vec<CombatEvent>,
}

impl RecordingHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize the recorded events as a JSON array
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.events)
    }

    pub fn suppression_state_changes(&self) -> impl Iterator<Item = (SuppressionState, SuppressionState)> + '_ {
        self.events.iter().filter_map(|e| match e {
            CombatEvent::SuppressionStateChanged { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
    }
}

impl CombatHooks for RecordingHooks {
    fn on_suppression_applied(&mut self, unit: &CombatantId, delta: f64, source: Option<&CombatantId>) {
        self.events.push(CombatEvent::SuppressionApplied {
            unit: unit.clone(),
            delta,
            source: source.cloned(),
        });
    }

    fn on_damage_resolved(&mut self, target: &CombatantId, packet: &DamageInfo) {
        self.events.push(CombatEvent::DamageResolved {
            target: target.clone(),
            packet: packet.clone(),
        });
    }

    fn on_suppression_state_changed(
        &mut self,
        unit: &CombatantId,
        from: SuppressionState,
        to: SuppressionState,
    ) {
        self.events.push(CombatEvent::SuppressionStateChanged {
            unit: unit.clone(),
            from,
            to,
        });
    }
}
