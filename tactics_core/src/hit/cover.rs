//! Cover multiplier for an attack against a defender

use super::HitChanceRequest;
use crate::config::CombatConstants;
use crate::map::TacticalMap;
use crate::mult::Multiplier;
use crate::types::CoverLevel;

/// Hit-chance multiplier contributed by the defender's cover
///
/// Returns the multiplier and the cover level that was consulted, if any.
/// Cover is neutral (1.0) when there is no defender, when the action
/// ignores cover, or when the distance is inside `hit.close_range`.
pub fn cover_multiplier(
    request: &HitChanceRequest<'_>,
    distance: i32,
    map: &dyn TacticalMap,
    constants: &CombatConstants,
) -> (f64, Option<CoverLevel>) {
    let Some(defender) = request.defender else {
        return (1.0, None);
    };

    let action = request.action;
    if action.ignores_cover || (action.ignores_cover_inside && request.target_contained) {
        return (1.0, None);
    }

    if distance < constants.hit.close_range {
        return (1.0, None);
    }

    // Fire arrives from the attacker's side of the defender's tile
    let direction = map.direction_from(request.target, request.source);
    let level = map.cover_level_in_direction(request.target, direction);

    let usage = defender.cover_usage.clamped();
    let value = if usage > 0.0 {
        (constants.cover.value(level) / usage).min(1.0)
    } else {
        // unit cannot use cover at all
        1.0
    };

    (1.0_f64.add_mult(value), Some(level))
}
