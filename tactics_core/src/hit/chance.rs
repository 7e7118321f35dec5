//! Hit chance computation

use super::{cover_multiplier, HitChanceRequest, HitChanceResult, MAX_HIT_CHANCE};
use crate::config::CombatConstants;
use crate::map::TacticalMap;
use crate::mult::Multiplier;

/// Compute the chance (0..=100) for an attack to hit
///
/// `accuracy × clamp(cover) × clamp(dodge)`, plus the range term when the
/// action uses distance dropoff, clamped to 0..=100 and then raised to the
/// attacker's minimum hit chance. No randomness is involved; rolling
/// against the result is up to the caller (see [`roll_hit`](super::roll_hit)).
pub fn compute_hit_chance(
    request: &HitChanceRequest<'_>,
    map: &dyn TacticalMap,
    constants: &CombatConstants,
) -> HitChanceResult {
    let action = request.action;
    if action.always_hits {
        return HitChanceResult::always_hits();
    }

    let attacker = request.attacker;
    let distance = map.distance_between(request.source, request.target).max(0);

    let accuracy = attacker.get_accuracy();
    let dodge_mult = match request.defender {
        Some(defender) => defender.dodge.clamped().flipped(),
        None => 1.0,
    };
    let (cover_mult, cover_level) = cover_multiplier(request, distance, map, constants);

    let scaled = accuracy * cover_mult.clamped() * dodge_mult.clamped();
    let (raw, distance_penalty) = if action.apply_distance_penalty {
        let off_range = (distance - action.ideal_range.max(0)).abs() as f64;
        let penalty = off_range * attacker.get_accuracy_dropoff();
        (scaled + penalty, penalty)
    } else {
        (scaled, 0.0)
    };

    let mut hit_chance = if raw.is_nan() {
        0.0
    } else {
        raw.clamp(0.0, MAX_HIT_CHANCE)
    };

    let floor = attacker
        .min_hit_chance
        .max(constants.hit.min_hit_chance)
        .clamp(0.0, MAX_HIT_CHANCE);
    let raised_to_floor = hit_chance < floor;
    if raised_to_floor {
        hit_chance = floor;
    }

    let result = HitChanceResult {
        hit_chance,
        accuracy,
        cover_mult,
        dodge_mult,
        distance_penalty_applied: action.apply_distance_penalty,
        distance_penalty,
        distance,
        cover_level,
        always_hits: false,
        raised_to_floor,
    };

    tracing::debug!(
        hit_chance,
        accuracy,
        cover_mult,
        dodge_mult,
        distance,
        distance_penalty,
        raised_to_floor,
        "resolved hit chance"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hit::ActionProfile;
    use crate::map::GridMap;
    use crate::profile::{CombatantProfile, ScaledStat};
    use crate::types::{CoverLevel, Direction, TilePos};

    const EPS: f64 = 1e-9;

    fn attacker(accuracy: f64) -> CombatantProfile {
        let mut profile = CombatantProfile::new();
        profile.accuracy = ScaledStat::with_base(accuracy);
        profile
    }

    fn no_dropoff() -> ActionProfile {
        ActionProfile {
            apply_distance_penalty: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_plain_accuracy() {
        let map = GridMap::new();
        let attacker = attacker(80.0);
        let defender = CombatantProfile::new();
        let action = no_dropoff();
        let request = HitChanceRequest::new(&attacker, &action, TilePos::new(0, 0), TilePos::new(5, 0))
            .against(&defender);

        let result = compute_hit_chance(&request, &map, &CombatConstants::default());
        assert_eq!(result.hit_chance, 80.0);
        assert!(!result.distance_penalty_applied);
        assert_eq!(result.distance, 5);
    }

    #[test]
    fn test_always_hits_ignores_everything() {
        let target = TilePos::new(8, 0);
        let map = GridMap::new().with_cover(target, Direction::West, CoverLevel::Heavy);
        let attacker = attacker(5.0);
        let mut defender = CombatantProfile::new();
        defender.dodge = 1.9;
        let action = ActionProfile {
            always_hits: true,
            ideal_range: 1,
            ..Default::default()
        };
        let request = HitChanceRequest::new(&attacker, &action, TilePos::new(0, 0), target)
            .against(&defender);

        let result = compute_hit_chance(&request, &map, &CombatConstants::default());
        assert_eq!(result.hit_chance, 100.0);
        assert!(result.always_hits);
    }

    #[test]
    fn test_dodge_reduces_chance() {
        let map = GridMap::new();
        let attacker = attacker(80.0);
        let mut defender = CombatantProfile::new();
        defender.dodge = 1.25;
        let action = no_dropoff();
        let request = HitChanceRequest::new(&attacker, &action, TilePos::new(0, 0), TilePos::new(4, 0))
            .against(&defender);

        let result = compute_hit_chance(&request, &map, &CombatConstants::default());
        assert!((result.dodge_mult - 0.75).abs() < EPS);
        assert!((result.hit_chance - 60.0).abs() < EPS);
    }

    #[test]
    fn test_huge_dodge_clamps_to_zero() {
        let map = GridMap::new();
        let attacker = attacker(80.0);
        let mut defender = CombatantProfile::new();
        defender.dodge = 3.0;
        let action = no_dropoff();
        let request = HitChanceRequest::new(&attacker, &action, TilePos::new(0, 0), TilePos::new(4, 0))
            .against(&defender);

        let result = compute_hit_chance(&request, &map, &CombatConstants::default());
        assert_eq!(result.hit_chance, 0.0);
    }

    #[test]
    fn test_distance_penalty() {
        let map = GridMap::new();
        let mut attacker = attacker(70.0);
        attacker.accuracy_dropoff = ScaledStat::with_base(-4.0);
        let action = ActionProfile::with_ideal_range(3);
        let request = HitChanceRequest::new(&attacker, &action, TilePos::new(0, 0), TilePos::new(8, 0));

        let result = compute_hit_chance(&request, &map, &CombatConstants::default());
        // |8 - 3| * -4 = -20
        assert!(result.distance_penalty_applied);
        assert!((result.distance_penalty + 20.0).abs() < EPS);
        assert!((result.hit_chance - 50.0).abs() < EPS);
    }

    #[test]
    fn test_distance_penalty_symmetric_inside_ideal_range() {
        let map = GridMap::new();
        let mut attacker = attacker(70.0);
        attacker.accuracy_dropoff = ScaledStat::with_base(-4.0);
        let action = ActionProfile::with_ideal_range(6);
        let request = HitChanceRequest::new(&attacker, &action, TilePos::new(0, 0), TilePos::new(2, 0));

        let result = compute_hit_chance(&request, &map, &CombatConstants::default());
        assert!((result.hit_chance - 54.0).abs() < EPS);
    }

    #[test]
    fn test_clamped_to_hundred() {
        let map = GridMap::new();
        let attacker = attacker(250.0);
        let action = no_dropoff();
        let request = HitChanceRequest::new(&attacker, &action, TilePos::new(0, 0), TilePos::new(3, 0));

        let result = compute_hit_chance(&request, &map, &CombatConstants::default());
        assert_eq!(result.hit_chance, 100.0);
    }

    #[test]
    fn test_minimum_hit_chance_floor() {
        let map = GridMap::new();
        let mut attacker = attacker(30.0);
        attacker.accuracy_dropoff = ScaledStat::with_base(-10.0);
        attacker.min_hit_chance = 15.0;
        let action = ActionProfile::with_ideal_range(1);
        let request = HitChanceRequest::new(&attacker, &action, TilePos::new(0, 0), TilePos::new(9, 0));

        let result = compute_hit_chance(&request, &map, &CombatConstants::default());
        assert_eq!(result.hit_chance, 15.0);
        assert!(result.raised_to_floor);
    }

    #[test]
    fn test_cover_applies_at_range() {
        let target = TilePos::new(6, 0);
        let map = GridMap::new().with_cover(target, Direction::West, CoverLevel::Medium);
        let attacker = attacker(80.0);
        let defender = CombatantProfile::new();
        let action = no_dropoff();
        let constants = CombatConstants::default();
        let request = HitChanceRequest::new(&attacker, &action, TilePos::new(0, 0), target)
            .against(&defender);

        let result = compute_hit_chance(&request, &map, &constants);
        assert_eq!(result.cover_level, Some(CoverLevel::Medium));
        assert!((result.hit_chance - 80.0 * constants.cover.medium).abs() < EPS);
    }

    #[test]
    fn test_adjacent_target_ignores_cover() {
        let target = TilePos::new(1, 0);
        let map = GridMap::new().with_cover(target, Direction::West, CoverLevel::Heavy);
        let attacker = attacker(80.0);
        let defender = CombatantProfile::new();
        let action = no_dropoff();
        let request = HitChanceRequest::new(&attacker, &action, TilePos::new(0, 0), target)
            .against(&defender);

        let result = compute_hit_chance(&request, &map, &CombatConstants::default());
        assert!((result.cover_mult - 1.0).abs() < EPS);
        assert_eq!(result.hit_chance, 80.0);
    }
}
