//! End-to-end resolution tests
//!
//! Profiles are built through sources, attacks resolved against a grid map,
//! and the resulting states checked through the public API only.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tactics_core::config::{parse_toml, CombatConstants};
use tactics_core::damage::{apply_damage, calculate_damage, DistanceScaled};
use tactics_core::morale::SuppressionHit;
use tactics_core::mult::add_mult;
use tactics_core::prelude::*;
use tactics_core::profile::HighestZone;
use tactics_core::{apply_suppression, compute_hit_chance, suppression_state};

fn profile_with_accuracy(accuracy: f64) -> CombatantProfile {
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
fn test_additive_stacking_example() {
    let a = add_mult(add_mult(1.0, 1.2), 1.3);
    let b = add_mult(add_mult(1.0, 1.3), 1.2);
    assert!((a - 1.5).abs() < 1e-12);
    assert!((a - b).abs() < 1e-12);
}

#[test]
fn test_plain_accuracy_scenario() {
    let constants = CombatConstants::default();
    let attacker = profile_with_accuracy(80.0);
    let defender = CombatantProfile::new();
    let action = no_dropoff();
    let request = HitChanceRequest::new(&attacker, &action, TilePos::new(0, 0), TilePos::new(4, 3))
        .against(&defender);

    let result = compute_hit_chance(&request, &GridMap::new(), &constants);
    assert_eq!(result.hit_chance, 80.0);
}

#[test]
fn test_cover_reduces_hit_chance_at_range() {
    let constants = CombatConstants::default();
    let target = TilePos::new(6, 0);
    // attacker sits to the west of the target
    let map = GridMap::new().with_cover(target, Direction::West, CoverLevel::Heavy);
    let attacker = profile_with_accuracy(80.0);
    let defender = CombatantProfile::new();
    let action = no_dropoff();
    let request = HitChanceRequest::new(&attacker, &action, TilePos::new(0, 0), target).against(&defender);

    let result = compute_hit_chance(&request, &map, &constants);
    assert!((result.hit_chance - 40.0).abs() < 1e-9);
    assert_eq!(result.cover_level, Some(CoverLevel::Heavy));
}

#[test]
fn test_cover_ignored_at_close_range() {
    let constants = CombatConstants::default();
    let target = TilePos::new(1, 0);
    let mut map = GridMap::new();
    map.set_cover_all(target, CoverLevel::Heavy);
    let attacker = profile_with_accuracy(80.0);
    let defender = CombatantProfile::new();
    let action = no_dropoff();
    let request = HitChanceRequest::new(&attacker, &action, TilePos::new(0, 0), target).against(&defender);

    let result = compute_hit_chance(&request, &map, &constants);
    assert_eq!(result.cover_mult, 1.0);
    assert_eq!(result.hit_chance, 80.0);
}

#[test]
fn test_always_hits_regardless_of_inputs() {
    let constants = CombatConstants::default();
    let target = TilePos::new(12, 0);
    let mut map = GridMap::new();
    map.set_cover_all(target, CoverLevel::Heavy);
    let attacker = profile_with_accuracy(1.0);
    let mut defender = CombatantProfile::new();
    defender.dodge = 2.0;
    let action = ActionProfile {
        always_hits: true,
        ..Default::default()
    };
    let request = HitChanceRequest::new(&attacker, &action, TilePos::new(0, 0), target).against(&defender);

    assert_eq!(compute_hit_chance(&request, &map, &constants).hit_chance, 100.0);
}

#[test]
fn test_suppression_thresholds_inclusive() {
    let constants = CombatConstants::default();
    assert_eq!(suppression_state(50.0, &constants.suppression), SuppressionState::Suppressed);
    assert_eq!(suppression_state(49.99, &constants.suppression), SuppressionState::None);
    assert_eq!(suppression_state(80.0, &constants.suppression), SuppressionState::PinnedDown);
}

#[test]
fn test_direct_suppression_scenario() {
    let constants = CombatConstants::default();
    let profile = CombatantProfile::new();
    let mut state = CombatantState::new("rifleman", Faction::Enemy);
    let mut hooks = RecordingHooks::new();

    apply_suppression(
        &mut state,
        &profile,
        &SuppressionHit::direct(60.0),
        false,
        &constants.suppression,
        &mut hooks,
    );

    assert_eq!(state.suppression(), 60.0);
    assert_eq!(state.suppression_state(&constants), SuppressionState::Suppressed);
    let changes: Vec<_> = hooks.suppression_state_changes().collect();
    assert_eq!(changes, vec![(SuppressionState::None, SuppressionState::Suppressed)]);
}

#[test]
fn test_unarmored_damage_applies_in_full() {
    let attack = AttackProfile {
        base_damage: 3.0,
        min_damage: 10.0,
        damage_bonus: 1.0,
        armor_penetration: 5.0,
        ..Default::default()
    };
    let packet = calculate_damage(6, 2, &attack, &DistanceScaled);
    let damage = packet.damage;

    let defender = CombatantProfile::new();
    let mut state = CombatantState::new("scout", Faction::Enemy).with_health(50.0);
    let result = apply_damage(&mut state, &defender, packet, &HighestZone, &mut NoHooks);

    assert_eq!(result.applied_damage, damage);
    assert!(!result.packet.absorbed_by_armor);
    assert_eq!(state.health, 50.0 - damage);
}

#[test]
fn test_resolution_is_deterministic() {
    let constants = CombatConstants::default();
    let map = GridMap::new().with_cover(TilePos::new(5, 2), Direction::West, CoverLevel::Medium);
    let attacker = profile_with_accuracy(70.0);
    let mut defender = CombatantProfile::new();
    defender.dodge = 1.2;
    defender.armor.front = 4.0;
    let action = ActionProfile::with_ideal_range(3);
    let attack = AttackProfile {
        base_damage: 2.0,
        min_damage: 5.0,
        shots_per_element: 1.5,
        ..Default::default()
    };

    let run = || {
        let request = HitChanceRequest::new(&attacker, &action, TilePos::new(0, 2), TilePos::new(5, 2))
            .against(&defender);
        let hit = compute_hit_chance(&request, &map, &constants);
        let packet = calculate_damage(hit.distance, 3, &attack, &DistanceScaled);
        (hit, packet)
    };

    let (hit_a, packet_a) = run();
    let (hit_b, packet_b) = run();
    assert_eq!(hit_a.hit_chance.to_bits(), hit_b.hit_chance.to_bits());
    assert_eq!(hit_a, hit_b);
    assert_eq!(packet_a, packet_b);
}

#[test]
fn test_profile_from_template_and_gear() {
    let template = TemplateSource::from_toml(
        r#"
id = "line_infantry"
accuracy = 60
morale = 40
discipline = 20
"#,
    )
    .unwrap();
    let scope = ModifierSource::new("scope", SourceKind::Equipment)
        .with_modifier(StatModifier::mult(ProfileStat::Accuracy, 1.2));
    let drill = ModifierSource::new("drill", SourceKind::Skill)
        .with_modifier(StatModifier::mult(ProfileStat::Accuracy, 1.1));

    let profile = ProfileBuilder::new()
        .with_source(&drill)
        .with_source(&scope)
        .with_source(&template)
        .build();

    // 60 × (1 + 0.2 + 0.1)
    assert_eq!(profile.get_accuracy(), 78.0);
    assert_eq!(profile.get_morale_max(), 40.0);
    assert_eq!(profile.discipline, 20.0);
}

#[test]
fn test_engine_pipeline_with_custom_constants() {
    let constants: CombatConstants = parse_toml(
        r#"
[hit]
min_hit_chance = 100.0
"#,
    )
    .unwrap();
    constants.validate().unwrap();
    let engine = CombatEngine::new(constants, DamageResolver::default());

    let attacker_id = CombatantId::from("gunner");
    let attacker = profile_with_accuracy(0.0);
    let mut defender = CombatantProfile::new();
    defender.armor.front = 10.0;
    let action = no_dropoff();
    let damage = AttackProfile {
        min_damage: 30.0,
        armor_durability_damage: 4.0,
        ..Default::default()
    };
    let attack = Attack {
        attacker_id: &attacker_id,
        attacker: &attacker,
        defender: &defender,
        source: TilePos::new(0, 0),
        target: TilePos::new(3, 3),
        target_contained: false,
        action: &action,
        damage: &damage,
        element_count: 1,
        suppression: 85.0,
    };
    let mut state = CombatantState::new("rifleman", Faction::Enemy)
        .with_health(15.0)
        .with_armor_durability(6.0);
    let mut hooks = RecordingHooks::new();

    let mut rng = StdRng::seed_from_u64(3);
    let outcome = engine.resolve_attack_with_rng(&attack, &mut state, &GridMap::new(), &mut hooks, &mut rng);

    assert!(outcome.is_hit());
    assert_eq!(outcome.applied_damage(), 20.0);
    assert!(outcome.is_killing_blow());
    assert_eq!(state.armor_durability, 2.0);
    assert_eq!(state.suppression_state(&engine.constants), SuppressionState::PinnedDown);
    assert_eq!(hooks.events.len(), 3);
}

#[test]
fn test_morale_states_through_state_queries() {
    let constants = CombatConstants::default();
    let mut profile = CombatantProfile::new();
    profile.morale = ScaledStat::with_base(100.0);
    let mut state = CombatantState::new("recruit", Faction::Player).with_morale(100.0);

    assert_eq!(state.morale_state(&profile, false, &constants), MoraleState::Neutral);

    tactics_core::change_morale(&mut state, &profile, -60.0);
    assert_eq!(state.morale_state(&profile, false, &constants), MoraleState::Wavering);

    tactics_core::change_morale(&mut state, &profile, -500.0);
    assert_eq!(state.morale(), 0.0);
    assert_eq!(state.morale_state(&profile, false, &constants), MoraleState::Fleeing);
    // selected player units never flee
    assert_eq!(state.morale_state(&profile, true, &constants), MoraleState::Neutral);
}
