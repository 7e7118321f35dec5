//! TemplateSource - Base values from a unit template

use crate::config::{parse_toml, ConfigError};
use crate::profile::{ArmorZones, ProfileAccumulator, ProfileStat};
use crate::source::ProfileSource;
use serde::{Deserialize, Serialize};

/// Static per-unit-type values, as authored in game data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitTemplate {
    pub id: String,
    #[serde(default)]
    pub accuracy: f64,
    #[serde(default)]
    pub accuracy_dropoff: f64,
    #[serde(default)]
    pub damage: f64,
    #[serde(default)]
    pub damage_dropoff: f64,
    #[serde(default)]
    pub armor_penetration: f64,
    #[serde(default)]
    pub armor_durability_damage: f64,
    #[serde(default)]
    pub armor: ArmorZones,
    #[serde(default = "neutral")]
    pub dodge: f64,
    #[serde(default = "neutral")]
    pub cover_usage: f64,
    #[serde(default)]
    pub morale: f64,
    #[serde(default)]
    pub morale_state_modifier: i32,
    #[serde(default = "neutral")]
    pub suppression_resist: f64,
    #[serde(default)]
    pub discipline: f64,
    #[serde(default)]
    pub min_hit_chance: f64,
    #[serde(default)]
    pub ignores_suppression: bool,
    #[serde(default)]
    pub ignores_indirect_suppression: bool,
}

fn neutral() -> f64 {
    1.0
}

impl Default for UnitTemplate {
    fn default() -> Self {
        UnitTemplate {
            id: "unit".to_string(),
            accuracy: 0.0,
            accuracy_dropoff: 0.0,
            damage: 0.0,
            damage_dropoff: 0.0,
            armor_penetration: 0.0,
            armor_durability_damage: 0.0,
            armor: ArmorZones::default(),
            dodge: 1.0,
            cover_usage: 1.0,
            morale: 0.0,
            morale_state_modifier: 0,
            suppression_resist: 1.0,
            discipline: 0.0,
            min_hit_chance: 0.0,
            ignores_suppression: false,
            ignores_indirect_suppression: false,
        }
    }
}

/// Applies a unit template as the first layer of a profile
#[derive(Debug, Clone)]
pub struct TemplateSource {
    template: UnitTemplate,
}

impl TemplateSource {
    pub fn new(template: UnitTemplate) -> Self {
        TemplateSource { template }
    }

    /// Parse a template from TOML
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(parse_toml(content)?))
    }

    pub fn template(&self) -> &UnitTemplate {
        &self.template
    }
}

impl ProfileSource for TemplateSource {
    fn id(&self) -> &str {
        &self.template.id
    }

    fn priority(&self) -> i32 {
        -100 // Template applies first
    }

    fn apply(&self, stats: &mut ProfileAccumulator) {
        let t = &self.template;

        stats.add_flat(ProfileStat::Accuracy, t.accuracy);
        stats.add_flat(ProfileStat::AccuracyDropoff, t.accuracy_dropoff);
        stats.add_flat(ProfileStat::Damage, t.damage);
        stats.add_flat(ProfileStat::DamageDropoff, t.damage_dropoff);
        stats.add_flat(ProfileStat::ArmorPenetration, t.armor_penetration);
        stats.add_flat(ProfileStat::ArmorDurabilityDamage, t.armor_durability_damage);
        stats.add_flat(ProfileStat::ArmorBase, t.armor.base);
        stats.add_flat(ProfileStat::ArmorFront, t.armor.front);
        stats.add_flat(ProfileStat::ArmorSide, t.armor.side);
        stats.add_flat(ProfileStat::Morale, t.morale);
        stats.add_flat(ProfileStat::MoraleStateModifier, t.morale_state_modifier as f64);
        stats.add_flat(ProfileStat::Discipline, t.discipline);
        stats.add_flat(ProfileStat::MinHitChance, t.min_hit_chance);

        // Template multipliers are expressed around 1.0
        stats.add_mult(ProfileStat::Dodge, t.dodge);
        stats.add_mult(ProfileStat::CoverUsage, t.cover_usage);
        stats.add_mult(ProfileStat::SuppressionResist, t.suppression_resist);

        if t.ignores_suppression {
            stats.set_ignores_suppression(true);
        }
        if t.ignores_indirect_suppression {
            stats.set_ignores_indirect_suppression(true);
        }
    }
}
