//! ModifierSource - Equipment, skill and terrain modifiers

use crate::profile::{ProfileAccumulator, StatModifier};
use crate::source::ProfileSource;
use serde::{Deserialize, Serialize};

/// Where a set of modifiers comes from; decides application order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Equipment,
    Skill,
    Terrain,
}

impl SourceKind {
    fn priority(self) -> i32 {
        match self {
            SourceKind::Equipment => 0,
            SourceKind::Skill => 100,
            SourceKind::Terrain => 200,
        }
    }
}

/// A named bundle of stat modifiers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModifierSource {
    pub id: String,
    pub kind: SourceKind,
    #[serde(default)]
    pub modifiers: Vec<StatModifier>,
    #[serde(default)]
    pub grants_ignore_suppression: bool,
    #[serde(default)]
    pub grants_ignore_indirect_suppression: bool,
}

impl ModifierSource {
    pub fn new(id: impl Into<String>, kind: SourceKind) -> Self {
        ModifierSource {
            id: id.into(),
            kind,
            modifiers: Vec::new(),
            grants_ignore_suppression: false,
            grants_ignore_indirect_suppression: false,
        }
    }

    pub fn with_modifier(mut self, modifier: StatModifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    pub fn ignoring_suppression(mut self) -> Self {
        self.grants_ignore_suppression = true;
        self
    }

    pub fn ignoring_indirect_suppression(mut self) -> Self {
        self.grants_ignore_indirect_suppression = true;
        self
    }
}

impl ProfileSource for ModifierSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn priority(&self) -> i32 {
        self.kind.priority()
    }

    fn apply(&self, stats: &mut ProfileAccumulator) {
        for modifier in &self.modifiers {
            stats.apply(modifier);
        }
        if self.grants_ignore_suppression {
            stats.set_ignores_suppression(true);
        }
        if self.grants_ignore_indirect_suppression {
            stats.set_ignores_indirect_suppression(true);
        }
    }
}
