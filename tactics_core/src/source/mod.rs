//! ProfileSource - Trait and implementations for profile contributors

mod modifier;
mod template;

pub use modifier::{ModifierSource, SourceKind};
pub use template::{TemplateSource, UnitTemplate};

use crate::profile::{CombatantProfile, ProfileAccumulator};

/// Trait for anything that contributes stats to a CombatantProfile
pub trait ProfileSource: Send + Sync {
    /// Unique identifier for this source
    fn id(&self) -> &str;

    /// Priority for application order (higher = applied later)
    /// Suggested priorities:
    /// - Unit template: -100
    /// - Equipment: 0
    /// - Skills: 100
    /// - Terrain: 200
    fn priority(&self) -> i32 {
        0
    }

    /// Apply this source's stats to the accumulator
    fn apply(&self, stats: &mut ProfileAccumulator);
}

/// Builds a fresh profile from a set of sources
#[derive(Default)]
pub struct ProfileBuilder<'a> {
    sources: Vec<&'a dyn ProfileSource>,
}

impl<'a> ProfileBuilder<'a> {
    pub fn new() -> Self {
        ProfileBuilder {
            sources: Vec::new(),
        }
    }

    pub fn with_source(mut self, source: &'a dyn ProfileSource) -> Self {
        self.sources.push(source);
        self
    }

    pub fn add_source(&mut self, source: &'a dyn ProfileSource) {
        self.sources.push(source);
    }

    /// Apply every source in priority order and freeze the result
    pub fn build(&self) -> CombatantProfile {
        let mut ordered = self.sources.clone();
        // stable sort keeps insertion order within a priority
        ordered.sort_by_key(|s| s.priority());

        let mut acc = ProfileAccumulator::new();
        for source in ordered {
            tracing::trace!(source = source.id(), "applying profile source");
            source.apply(&mut acc);
        }
        acc.finish()
    }
}
