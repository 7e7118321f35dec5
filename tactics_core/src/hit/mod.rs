//! Hit resolution - chance to hit from profiles, cover and distance

mod chance;
mod cover;
mod request;
mod result;
mod roll;

pub use chance::compute_hit_chance;
pub use cover::cover_multiplier;
pub use request::{ActionProfile, HitChanceRequest};
pub use result::HitChanceResult;
pub use roll::{roll_hit, HitRoll};

/// Upper bound of every hit chance
pub const MAX_HIT_CHANCE: f64 = 100.0;
