//! Multiplier algebra - additive bonus stacking around a 1.0 baseline
//!
//! Every multiplier in a profile is an accumulator centered on 1.0. Bonuses
//! are folded in additively:
//!
//! `1.0 + (1.2 - 1.0) + (1.3 - 1.0) = 1.5`
//!
//! so a +20% and a +30% bonus give +50%, never the +56% a product would.

/// Extension methods for multiplier accumulators
pub trait Multiplier {
    /// Stack `mult` onto this accumulator additively: `self + (mult - 1.0)`
    fn add_mult(self, mult: f64) -> Self;

    /// Floor at zero so a large malus can never flip the sign of an effect
    fn clamped(self) -> Self;

    /// Reflect around the 1.0 baseline: `2.0 - self`
    ///
    /// Turns a defender-side bonus (dodge) into an attacker-side multiplier.
    fn flipped(self) -> Self;
}

impl Multiplier for f64 {
    #[inline]
    fn add_mult(self, mult: f64) -> f64 {
        add_mult(self, mult)
    }

    #[inline]
    fn clamped(self) -> f64 {
        clamp(self)
    }

    #[inline]
    fn flipped(self) -> f64 {
        flip(self)
    }
}

/// `acc + (mult - 1.0)`
#[inline]
pub fn add_mult(acc: f64, mult: f64) -> f64 {
    acc + (mult - 1.0)
}

/// `max(0.0, v)`
#[inline]
pub fn clamp(v: f64) -> f64 {
    v.max(0.0)
}

/// `2.0 - v`
#[inline]
pub fn flip(v: f64) -> f64 {
    2.0 - v
}

/// Fold a sequence of multipliers onto the 1.0 baseline
pub fn stack<I>(mults: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    mults.into_iter().fold(1.0, add_mult)
}
