//! Match resolution: the only place a random draw decides anything.

use crate::logic::probability::ProbabilityModel;
use crate::models::{Competitor, MatchResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform draws in `[0, 100)`.
pub trait RandomSource {
    fn roll(&mut self) -> f64;
}

/// Adapts any `rand` generator into a [`RandomSource`].
#[derive(Clone, Debug)]
pub struct RngSource<R>(pub R);

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn roll(&mut self) -> f64 {
        self.0.gen::<f64>() * 100.0
    }
}

/// Resolves matches with a probability model and an injected random source.
pub struct Resolver<'a> {
    model: &'a dyn ProbabilityModel,
    source: &'a mut dyn RandomSource,
    played: u64,
}

impl<'a> Resolver<'a> {
    pub fn new(model: &'a dyn ProbabilityModel, source: &'a mut dyn RandomSource) -> Self {
        Self {
            model,
            source,
            played: 0,
        }
    }

    /// Play one match. Operand order never affects the outcome: the stronger
    /// seed is always evaluated first and wins unless the draw exceeds the
    /// model's percentage for the seed gap.
    pub fn resolve(&mut self, a: Competitor, b: Competitor) -> MatchResult {
        let (strong, weak) = if a.seed > b.seed { (b, a) } else { (a, b) };
        let gap = weak.seed - strong.seed;
        let p = self.model.win_percentage(gap);
        let r = self.source.roll();
        self.played += 1;
        if r > p {
            MatchResult::new(weak, strong)
        } else {
            MatchResult::new(strong, weak)
        }
    }

    /// Number of matches resolved so far.
    pub fn matches_played(&self) -> u64 {
        self.played
    }
}
