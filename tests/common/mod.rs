//! Shared test helpers: a scripted random source and roster builders.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::seq::index::sample;
use tournament_sim::{default_roster, BucketSet, Competitor, RandomSource};

/// Draw that lets the stronger seed win under any model returning >= 1.
pub const FAVORITE: f64 = 0.0;
/// Draw that hands the match to the weaker seed under any model returning < 99.
pub const UPSET: f64 = 99.0;

/// Replays a fixed list of draws, panicking if the script runs out.
pub struct ScriptedSource {
    draws: Vec<f64>,
    next: usize,
}

impl ScriptedSource {
    pub fn new(draws: Vec<f64>) -> Self {
        Self { draws, next: 0 }
    }

    /// Always returns the same draw.
    pub fn repeating(draw: f64, count: usize) -> Self {
        Self::new(vec![draw; count])
    }

    pub fn consumed(&self) -> usize {
        self.next
    }
}

impl RandomSource for ScriptedSource {
    fn roll(&mut self) -> f64 {
        let d = *self
            .draws
            .get(self.next)
            .unwrap_or_else(|| panic!("script exhausted after {} draws", self.next));
        self.next += 1;
        d
    }
}

pub fn seeds(list: &[u32]) -> Vec<Competitor> {
    list.iter().copied().map(Competitor::new).collect()
}

pub fn roster16() -> Vec<Competitor> {
    default_roster(16)
}

/// `size` distinct seeds drawn from 1..=1000, sorted strongest first.
pub fn random_roster(size: usize, rng: &mut StdRng) -> Vec<Competitor> {
    let mut picked: Vec<u32> = sample(rng, 1000, size).into_iter().map(|i| i as u32 + 1).collect();
    picked.sort_unstable();
    seeds(&picked)
}

pub fn assert_partition(buckets: &BucketSet, roster: &[Competitor]) {
    assert!(buckets.is_partition_of(roster), "not a partition: {:?}", buckets);
    assert!(buckets.widths_match(), "bucket widths off: {:?}", buckets);
}
