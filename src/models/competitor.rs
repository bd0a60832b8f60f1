//! Competitor and MatchResult data structures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Relative strength rank of a competitor; lower is stronger.
pub type Seed = u32;

/// A seeded entrant. Two competitors are the same entrant when their seeds match.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Competitor {
    pub seed: Seed,
}

impl Competitor {
    pub fn new(seed: Seed) -> Self {
        Self { seed }
    }

    /// True when `self` holds the better (numerically lower) seed.
    pub fn is_stronger_than(&self, other: &Competitor) -> bool {
        self.seed < other.seed
    }
}

impl fmt::Display for Competitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seed {}", self.seed)
    }
}

/// Outcome of one resolved match.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub winner: Competitor,
    pub loser: Competitor,
}

impl MatchResult {
    pub fn new(winner: Competitor, loser: Competitor) -> Self {
        Self { winner, loser }
    }

    /// Whether the weaker seed took the match.
    pub fn is_upset(&self) -> bool {
        self.loser.is_stronger_than(&self.winner)
    }
}
