//! Placement labels and the bucket set every format reports.

use crate::models::competitor::Competitor;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// An inclusive range of final positions, e.g. 1st or 5th-8th.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Placement {
    pub first: u32,
    pub last: u32,
}

impl Placement {
    pub const fn new(first: u32, last: u32) -> Self {
        debug_assert!(first <= last, "placement range is inverted");
        Self { first, last }
    }

    /// A single position.
    pub const fn exactly(position: u32) -> Self {
        Self::new(position, position)
    }

    /// Number of competitors the placement holds. An inverted range holds none.
    pub fn width(&self) -> usize {
        self.last
            .checked_sub(self.first)
            .map_or(0, |span| span as usize + 1)
    }
}

fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.first == self.last {
            write!(f, "{}", ordinal(self.first))
        } else {
            write!(f, "{}-{}", ordinal(self.first), ordinal(self.last))
        }
    }
}

/// One placement and the competitors who finished there, in bracket order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub placement: Placement,
    pub competitors: Vec<Competitor>,
}

/// Final placements of one format run, best placement first.
///
/// A well-formed set partitions the roster it was built from: every entrant
/// appears in exactly one bucket.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct BucketSet {
    buckets: Vec<Bucket>,
}

impl BucketSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`BucketSet::insert`].
    pub fn with(mut self, first: u32, last: u32, competitors: Vec<Competitor>) -> Self {
        self.insert(Placement::new(first, last), competitors);
        self
    }

    /// Add a bucket, keeping buckets sorted by placement.
    pub fn insert(&mut self, placement: Placement, competitors: Vec<Competitor>) {
        let idx = self
            .buckets
            .iter()
            .position(|b| b.placement > placement)
            .unwrap_or(self.buckets.len());
        self.buckets.insert(
            idx,
            Bucket {
                placement,
                competitors,
            },
        );
    }

    pub fn get(&self, placement: Placement) -> Option<&[Competitor]> {
        self.buckets
            .iter()
            .find(|b| b.placement == placement)
            .map(|b| b.competitors.as_slice())
    }

    /// Sole occupant of 1st place, if the format crowns one.
    pub fn champion(&self) -> Option<Competitor> {
        match self.get(Placement::exactly(1)) {
            Some([c]) => Some(*c),
            _ => None,
        }
    }

    pub fn placement_of(&self, competitor: Competitor) -> Option<Placement> {
        self.buckets
            .iter()
            .find(|b| b.competitors.contains(&competitor))
            .map(|b| b.placement)
    }

    /// Total number of competitors across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(|b| b.competitors.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when the buckets are disjoint and their union is exactly `roster`.
    pub fn is_partition_of(&self, roster: &[Competitor]) -> bool {
        let mut seen = HashSet::with_capacity(roster.len());
        for c in self.buckets.iter().flat_map(|b| b.competitors.iter()) {
            if !seen.insert(*c) {
                return false;
            }
        }
        seen.len() == roster.len() && roster.iter().all(|c| seen.contains(c))
    }

    /// True when each bucket holds as many competitors as its placement spans.
    pub fn widths_match(&self) -> bool {
        self.buckets
            .iter()
            .all(|b| b.placement.width() == b.competitors.len())
    }
}
