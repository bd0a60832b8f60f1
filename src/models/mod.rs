//! Data structures for simulated tournaments: competitors, match results, placements.

mod competitor;
mod error;
mod placement;

pub use competitor::{Competitor, MatchResult, Seed};
pub use error::FormatError;
pub use placement::{Bucket, BucketSet, Placement};
