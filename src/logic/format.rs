//! Common surface of every tournament format.

use crate::models::BucketSet;

/// A fully resolved run of one format.
pub trait Format {
    /// Display name, e.g. "SingleElim 16 teams".
    fn name(&self) -> &'static str;

    /// Final placements; partitions the roster the run was built from.
    fn buckets(&self) -> BucketSet;
}
