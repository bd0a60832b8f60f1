//! Roster construction and validation.

use crate::models::{Competitor, FormatError, Seed};
use std::collections::HashSet;

/// `size` competitors seeded 1..=size, strongest first.
pub fn default_roster(size: usize) -> Vec<Competitor> {
    (1..=size as Seed).map(Competitor::new).collect()
}

/// Check the roster has exactly `expected` entrants with distinct seeds.
pub fn validate_roster(format: &'static str, roster: &[Competitor], expected: usize) -> Result<(), FormatError> {
    if roster.len() != expected {
        log::debug!("{}: rejected roster of {} teams", format, roster.len());
        return Err(FormatError::WrongRosterSize {
            format,
            expected,
            actual: roster.len(),
        });
    }
    ensure_distinct(roster)
}

/// Check a pre-split tier has exactly `expected` entrants.
pub fn validate_tier(tier: &'static str, members: &[Competitor], expected: usize) -> Result<(), FormatError> {
    if members.len() != expected {
        log::debug!("tier {}: rejected {} teams", tier, members.len());
        return Err(FormatError::WrongTierSize {
            tier,
            expected,
            actual: members.len(),
        });
    }
    Ok(())
}

/// Fail on the first repeated seed.
pub fn ensure_distinct<'a>(competitors: impl IntoIterator<Item = &'a Competitor>) -> Result<(), FormatError> {
    let mut seen = HashSet::new();
    for c in competitors {
        if !seen.insert(c.seed) {
            return Err(FormatError::DuplicateSeed(c.seed));
        }
    }
    Ok(())
}
