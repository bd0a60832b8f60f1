//! Errors raised while validating input to a format.

use crate::models::competitor::Seed;

/// Caller-input errors. Raised before any match is resolved.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FormatError {
    /// The roster does not have the number of entrants the bracket shape is built for.
    WrongRosterSize {
        format: &'static str,
        expected: usize,
        actual: usize,
    },
    /// Two entrants share a seed.
    DuplicateSeed(Seed),
    /// One tier of a pre-split roster has the wrong number of entrants.
    WrongTierSize {
        tier: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatError::WrongRosterSize {
                format,
                expected,
                actual,
            } => write!(f, "{} must have {} teams (got {})", format, expected, actual),
            FormatError::DuplicateSeed(seed) => write!(f, "team seeds must be distinct (seed {} repeated)", seed),
            FormatError::WrongTierSize {
                tier,
                expected,
                actual,
            } => write!(f, "tier {} must have {} teams (got {})", tier, expected, actual),
        }
    }
}

impl std::error::Error for FormatError {}
