//! Applies a fixed pairing table to a competitor list.

use crate::logic::resolver::Resolver;
use crate::models::Competitor;

/// A 1-indexed pair of roster positions that meet in a round.
pub type Pairing = (usize, usize);

/// Winners and losers of one round; entry k of each belongs to pairing k.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RoundOutcome {
    pub winners: Vec<Competitor>,
    pub losers: Vec<Competitor>,
}

/// Resolve `roster[i-1]` against `roster[j-1]` for every `(i, j)` in `table`,
/// in table order.
///
/// Tables are constants sized for the bracket shape; `roster` must cover every
/// position they name.
pub fn apply_pairings(table: &[Pairing], roster: &[Competitor], resolver: &mut Resolver<'_>) -> RoundOutcome {
    let mut outcome = RoundOutcome {
        winners: Vec::with_capacity(table.len()),
        losers: Vec::with_capacity(table.len()),
    };
    for &(i, j) in table {
        let result = resolver.resolve(roster[i - 1], roster[j - 1]);
        outcome.winners.push(result.winner);
        outcome.losers.push(result.loser);
    }
    outcome
}
