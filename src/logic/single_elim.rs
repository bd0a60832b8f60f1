//! Single elimination brackets for 8 and 16 entrants.

use crate::logic::format::Format;
use crate::logic::resolver::Resolver;
use crate::logic::roster::validate_roster;
use crate::logic::sequencer::{apply_pairings, Pairing};
use crate::models::{BucketSet, Competitor, FormatError, MatchResult};

/// First round of 16. Keeps the top four seeds in separate quarters.
pub const ROUND_OF_16: &[Pairing] = &[(1, 16), (8, 9), (4, 13), (5, 12), (2, 15), (7, 10), (3, 14), (6, 11)];

/// Quarterfinals fed by [`ROUND_OF_16`] winners.
pub const QUARTERS_FROM_16: &[Pairing] = &[(1, 2), (3, 4), (5, 6), (7, 8)];

/// Quarterfinals of an 8-entrant bracket, seeded 1-8.
pub const QUARTERS_FROM_8: &[Pairing] = &[(1, 8), (4, 5), (2, 7), (3, 6)];

pub const SEMIS: &[Pairing] = &[(1, 2), (3, 4)];

/// Two-match finals.
///
/// Two independent matches are played. When they agree, that winner takes the
/// title. On a 1-1 split no decider is played and the first match stands.
/// The split case is a known defect kept as observed: a true decider would
/// need a third match.
pub fn two_match_final(a: Competitor, b: Competitor, resolver: &mut Resolver<'_>) -> MatchResult {
    let first = resolver.resolve(a, b);
    let second = resolver.resolve(a, b);
    if first.winner == second.winner {
        second
    } else {
        first
    }
}

/// Eight-entrant knockout.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SingleElim8 {
    pub champion: Competitor,
    pub runner_up: Competitor,
    /// 3rd-4th.
    pub semifinal_losers: Vec<Competitor>,
    /// 5th-8th.
    pub quarterfinal_losers: Vec<Competitor>,
}

impl SingleElim8 {
    pub const NAME: &'static str = "SingleElim 8 teams";
    pub const ENTRANTS: usize = 8;

    /// Run the bracket over `roster`, assumed sorted strongest first.
    pub fn run(roster: &[Competitor], resolver: &mut Resolver<'_>) -> Result<Self, FormatError> {
        validate_roster(Self::NAME, roster, Self::ENTRANTS)?;

        let quarters = apply_pairings(QUARTERS_FROM_8, roster, resolver);
        let semis = apply_pairings(SEMIS, &quarters.winners, resolver);
        let finals = two_match_final(semis.winners[0], semis.winners[1], resolver);

        Ok(Self {
            champion: finals.winner,
            runner_up: finals.loser,
            semifinal_losers: semis.losers,
            quarterfinal_losers: quarters.losers,
        })
    }
}

impl Format for SingleElim8 {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn buckets(&self) -> BucketSet {
        BucketSet::new()
            .with(1, 1, vec![self.champion])
            .with(2, 2, vec![self.runner_up])
            .with(3, 4, self.semifinal_losers.clone())
            .with(5, 8, self.quarterfinal_losers.clone())
    }
}

/// Sixteen-entrant knockout.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SingleElim16 {
    pub champion: Competitor,
    pub runner_up: Competitor,
    /// 3rd-4th.
    pub semifinal_losers: Vec<Competitor>,
    /// 5th-8th.
    pub quarterfinal_losers: Vec<Competitor>,
    /// 9th-16th.
    pub first_round_losers: Vec<Competitor>,
}

impl SingleElim16 {
    pub const NAME: &'static str = "SingleElim 16 teams";
    pub const ENTRANTS: usize = 16;

    pub fn run(roster: &[Competitor], resolver: &mut Resolver<'_>) -> Result<Self, FormatError> {
        validate_roster(Self::NAME, roster, Self::ENTRANTS)?;

        let first_round = apply_pairings(ROUND_OF_16, roster, resolver);
        let quarters = apply_pairings(QUARTERS_FROM_16, &first_round.winners, resolver);
        let semis = apply_pairings(SEMIS, &quarters.winners, resolver);
        let finals = two_match_final(semis.winners[0], semis.winners[1], resolver);

        Ok(Self {
            champion: finals.winner,
            runner_up: finals.loser,
            semifinal_losers: semis.losers,
            quarterfinal_losers: quarters.losers,
            first_round_losers: first_round.losers,
        })
    }
}

impl Format for SingleElim16 {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn buckets(&self) -> BucketSet {
        BucketSet::new()
            .with(1, 1, vec![self.champion])
            .with(2, 2, vec![self.runner_up])
            .with(3, 4, self.semifinal_losers.clone())
            .with(5, 8, self.quarterfinal_losers.clone())
            .with(9, 16, self.first_round_losers.clone())
    }
}
