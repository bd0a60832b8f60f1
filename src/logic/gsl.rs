//! GSL groups: four 4-team double elimination groups feeding an 8-team knockout.

use crate::logic::format::Format;
use crate::logic::resolver::Resolver;
use crate::logic::roster::validate_roster;
use crate::logic::sequencer::{apply_pairings, Pairing};
use crate::logic::single_elim::SingleElim8;
use crate::models::{BucketSet, Competitor, FormatError};

/// Seed positions (1-indexed into the roster) of groups A-D.
pub const GROUPS: [[usize; 4]; 4] = [[1, 8, 10, 15], [2, 7, 9, 16], [3, 6, 12, 13], [4, 5, 11, 14]];

/// Opening matches within a group, by position in the group.
pub const GROUP_OPENING: &[Pairing] = &[(1, 4), (2, 3)];

/// Outcome of one GSL group.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GslGroup {
    pub members: Vec<Competitor>,
    /// Winners' match winner, then decider winner.
    pub qualified: Vec<Competitor>,
    /// Decider loser, then losers' match loser.
    pub eliminated: Vec<Competitor>,
}

impl GslGroup {
    pub const NAME: &'static str = "GSL group";
    pub const MEMBERS: usize = 4;

    /// Opening pair, winners' and losers' matches, then a decider between the
    /// winners' match loser and the losers' match winner.
    pub fn run(members: Vec<Competitor>, resolver: &mut Resolver<'_>) -> Result<Self, FormatError> {
        validate_roster(Self::NAME, &members, Self::MEMBERS)?;
        Ok(Self::play(members, resolver))
    }

    fn play(members: Vec<Competitor>, resolver: &mut Resolver<'_>) -> Self {
        let opening = apply_pairings(GROUP_OPENING, &members, resolver);
        let winners_match = resolver.resolve(opening.winners[0], opening.winners[1]);
        let losers_match = resolver.resolve(opening.losers[0], opening.losers[1]);
        let decider = resolver.resolve(winners_match.loser, losers_match.winner);

        Self {
            members,
            qualified: vec![winners_match.winner, decider.winner],
            eliminated: vec![decider.loser, losers_match.loser],
        }
    }

    pub fn winner(&self) -> Competitor {
        self.qualified[0]
    }

    pub fn runner_up(&self) -> Competitor {
        self.qualified[1]
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Gsl {
    pub groups: Vec<GslGroup>,
    pub bracket: SingleElim8,
}

impl Gsl {
    pub const NAME: &'static str = "GSL";
    pub const ENTRANTS: usize = 16;

    pub fn run(roster: &[Competitor], resolver: &mut Resolver<'_>) -> Result<Self, FormatError> {
        validate_roster(Self::NAME, roster, Self::ENTRANTS)?;

        let groups: Vec<GslGroup> = GROUPS
            .iter()
            .map(|seeds| {
                let members = seeds.iter().map(|&s| roster[s - 1]).collect();
                GslGroup::play(members, resolver)
            })
            .collect();

        let bracket = SingleElim8::run(&bracket_seeding(&groups), resolver)?;
        Ok(Self { groups, bracket })
    }
}

/// Knockout seed order: group winners A-D, then runners-up A-D.
pub fn bracket_seeding(groups: &[GslGroup]) -> Vec<Competitor> {
    groups
        .iter()
        .map(GslGroup::winner)
        .chain(groups.iter().map(GslGroup::runner_up))
        .collect()
}

impl Format for Gsl {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn buckets(&self) -> BucketSet {
        self.bracket
            .buckets()
            .with(9, 12, self.groups.iter().map(|g| g.eliminated[0]).collect())
            .with(13, 16, self.groups.iter().map(|g| g.eliminated[1]).collect())
    }
}
