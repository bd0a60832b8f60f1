//! Round-robin groups: four groups of four, every pairing played once.

use crate::logic::format::Format;
use crate::logic::resolver::Resolver;
use crate::logic::roster::validate_roster;
use crate::logic::sequencer::{apply_pairings, Pairing};
use crate::models::{BucketSet, Competitor, FormatError};

/// Seed positions (1-indexed into the roster) of groups A-D.
pub const GROUPS: [[usize; 4]; 4] = [[1, 8, 10, 15], [2, 7, 9, 16], [3, 6, 12, 13], [4, 5, 11, 14]];

/// All six pairings of a 4-team group, in play order.
pub const ALL_PAIRS_OF_4: &[Pairing] = &[(1, 2), (1, 3), (1, 4), (2, 3), (2, 4), (3, 4)];

/// Final order of one group.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GroupStanding {
    /// 1st to 4th.
    pub ranking: Vec<Competitor>,
    /// Round-robin wins, parallel to `ranking` (deciders not counted).
    pub wins: Vec<u32>,
    /// Tie-break matches played.
    pub deciders: u32,
}

impl GroupStanding {
    pub const NAME: &'static str = "RoundRobin group";
    pub const MEMBERS: usize = 4;

    /// Play every pairing, rank by wins, then break ties.
    ///
    /// A tie for 1st-2nd or for 3rd-4th is settled by one decider match.
    /// Three- and four-way ties have no dedicated rule: the stable sort keeps
    /// group order within equal scores and only the adjacent deciders above
    /// apply.
    pub fn run(members: &[Competitor], resolver: &mut Resolver<'_>) -> Result<Self, FormatError> {
        validate_roster(Self::NAME, members, Self::MEMBERS)?;
        Ok(Self::play(members, resolver))
    }

    /// `members` must already hold four distinct competitors.
    fn play(members: &[Competitor], resolver: &mut Resolver<'_>) -> Self {
        let outcome = apply_pairings(ALL_PAIRS_OF_4, members, resolver);

        let mut table: Vec<(Competitor, u32)> = members.iter().map(|&c| (c, 0)).collect();
        for w in &outcome.winners {
            if let Some(entry) = table.iter_mut().find(|(c, _)| c == w) {
                entry.1 += 1;
            }
        }
        table.sort_by(|a, b| b.1.cmp(&a.1));

        let mut deciders = 0;
        let mut ranking = Vec::with_capacity(table.len());
        for pair in table.chunks(2) {
            if let [(a, score_a), (b, score_b)] = pair {
                if score_a == score_b {
                    let decider = resolver.resolve(*a, *b);
                    deciders += 1;
                    ranking.push(decider.winner);
                    ranking.push(decider.loser);
                } else {
                    ranking.push(*a);
                    ranking.push(*b);
                }
            }
        }

        let wins = ranking
            .iter()
            .map(|c| table.iter().find(|(t, _)| t == c).map_or(0, |(_, s)| *s))
            .collect();

        Self {
            ranking,
            wins,
            deciders,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundRobinGroups16 {
    pub groups: Vec<GroupStanding>,
    /// Group winners A-D, 1st-4th.
    pub firsts: Vec<Competitor>,
    /// 5th-8th.
    pub seconds: Vec<Competitor>,
    /// 9th-12th.
    pub thirds: Vec<Competitor>,
    /// 13th-16th.
    pub fourths: Vec<Competitor>,
}

impl RoundRobinGroups16 {
    pub const NAME: &'static str = "RoundRobinGroups 16 teams";
    pub const ENTRANTS: usize = 16;

    pub fn run(roster: &[Competitor], resolver: &mut Resolver<'_>) -> Result<Self, FormatError> {
        validate_roster(Self::NAME, roster, Self::ENTRANTS)?;

        let groups: Vec<GroupStanding> = GROUPS
            .iter()
            .map(|seeds| {
                let members: Vec<Competitor> = seeds.iter().map(|&s| roster[s - 1]).collect();
                GroupStanding::play(&members, resolver)
            })
            .collect();

        let rank = |i: usize| groups.iter().map(|g| g.ranking[i]).collect::<Vec<_>>();
        let (firsts, seconds, thirds, fourths) = (rank(0), rank(1), rank(2), rank(3));

        Ok(Self {
            groups,
            firsts,
            seconds,
            thirds,
            fourths,
        })
    }
}

impl Format for RoundRobinGroups16 {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn buckets(&self) -> BucketSet {
        BucketSet::new()
            .with(1, 4, self.firsts.clone())
            .with(5, 8, self.seconds.clone())
            .with(9, 12, self.thirds.clone())
            .with(13, 16, self.fourths.clone())
    }
}
