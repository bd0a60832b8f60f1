//! 16-entrant Swiss system: five rounds, three wins qualify, three losses eliminate.
//!
//! Score groups are built from the order competitors come out of earlier
//! rounds' pairing tables, never from a standings sort.

use crate::logic::format::Format;
use crate::logic::resolver::Resolver;
use crate::logic::roster::validate_roster;
use crate::logic::sequencer::{apply_pairings, Pairing};
use crate::models::{BucketSet, Competitor, FormatError};

/// Round 1: seed i meets seed i+8.
pub const OPENING_16: &[Pairing] = &[(1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15), (8, 16)];

/// Positional pairing within a score group of 8.
pub const GROUP_OF_8: &[Pairing] = &[(1, 8), (2, 7), (3, 6), (4, 5)];

/// Positional pairing within a score group of 6.
pub const GROUP_OF_6: &[Pairing] = &[(1, 6), (2, 5), (3, 4)];

/// Positional pairing within a score group of 4.
pub const GROUP_OF_4: &[Pairing] = &[(1, 4), (2, 3)];

/// Final Swiss placements by record.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Swiss16 {
    /// 3-0, 1st-2nd.
    pub three_zero: Vec<Competitor>,
    /// 3-1, 3rd-5th.
    pub three_one: Vec<Competitor>,
    /// 3-2, 6th-8th.
    pub three_two: Vec<Competitor>,
    /// 2-3, 9th-11th.
    pub two_three: Vec<Competitor>,
    /// 1-3, 12th-14th.
    pub one_three: Vec<Competitor>,
    /// 0-3, 15th-16th.
    pub zero_three: Vec<Competitor>,
}

impl Swiss16 {
    pub const NAME: &'static str = "Swiss 16 teams";
    pub const ENTRANTS: usize = 16;

    pub fn run(roster: &[Competitor], resolver: &mut Resolver<'_>) -> Result<Self, FormatError> {
        validate_roster(Self::NAME, roster, Self::ENTRANTS)?;

        // 1-0 / 0-1
        let round_1 = apply_pairings(OPENING_16, roster, resolver);

        // 2-0 / 1-1 / 0-2
        let high = apply_pairings(GROUP_OF_8, &round_1.winners, resolver);
        let low = apply_pairings(GROUP_OF_8, &round_1.losers, resolver);
        let two_zero = high.winners;
        let one_one = [high.losers, low.winners].concat();
        let zero_two = low.losers;

        // 3-0 / 2-1 / 1-2 / 0-3
        let high = apply_pairings(GROUP_OF_4, &two_zero, resolver);
        let mid = apply_pairings(GROUP_OF_8, &one_one, resolver);
        let low = apply_pairings(GROUP_OF_4, &zero_two, resolver);
        let three_zero = high.winners;
        let two_one = [high.losers, mid.winners].concat();
        let one_two = [mid.losers, low.winners].concat();
        let zero_three = low.losers;

        // 3-1 / 2-2 / 1-3
        let high = apply_pairings(GROUP_OF_6, &two_one, resolver);
        let low = apply_pairings(GROUP_OF_6, &one_two, resolver);
        let three_one = high.winners;
        let two_two = [high.losers, low.winners].concat();
        let one_three = low.losers;

        // 3-2 / 2-3
        let last = apply_pairings(GROUP_OF_6, &two_two, resolver);

        Ok(Self {
            three_zero,
            three_one,
            three_two: last.winners,
            two_three: last.losers,
            one_three,
            zero_three,
        })
    }
}

impl Format for Swiss16 {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn buckets(&self) -> BucketSet {
        BucketSet::new()
            .with(1, 2, self.three_zero.clone())
            .with(3, 5, self.three_one.clone())
            .with(6, 8, self.three_two.clone())
            .with(9, 11, self.two_three.clone())
            .with(12, 14, self.one_three.clone())
            .with(15, 16, self.zero_three.clone())
    }
}
