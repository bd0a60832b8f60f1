//! Double elimination: the full 16-entrant bracket and the two lower-start
//! variants fed by an earlier group stage.
//!
//! Every variant finishes with [`grand_final_with_reset`].

use crate::logic::format::Format;
use crate::logic::resolver::Resolver;
use crate::logic::roster::{ensure_distinct, validate_roster, validate_tier};
use crate::logic::sequencer::{apply_pairings, Pairing};
use crate::logic::single_elim::{SingleElim8, QUARTERS_FROM_16, ROUND_OF_16, SEMIS};
use crate::models::{BucketSet, Competitor, FormatError, MatchResult};
use serde::{Deserialize, Serialize};

/// Lower round 1: round-of-16 losers, paired in order.
pub const LOWER_OPENING: &[Pairing] = &[(1, 2), (3, 4), (5, 6), (7, 8)];

/// Lower round 2 over `[upper quarterfinal losers.., lower round 1 winners..]`.
pub const LOWER_QUARTER_MERGE: &[Pairing] = &[(4, 5), (3, 6), (2, 7), (1, 8)];

/// Lower round 3 over lower round 2 winners.
pub const LOWER_CONSOLIDATION: &[Pairing] = &[(1, 2), (3, 4)];

/// Lower round 4 over `[upper semifinal losers.., lower round 3 winners..]`.
pub const LOWER_SEMI_MERGE: &[Pairing] = &[(1, 2), (3, 4)];

/// Upper semifinals of the 8/12 variant over the top tier.
pub const UPPER_SEMIS_FROM_4: &[Pairing] = &[(1, 4), (2, 3)];

/// Lower opening of the 8/12 variant over `[mid tier.., bottom tier..]`.
pub const LOWER_OPENING_8_12: &[Pairing] = &[(2, 5), (3, 8), (1, 6), (4, 7)];

/// Lower opening of the 4/12 variant over `[upper quarterfinal losers.., bottom tier..]`.
pub const LOWER_OPENING_4_12: &[Pairing] = &[(1, 5), (2, 6), (3, 7), (4, 8)];

/// Lower bracket entries for upper semifinal losers over
/// `[lower winners.., upper semifinal losers..]`.
pub const LOWER_DROP_IN: &[Pairing] = &[(1, 3), (2, 4)];

/// Grand final with bracket reset.
///
/// The upper finalist has no losses: one win is enough. If the lower finalist
/// takes the first match, a second independent match decides the title
/// outright.
pub fn grand_final_with_reset(upper: Competitor, lower: Competitor, resolver: &mut Resolver<'_>) -> MatchResult {
    let first = resolver.resolve(upper, lower);
    if first.winner == upper {
        return first;
    }
    resolver.resolve(upper, lower)
}

/// Upper-bracket round a competitor lost in before dropping to the lower bracket.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpperRound {
    RoundOf16,
    Quarterfinal,
    Semifinal,
    Final,
}

/// Full 16-entrant double elimination.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DoubleElim16 {
    pub champion: Competitor,
    pub runner_up: Competitor,
    pub third: Competitor,
    pub fourth: Competitor,
    /// 5th-6th.
    pub lower_semi_merge_losers: Vec<Competitor>,
    /// 7th-8th.
    pub lower_consolidation_losers: Vec<Competitor>,
    /// 9th-12th.
    pub lower_quarter_merge_losers: Vec<Competitor>,
    /// 13th-16th.
    pub lower_opening_losers: Vec<Competitor>,
    /// Upper round the champion lost before recovering, if any.
    pub champion_dropped_in: Option<UpperRound>,
    /// The roster's first entrant lost its round-of-16 match.
    pub top_seed_dropped_in_first_round: bool,
}

impl DoubleElim16 {
    pub const NAME: &'static str = "DoubleElim 16 teams";
    pub const ENTRANTS: usize = 16;

    pub fn run(roster: &[Competitor], resolver: &mut Resolver<'_>) -> Result<Self, FormatError> {
        validate_roster(Self::NAME, roster, Self::ENTRANTS)?;

        let upper_16 = apply_pairings(ROUND_OF_16, roster, resolver);
        let upper_8 = apply_pairings(QUARTERS_FROM_16, &upper_16.winners, resolver);
        let upper_4 = apply_pairings(SEMIS, &upper_8.winners, resolver);
        let upper_final = resolver.resolve(upper_4.winners[0], upper_4.winners[1]);

        let lower_1 = apply_pairings(LOWER_OPENING, &upper_16.losers, resolver);
        let lower_2 = apply_pairings(
            LOWER_QUARTER_MERGE,
            &[upper_8.losers.as_slice(), lower_1.winners.as_slice()].concat(),
            resolver,
        );
        let lower_3 = apply_pairings(LOWER_CONSOLIDATION, &lower_2.winners, resolver);
        let lower_4 = apply_pairings(
            LOWER_SEMI_MERGE,
            &[upper_4.losers.as_slice(), lower_3.winners.as_slice()].concat(),
            resolver,
        );
        let lower_semi = resolver.resolve(lower_4.winners[0], lower_4.winners[1]);
        let lower_final = resolver.resolve(upper_final.loser, lower_semi.winner);

        let grand_final = grand_final_with_reset(upper_final.winner, lower_final.winner, resolver);
        let champion = grand_final.winner;

        let champion_dropped_in = if upper_16.losers.contains(&champion) {
            Some(UpperRound::RoundOf16)
        } else if upper_8.losers.contains(&champion) {
            Some(UpperRound::Quarterfinal)
        } else if upper_4.losers.contains(&champion) {
            Some(UpperRound::Semifinal)
        } else if upper_final.loser == champion {
            Some(UpperRound::Final)
        } else {
            None
        };

        Ok(Self {
            champion,
            runner_up: grand_final.loser,
            third: lower_final.loser,
            fourth: lower_semi.loser,
            lower_semi_merge_losers: lower_4.losers,
            lower_consolidation_losers: lower_3.losers,
            lower_quarter_merge_losers: lower_2.losers,
            lower_opening_losers: lower_1.losers,
            champion_dropped_in,
            top_seed_dropped_in_first_round: upper_16.losers.contains(&roster[0]),
        })
    }
}

impl Format for DoubleElim16 {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn buckets(&self) -> BucketSet {
        BucketSet::new()
            .with(1, 1, vec![self.champion])
            .with(2, 2, vec![self.runner_up])
            .with(3, 3, vec![self.third])
            .with(4, 4, vec![self.fourth])
            .with(5, 6, self.lower_semi_merge_losers.clone())
            .with(7, 8, self.lower_consolidation_losers.clone())
            .with(9, 12, self.lower_quarter_merge_losers.clone())
            .with(13, 16, self.lower_opening_losers.clone())
    }
}

/// Twelve entrants already ranked into three tiers of four, each strongest first.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct LowerStartSeeding {
    pub top: Vec<Competitor>,
    pub mid: Vec<Competitor>,
    pub bottom: Vec<Competitor>,
}

impl LowerStartSeeding {
    pub const TIER_SIZE: usize = 4;

    pub fn validate(&self) -> Result<(), FormatError> {
        validate_tier("top", &self.top, Self::TIER_SIZE)?;
        validate_tier("mid", &self.mid, Self::TIER_SIZE)?;
        validate_tier("bottom", &self.bottom, Self::TIER_SIZE)?;
        ensure_distinct(self.top.iter().chain(&self.mid).chain(&self.bottom))
    }

    pub fn competitors(&self) -> Vec<Competitor> {
        [self.top.as_slice(), self.mid.as_slice(), self.bottom.as_slice()].concat()
    }
}

/// Which tiers enter the lower bracket directly.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LowerStartEntry {
    /// Top and mid tiers form an 8-team upper bracket; the bottom four start in the lower bracket.
    FourOfTwelve,
    /// Only the top tier plays upper semifinals; mid and bottom tiers start in the lower bracket.
    EightOfTwelve,
}

/// Result of a 12-entrant lower-start double elimination.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LowerStartBracket {
    pub entry: LowerStartEntry,
    pub champion: Competitor,
    pub runner_up: Competitor,
    pub third: Competitor,
    pub fourth: Competitor,
    /// 5th-6th.
    pub fifth_sixth: Vec<Competitor>,
    /// 7th-8th.
    pub seventh_eighth: Vec<Competitor>,
    /// 9th-12th.
    pub ninth_twelfth: Vec<Competitor>,
}

impl LowerStartBracket {
    pub fn run(entry: LowerStartEntry, seeding: &LowerStartSeeding, resolver: &mut Resolver<'_>) -> Result<Self, FormatError> {
        seeding.validate()?;
        match entry {
            LowerStartEntry::FourOfTwelve => Self::run_four_of_twelve(seeding, resolver),
            LowerStartEntry::EightOfTwelve => Ok(Self::run_eight_of_twelve(seeding, resolver)),
        }
    }

    fn run_four_of_twelve(seeding: &LowerStartSeeding, resolver: &mut Resolver<'_>) -> Result<Self, FormatError> {
        let upper_roster = [seeding.top.as_slice(), seeding.mid.as_slice()].concat();
        let upper = SingleElim8::run(&upper_roster, resolver)?;

        let lower_1 = apply_pairings(
            LOWER_OPENING_4_12,
            &[upper.quarterfinal_losers.as_slice(), seeding.bottom.as_slice()].concat(),
            resolver,
        );
        let lower_2 = apply_pairings(LOWER_CONSOLIDATION, &lower_1.winners, resolver);
        let lower_3 = apply_pairings(
            LOWER_DROP_IN,
            &[lower_2.winners.as_slice(), upper.semifinal_losers.as_slice()].concat(),
            resolver,
        );
        let lower_semi = resolver.resolve(lower_3.winners[0], lower_3.winners[1]);
        let lower_final = resolver.resolve(lower_semi.winner, upper.runner_up);
        let grand_final = grand_final_with_reset(upper.champion, lower_final.winner, resolver);

        Ok(Self {
            entry: LowerStartEntry::FourOfTwelve,
            champion: grand_final.winner,
            runner_up: grand_final.loser,
            third: lower_final.loser,
            fourth: lower_semi.loser,
            fifth_sixth: lower_3.losers,
            seventh_eighth: lower_2.losers,
            ninth_twelfth: lower_1.losers,
        })
    }

    fn run_eight_of_twelve(seeding: &LowerStartSeeding, resolver: &mut Resolver<'_>) -> Self {
        let upper_semis = apply_pairings(UPPER_SEMIS_FROM_4, &seeding.top, resolver);
        let upper_final = resolver.resolve(upper_semis.winners[0], upper_semis.winners[1]);

        let lower_1 = apply_pairings(
            LOWER_OPENING_8_12,
            &[seeding.mid.as_slice(), seeding.bottom.as_slice()].concat(),
            resolver,
        );
        let lower_2 = apply_pairings(LOWER_CONSOLIDATION, &lower_1.winners, resolver);
        let lower_3 = apply_pairings(
            LOWER_DROP_IN,
            &[lower_2.winners.as_slice(), upper_semis.losers.as_slice()].concat(),
            resolver,
        );
        let lower_semi = resolver.resolve(lower_3.winners[0], lower_3.winners[1]);
        let lower_final = resolver.resolve(lower_semi.winner, upper_final.loser);
        let grand_final = grand_final_with_reset(upper_final.winner, lower_final.winner, resolver);

        Self {
            entry: LowerStartEntry::EightOfTwelve,
            champion: grand_final.winner,
            runner_up: grand_final.loser,
            third: lower_final.loser,
            fourth: lower_semi.loser,
            fifth_sixth: lower_3.losers,
            seventh_eighth: lower_2.losers,
            ninth_twelfth: lower_1.losers,
        }
    }
}

impl Format for LowerStartBracket {
    fn name(&self) -> &'static str {
        match self.entry {
            LowerStartEntry::FourOfTwelve => "DoubleElim lower start 4/12",
            LowerStartEntry::EightOfTwelve => "DoubleElim lower start 8/12",
        }
    }

    fn buckets(&self) -> BucketSet {
        BucketSet::new()
            .with(1, 1, vec![self.champion])
            .with(2, 2, vec![self.runner_up])
            .with(3, 3, vec![self.third])
            .with(4, 4, vec![self.fourth])
            .with(5, 6, self.fifth_sixth.clone())
            .with(7, 8, self.seventh_eighth.clone())
            .with(9, 12, self.ninth_twelfth.clone())
    }
}
