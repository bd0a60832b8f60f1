//! Multi-stage formats. Each stage's placements become the next stage's seed
//! order through an explicit seeding function, so the order is reviewable in
//! one place.

use crate::logic::double_elim::{LowerStartBracket, LowerStartEntry, LowerStartSeeding};
use crate::logic::format::Format;
use crate::logic::resolver::Resolver;
use crate::logic::roster::validate_roster;
use crate::logic::round_robin::RoundRobinGroups16;
use crate::logic::single_elim::SingleElim8;
use crate::logic::swiss::Swiss16;
use crate::models::{BucketSet, Competitor, FormatError};

/// Swiss stage, then the eight qualifiers play an 8-team knockout.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Fall {
    pub swiss: Swiss16,
    pub playoffs: SingleElim8,
}

/// Knockout seed order after the Swiss stage: 3-0 teams, then 3-1, then 3-2,
/// each tier in the order the Swiss rounds produced it.
pub fn fall_playoff_seeding(swiss: &Swiss16) -> Vec<Competitor> {
    [
        swiss.three_zero.as_slice(),
        swiss.three_one.as_slice(),
        swiss.three_two.as_slice(),
    ]
    .concat()
}

impl Fall {
    pub const NAME: &'static str = "Fall";
    pub const ENTRANTS: usize = 16;

    pub fn run(roster: &[Competitor], resolver: &mut Resolver<'_>) -> Result<Self, FormatError> {
        validate_roster(Self::NAME, roster, Self::ENTRANTS)?;
        let swiss = Swiss16::run(roster, resolver)?;
        let playoffs = SingleElim8::run(&fall_playoff_seeding(&swiss), resolver)?;
        Ok(Self { swiss, playoffs })
    }

    pub fn champion(&self) -> Competitor {
        self.playoffs.champion
    }
}

impl Format for Fall {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn buckets(&self) -> BucketSet {
        self.playoffs
            .buckets()
            .with(9, 11, self.swiss.two_three.clone())
            .with(12, 14, self.swiss.one_three.clone())
            .with(15, 16, self.swiss.zero_three.clone())
    }
}

/// Lower-start seeding after round-robin groups: group winners as the top
/// tier, runners-up as the mid tier, third places as the bottom tier. Fourth
/// places are out.
pub fn winter_playoff_seeding(groups: &RoundRobinGroups16) -> LowerStartSeeding {
    LowerStartSeeding {
        top: groups.firsts.clone(),
        mid: groups.seconds.clone(),
        bottom: groups.thirds.clone(),
    }
}

/// Round-robin groups, then a 12-team lower-start double elimination.
///
/// `Winter` starts the mid and bottom tiers in the lower bracket; `WinterAlt`
/// keeps the top eight in an upper bracket and starts only the bottom tier
/// below.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Winter {
    pub groups: RoundRobinGroups16,
    pub playoffs: LowerStartBracket,
}

impl Winter {
    pub const NAME: &'static str = "Winter";
    pub const ALT_NAME: &'static str = "Winter-alt";
    pub const ENTRANTS: usize = 16;

    /// Groups feeding the 8/12 lower-start bracket.
    pub fn run(roster: &[Competitor], resolver: &mut Resolver<'_>) -> Result<Self, FormatError> {
        Self::run_with(LowerStartEntry::EightOfTwelve, roster, resolver)
    }

    /// Groups feeding the 4/12 lower-start bracket.
    pub fn run_alt(roster: &[Competitor], resolver: &mut Resolver<'_>) -> Result<Self, FormatError> {
        Self::run_with(LowerStartEntry::FourOfTwelve, roster, resolver)
    }

    fn run_with(entry: LowerStartEntry, roster: &[Competitor], resolver: &mut Resolver<'_>) -> Result<Self, FormatError> {
        let name = match entry {
            LowerStartEntry::EightOfTwelve => Self::NAME,
            LowerStartEntry::FourOfTwelve => Self::ALT_NAME,
        };
        validate_roster(name, roster, Self::ENTRANTS)?;
        let groups = RoundRobinGroups16::run(roster, resolver)?;
        let playoffs = LowerStartBracket::run(entry, &winter_playoff_seeding(&groups), resolver)?;
        Ok(Self { groups, playoffs })
    }

    pub fn champion(&self) -> Competitor {
        self.playoffs.champion
    }

    pub fn is_alt(&self) -> bool {
        self.playoffs.entry == LowerStartEntry::FourOfTwelve
    }
}

impl Format for Winter {
    fn name(&self) -> &'static str {
        if self.is_alt() {
            Self::ALT_NAME
        } else {
            Self::NAME
        }
    }

    fn buckets(&self) -> BucketSet {
        self.playoffs.buckets().with(13, 16, self.groups.fourths.clone())
    }
}
