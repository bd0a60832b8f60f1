//! Format resolution engine: probability models, match resolution, bracket
//! primitives, and multi-stage formats.

mod composite;
mod double_elim;
mod format;
mod gsl;
mod probability;
mod resolver;
mod round_robin;
mod roster;
mod sequencer;
mod single_elim;
mod swiss;

pub use composite::{fall_playoff_seeding, winter_playoff_seeding, Fall, Winter};
pub use double_elim::{
    grand_final_with_reset, DoubleElim16, LowerStartBracket, LowerStartEntry, LowerStartSeeding, UpperRound,
};
pub use format::Format;
pub use gsl::{bracket_seeding as gsl_bracket_seeding, Gsl, GslGroup};
pub use probability::{ProbabilityModel, WinModel};
pub use resolver::{RandomSource, Resolver, RngSource};
pub use round_robin::{GroupStanding, RoundRobinGroups16};
pub use roster::{default_roster, ensure_distinct, validate_roster};
pub use sequencer::{apply_pairings, Pairing, RoundOutcome};
pub use single_elim::{two_match_final, SingleElim16, SingleElim8};
pub use swiss::Swiss16;

