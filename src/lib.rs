//! Tournament format simulator: library with models, the format engine, and the batch driver.

pub mod batch;
pub mod config;
pub mod logic;
pub mod models;
pub mod report;

pub use batch::{observe, run_batch, simulate_formats, BatchConfig, Event, FormatKind, Tally};
pub use config::{ConfigError, ServerConfig, SimulationConfig};
pub use logic::{
    apply_pairings, default_roster, fall_playoff_seeding, grand_final_with_reset, gsl_bracket_seeding,
    two_match_final, validate_roster, winter_playoff_seeding, DoubleElim16, Fall, Format, GroupStanding, Gsl,
    GslGroup, LowerStartBracket, LowerStartEntry, LowerStartSeeding, Pairing, ProbabilityModel, RandomSource,
    Resolver, RngSource, RoundOutcome, RoundRobinGroups16, SingleElim16, SingleElim8, Swiss16, UpperRound,
    WinModel, Winter,
};
pub use models::{Bucket, BucketSet, Competitor, FormatError, MatchResult, Placement, Seed};
pub use report::{render_text, write_csv, EventRate, FormatReport, Report, ReportId, SeedRate};
