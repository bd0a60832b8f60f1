//! Batch driver: run a format many times and count outcomes.
//!
//! Runs are independent, so they are split into one share per worker and
//! played on a rayon pool sized to the worker count. Each share owns its
//! random source and returns a partial [`Tally`]; partials are summed, so
//! completion order does not matter.

use crate::logic::{
    validate_roster, DoubleElim16, Fall, Gsl, ProbabilityModel, RngSource, Resolver, RoundRobinGroups16,
    SingleElim16, Swiss16, UpperRound, Winter,
};
use crate::models::{Competitor, FormatError, Seed};
use crate::report::{FormatReport, Report};
use rand::rngs::StdRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use std::time::Instant;

/// Formats the driver knows how to repeat.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatKind {
    Fall,
    Winter,
    WinterAlt,
    SingleElim,
    Gsl,
    DoubleElim,
    Swiss,
    RoundRobin,
}

impl FormatKind {
    /// Formats reported by default, in report order.
    pub const REPORTED: [FormatKind; 6] = [
        FormatKind::Fall,
        FormatKind::Winter,
        FormatKind::WinterAlt,
        FormatKind::SingleElim,
        FormatKind::DoubleElim,
        FormatKind::Gsl,
    ];

    pub const ALL: [FormatKind; 8] = [
        FormatKind::Fall,
        FormatKind::Winter,
        FormatKind::WinterAlt,
        FormatKind::SingleElim,
        FormatKind::DoubleElim,
        FormatKind::Gsl,
        FormatKind::Swiss,
        FormatKind::RoundRobin,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            FormatKind::Fall => "fall",
            FormatKind::Winter => "winter",
            FormatKind::WinterAlt => "winter-alt",
            FormatKind::SingleElim => "single-elim",
            FormatKind::Gsl => "gsl",
            FormatKind::DoubleElim => "double-elim",
            FormatKind::Swiss => "swiss",
            FormatKind::RoundRobin => "round-robin",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FormatKind::Fall => Fall::NAME,
            FormatKind::Winter => Winter::NAME,
            FormatKind::WinterAlt => Winter::ALT_NAME,
            FormatKind::SingleElim => SingleElim16::NAME,
            FormatKind::Gsl => Gsl::NAME,
            FormatKind::DoubleElim => DoubleElim16::NAME,
            FormatKind::Swiss => Swiss16::NAME,
            FormatKind::RoundRobin => RoundRobinGroups16::NAME,
        }
    }

    /// Roster size the format is built for.
    pub fn entrants(&self) -> usize {
        16
    }
}

impl FromStr for FormatKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        FormatKind::ALL
            .iter()
            .copied()
            .find(|k| k.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown format '{}'", s))
    }
}

/// A counted outcome.
///
/// Unconditional events are tried on every run. Conditional ones are tried
/// only in runs where their precondition held.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Event {
    pub label: &'static str,
    pub conditional: bool,
    pub hits: u64,
    pub trials: u64,
}

impl Event {
    /// Hits as a percentage of trials.
    pub fn rate(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.hits as f64 * 100.0 / self.trials as f64
        }
    }
}

/// Aggregated counts over a number of runs. Merging is a plain sum.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Tally {
    pub runs: u64,
    /// Championships per seed.
    pub titles: BTreeMap<Seed, u64>,
    /// Events in first-recorded order.
    pub events: Vec<Event>,
}

impl Tally {
    pub fn record_title(&mut self, champion: Competitor) {
        *self.titles.entry(champion.seed).or_insert(0) += 1;
    }

    /// Count `label` over every run.
    pub fn share(&mut self, label: &'static str, hit: bool) {
        let event = self.event_mut(label, false);
        event.trials += 1;
        event.hits += u64::from(hit);
    }

    /// Count `label` only in runs where `given` holds.
    pub fn given(&mut self, label: &'static str, given: bool, hit: bool) {
        let event = self.event_mut(label, true);
        if given {
            event.trials += 1;
            event.hits += u64::from(hit);
        }
    }

    pub fn event(&self, label: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.label == label)
    }

    /// Championship share of `seed`, in percent of runs.
    pub fn title_rate(&self, seed: Seed) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        self.titles.get(&seed).copied().unwrap_or(0) as f64 * 100.0 / self.runs as f64
    }

    pub fn merge(&mut self, other: Tally) {
        self.runs += other.runs;
        for (seed, n) in other.titles {
            *self.titles.entry(seed).or_insert(0) += n;
        }
        for e in other.events {
            let mine = self.event_mut(e.label, e.conditional);
            mine.hits += e.hits;
            mine.trials += e.trials;
        }
    }

    fn event_mut(&mut self, label: &'static str, conditional: bool) -> &mut Event {
        let idx = match self.events.iter().position(|e| e.label == label) {
            Some(idx) => idx,
            None => {
                self.events.push(Event {
                    label,
                    conditional,
                    hits: 0,
                    trials: 0,
                });
                self.events.len() - 1
            }
        };
        &mut self.events[idx]
    }
}

/// How many runs to play and how to split them.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    pub runs: u64,
    pub workers: usize,
    /// Base seed; worker `i` uses `seed + i`. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            runs: 100_000,
            workers: 1,
            seed: None,
        }
    }
}

/// Play `kind` `config.runs` times over `roster` and count outcomes.
///
/// The roster is validated once up front; no worker starts on bad input.
pub fn run_batch(
    kind: FormatKind,
    roster: &[Competitor],
    model: &dyn ProbabilityModel,
    config: &BatchConfig,
) -> Result<Tally, FormatError> {
    validate_roster(kind.name(), roster, kind.entrants())?;

    let workers = config.workers.max(1).min(config.runs.max(1) as usize) as u64;
    let play = || {
        (0..workers)
            .into_par_iter()
            .map(|w| {
                let runs = config.runs / workers + u64::from(w < config.runs % workers);
                let source = match config.seed {
                    Some(seed) => RngSource::seeded(seed.wrapping_add(w)),
                    None => RngSource::from_entropy(),
                };
                run_worker(kind, roster, model, source, runs)
            })
            .try_reduce(Tally::default, |mut total, partial| {
                total.merge(partial);
                Ok(total)
            })
    };

    match rayon::ThreadPoolBuilder::new().num_threads(workers as usize).build() {
        Ok(pool) => pool.install(play),
        Err(e) => {
            log::warn!("could not build a {}-thread pool, using the global one: {}", workers, e);
            play()
        }
    }
}

fn run_worker(
    kind: FormatKind,
    roster: &[Competitor],
    model: &dyn ProbabilityModel,
    mut source: RngSource<StdRng>,
    runs: u64,
) -> Result<Tally, FormatError> {
    let mut resolver = Resolver::new(model, &mut source);
    let mut tally = Tally::default();
    for _ in 0..runs {
        observe(kind, roster, &mut resolver, &mut tally)?;
        tally.runs += 1;
    }
    Ok(tally)
}

/// Play one run of `kind` and record what happened.
pub fn observe(
    kind: FormatKind,
    roster: &[Competitor],
    resolver: &mut Resolver<'_>,
    tally: &mut Tally,
) -> Result<(), FormatError> {
    let Some(&top) = roster.first() else {
        return Err(FormatError::WrongRosterSize {
            format: kind.name(),
            expected: kind.entrants(),
            actual: 0,
        });
    };
    match kind {
        FormatKind::Fall => {
            let run = Fall::run(roster, resolver)?;
            let champion = run.champion();
            let swiss = &run.swiss;
            tally.record_title(champion);
            tally.share("winner was 3-0 in swiss", swiss.three_zero.contains(&champion));
            tally.share("winner was 3-1 in swiss", swiss.three_one.contains(&champion));
            tally.share("winner was 3-2 in swiss", swiss.three_two.contains(&champion));
            let top_won = champion == top;
            tally.given("top seed won from 3-2 in swiss", swiss.three_two.contains(&top), top_won);
            tally.given("top seed won when not 3-0 in swiss", !swiss.three_zero.contains(&top), top_won);
            tally.given("top seed won from 3-0 in swiss", swiss.three_zero.contains(&top), top_won);
        }
        FormatKind::Winter | FormatKind::WinterAlt => {
            let run = if kind == FormatKind::Winter {
                Winter::run(roster, resolver)?
            } else {
                Winter::run_alt(roster, resolver)?
            };
            let champion = run.champion();
            let groups = &run.groups;
            tally.record_title(champion);
            tally.share("winner was top 4 in groups", groups.firsts.contains(&champion));
            tally.share("winner was 5-8 in groups", groups.seconds.contains(&champion));
            tally.share("winner was 9-12 in groups", groups.thirds.contains(&champion));
            let top_won = champion == top;
            if kind == FormatKind::Winter {
                tally.given("top seed won when not top 4 in groups", !groups.firsts.contains(&top), top_won);
                tally.given("top seed won from top 4 in groups", groups.firsts.contains(&top), top_won);
            } else {
                tally.given("top seed won from 9-12 in groups", groups.thirds.contains(&top), top_won);
                let top_eight = groups.firsts.contains(&top) || groups.seconds.contains(&top);
                tally.given("top seed won from top 8 in groups", top_eight, top_won);
            }
        }
        FormatKind::SingleElim => {
            let run = SingleElim16::run(roster, resolver)?;
            tally.record_title(run.champion);
        }
        FormatKind::DoubleElim => {
            let run = DoubleElim16::run(roster, resolver)?;
            tally.record_title(run.champion);
            let dropped = run.champion_dropped_in;
            tally.share("winner went to lower", dropped.is_some());
            tally.share("winner went to lower in RO16", dropped == Some(UpperRound::RoundOf16));
            tally.share("winner went to lower in RO8", dropped == Some(UpperRound::Quarterfinal));
            tally.share("winner went to lower in RO4", dropped == Some(UpperRound::Semifinal));
            tally.share("winner went to lower in RO2", dropped == Some(UpperRound::Final));
            tally.given(
                "top seed won from going in lower in RO16",
                run.top_seed_dropped_in_first_round,
                run.champion == top,
            );
        }
        FormatKind::Gsl => {
            let run = Gsl::run(roster, resolver)?;
            let champion = run.bracket.champion;
            tally.record_title(champion);
            tally.share("winner topped its group", run.groups.iter().any(|g| g.winner() == champion));
        }
        FormatKind::Swiss => {
            let run = Swiss16::run(roster, resolver)?;
            tally.share("top seed went 3-0", run.three_zero.contains(&top));
            let qualified = [&run.three_zero, &run.three_one, &run.three_two]
                .iter()
                .any(|tier| tier.contains(&top));
            tally.share("top seed qualified", qualified);
        }
        FormatKind::RoundRobin => {
            let run = RoundRobinGroups16::run(roster, resolver)?;
            tally.share("top seed won its group", run.firsts.contains(&top));
            let deciders: u32 = run.groups.iter().map(|g| g.deciders).sum();
            tally.share("at least one tie-break decider played", deciders > 0);
        }
    }
    Ok(())
}

/// Run every format in `kinds` and collect a report.
pub fn simulate_formats(
    kinds: &[FormatKind],
    roster: &[Competitor],
    model: &dyn ProbabilityModel,
    config: &BatchConfig,
) -> Result<Report, FormatError> {
    let mut report = Report::new(model, config.runs);
    for &kind in kinds {
        log::info!("generating {} runs for {} format", config.runs, kind.name());
        let started = Instant::now();
        let tally = run_batch(kind, roster, model, config)?;
        let elapsed = started.elapsed();
        log::info!("generation done in {}.{:03}s", elapsed.as_secs(), elapsed.subsec_millis());
        report.formats.push(FormatReport::from_tally(kind, roster, &tally, elapsed));
    }
    Ok(report)
}
