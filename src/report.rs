//! Report of a batch simulation: serializable summary, console text, CSV export.

use crate::batch::{FormatKind, Tally};
use crate::logic::ProbabilityModel;
use crate::models::{Competitor, Seed};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::io;
use std::time::Duration;
use uuid::Uuid;

/// Unique identifier for a report.
pub type ReportId = Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: ReportId,
    pub generated_at: DateTime<Utc>,
    /// Description of the probability model used.
    pub model: String,
    pub runs: u64,
    pub formats: Vec<FormatReport>,
}

impl Report {
    pub fn new(model: &dyn ProbabilityModel, runs: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            model: model.to_string(),
            runs,
            formats: Vec::new(),
        }
    }

    pub fn format(&self, key: &str) -> Option<&FormatReport> {
        self.formats.iter().find(|f| f.key == key)
    }
}

/// Championship share of one seed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeedRate {
    pub seed: Seed,
    pub titles: u64,
    /// Percent of runs.
    pub rate: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventRate {
    pub label: String,
    pub conditional: bool,
    /// Percent of trials.
    pub rate: f64,
    /// For conditional events: how often the precondition held, in percent of runs.
    pub happened: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormatReport {
    pub key: String,
    pub name: String,
    pub runs: u64,
    pub elapsed_ms: u64,
    /// One entry per roster seed; empty for formats that crown no champion.
    pub champion_rate: Vec<SeedRate>,
    pub events: Vec<EventRate>,
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn percent(n: u64, of: u64) -> f64 {
    if of == 0 {
        0.0
    } else {
        n as f64 * 100.0 / of as f64
    }
}

impl FormatReport {
    pub fn from_tally(kind: FormatKind, roster: &[Competitor], tally: &Tally, elapsed: Duration) -> Self {
        let champion_rate = if tally.titles.is_empty() {
            Vec::new()
        } else {
            roster
                .iter()
                .map(|c| SeedRate {
                    seed: c.seed,
                    titles: tally.titles.get(&c.seed).copied().unwrap_or(0),
                    rate: round2(tally.title_rate(c.seed)),
                })
                .collect()
        };
        let events = tally
            .events
            .iter()
            .map(|e| EventRate {
                label: e.label.to_string(),
                conditional: e.conditional,
                rate: round2(e.rate()),
                happened: e.conditional.then(|| round2(percent(e.trials, tally.runs))),
            })
            .collect();
        Self {
            key: kind.key().to_string(),
            name: kind.name().to_string(),
            runs: tally.runs,
            elapsed_ms: elapsed.as_millis() as u64,
            champion_rate,
            events,
        }
    }
}

/// Console rendering, one block per format.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Stats for {} runs", report.runs);
    let _ = writeln!(out, "Match resolution is done using {}", report.model);
    for f in &report.formats {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} FORMAT", f.name.to_uppercase());
        let _ = writeln!(out, "Percentage over number of runs");
        if !f.champion_rate.is_empty() {
            let rates: Vec<String> = f.champion_rate.iter().map(|r| format!("{:.2}%", r.rate)).collect();
            let _ = writeln!(out, " winrate per seed : {}", rates.join(" - "));
        }
        for e in f.events.iter().filter(|e| !e.conditional) {
            let _ = writeln!(out, " {} : {:.2}%", e.label, e.rate);
        }
        let conditional: Vec<&EventRate> = f.events.iter().filter(|e| e.conditional).collect();
        if !conditional.is_empty() {
            let _ = writeln!(out, "Percentage over number of times 'from' situation happened");
            for e in conditional {
                let _ = writeln!(
                    out,
                    " {} : {:.2}% (happened {:.2}% of the time)",
                    e.label,
                    e.rate,
                    e.happened.unwrap_or(0.0)
                );
            }
        }
    }
    out
}

#[derive(Serialize)]
struct CsvRow<'a> {
    format: &'a str,
    seed: Seed,
    titles: u64,
    rate: f64,
}

/// One row per (format, seed) with the championship share.
pub fn write_csv<W: io::Write>(report: &Report, out: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(out);
    for f in &report.formats {
        for r in &f.champion_rate {
            wtr.serialize(CsvRow {
                format: &f.key,
                seed: r.seed,
                titles: r.titles,
                rate: r.rate,
            })?;
        }
    }
    wtr.flush()?;
    Ok(())
}
