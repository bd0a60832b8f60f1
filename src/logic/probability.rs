//! Win-probability models: map a seed gap to the stronger seed's chance of winning.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Chance, in percent (0-100), that the stronger seed wins a match.
///
/// The engine trusts the model: no monotonicity or range check is applied.
pub trait ProbabilityModel: fmt::Display + Sync {
    fn win_percentage(&self, gap: u32) -> f64;
}

/// The reference models.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum WinModel {
    /// 50% regardless of seeds.
    CoinFlip,
    /// `min(100, base + slope * gap)`.
    Linear { base: f64, slope: f64 },
    /// The stronger seed always wins.
    Favorite,
}

impl WinModel {
    pub const fn linear(base: f64, slope: f64) -> Self {
        WinModel::Linear { base, slope }
    }
}

impl Default for WinModel {
    fn default() -> Self {
        WinModel::linear(70.0, 1.7)
    }
}

impl ProbabilityModel for WinModel {
    fn win_percentage(&self, gap: u32) -> f64 {
        match *self {
            WinModel::CoinFlip => 50.0,
            WinModel::Linear { base, slope } => (base + slope * gap as f64).min(100.0),
            WinModel::Favorite => 100.0,
        }
    }
}

impl fmt::Display for WinModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinModel::CoinFlip => write!(f, "random (always 50%)"),
            WinModel::Linear { base, slope } => write!(
                f,
                "{}+{}*diff (min={:.2}, max={:.2})",
                base,
                slope,
                self.win_percentage(1),
                self.win_percentage(15)
            ),
            WinModel::Favorite => write!(f, "dumb (higher seed always wins)"),
        }
    }
}

/// Parses `coin-flip`, `favorite` or `linear:<base>:<slope>`.
impl FromStr for WinModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "coin-flip" | "random" => return Ok(WinModel::CoinFlip),
            "favorite" | "dumb" => return Ok(WinModel::Favorite),
            _ => {}
        }
        let mut parts = s.split(':');
        if parts.next() != Some("linear") {
            return Err(format!("unknown model '{}'", s));
        }
        let mut number = |what: &str| -> Result<f64, String> {
            parts
                .next()
                .ok_or_else(|| format!("linear model is missing its {}", what))?
                .parse::<f64>()
                .map_err(|e| format!("linear model {}: {}", what, e))
        };
        let base = number("base")?;
        let slope = number("slope")?;
        if parts.next().is_some() {
            return Err(format!("unexpected trailing fields in '{}'", s));
        }
        Ok(WinModel::linear(base, slope))
    }
}
