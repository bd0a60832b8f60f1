//! Configuration from environment variables, with defaults for anything unset.

use crate::batch::{BatchConfig, FormatKind};
use crate::logic::WinModel;
use std::path::PathBuf;

/// Malformed configuration value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { key, value, reason } => {
                write!(f, "invalid {}='{}': {}", key, value, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Bind address of the web binary. Read from `HOST` and `PORT`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl ServerConfig {
    /// Unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or_else(default_port);
        Self { host, port }
    }
}

/// Batch settings shared by both binaries.
///
/// | variable      | default                 |
/// |---------------|-------------------------|
/// | `SIM_RUNS`    | 100000                  |
/// | `SIM_WORKERS` | available parallelism   |
/// | `SIM_SEED`    | unset (entropy)         |
/// | `SIM_MODEL`   | `linear:70:1.7`         |
/// | `SIM_FORMATS` | all reported formats    |
/// | `SIM_CSV`     | unset (no CSV export)   |
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub runs: u64,
    pub workers: usize,
    pub seed: Option<u64>,
    pub model: WinModel,
    pub formats: Vec<FormatKind>,
    pub csv_path: Option<PathBuf>,
}

fn default_runs() -> u64 {
    100_000
}

fn default_workers() -> usize {
    std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            runs: default_runs(),
            workers: default_workers(),
            seed: None,
            model: WinModel::default(),
            formats: FormatKind::REPORTED.to_vec(),
            csv_path: None,
        }
    }
}

fn parse<T>(key: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let parsed = value.trim().parse::<T>();
    parsed.map_err(|e| ConfigError::InvalidValue {
        key,
        reason: e.to_string(),
        value,
    })
}

impl SimulationConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(v) = lookup("SIM_RUNS") {
            config.runs = parse("SIM_RUNS", v)?;
        }
        if let Some(v) = lookup("SIM_WORKERS") {
            let workers: usize = parse("SIM_WORKERS", v)?;
            config.workers = workers.max(1);
        }
        if let Some(v) = lookup("SIM_SEED") {
            config.seed = Some(parse("SIM_SEED", v)?);
        }
        if let Some(v) = lookup("SIM_MODEL") {
            config.model = parse("SIM_MODEL", v)?;
        }
        if let Some(v) = lookup("SIM_FORMATS") {
            config.formats = v
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(|s| parse("SIM_FORMATS", s.to_string()))
                .collect::<Result<_, _>>()?;
        }
        if let Some(v) = lookup("SIM_CSV") {
            if !v.trim().is_empty() {
                config.csv_path = Some(PathBuf::from(v));
            }
        }
        Ok(config)
    }

    pub fn batch(&self) -> BatchConfig {
        BatchConfig {
            runs: self.runs,
            workers: self.workers,
            seed: self.seed,
        }
    }
}
