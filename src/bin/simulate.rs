//! Batch simulation from the command line.
//! Run with: cargo run --release --bin simulate
//! Configure with env: SIM_RUNS, SIM_WORKERS, SIM_SEED, SIM_MODEL, SIM_FORMATS, SIM_CSV.

use std::fs::File;
use std::time::Instant;
use tournament_sim::{default_roster, render_text, simulate_formats, write_csv, SimulationConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = SimulationConfig::from_env()?;
    log::info!(
        "{} runs per format on {} worker(s), model {}",
        config.runs,
        config.workers,
        config.model
    );

    let start = Instant::now();
    let roster = default_roster(16);
    let report = simulate_formats(&config.formats, &roster, &config.model, &config.batch())?;
    let elapsed = start.elapsed();
    log::info!("process took {}.{:03}s", elapsed.as_secs(), elapsed.subsec_millis());

    println!("{}", render_text(&report));

    if let Some(path) = &config.csv_path {
        write_csv(&report, File::create(path)?)?;
        log::info!("wrote CSV to {}", path.display());
    }
    Ok(())
}
