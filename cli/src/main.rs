//! Assessment simulator entry point
//!
//! Runs the production population with fixed compile-time constants and
//! prints progress lines during generation followed by the per-tier
//! summary block. Takes no arguments and reads no input.

use std::process;
use std::time::Instant;

use assessment_simulator_core::{
    report, ScoringWeights, SimulationConfig, SimulationError, SimulationRunner, TierTable,
};

/// Number of users to simulate
const TOTAL_USERS: usize = 1_500_000;

/// Progress line cadence
const PROGRESS_INTERVAL: usize = 100_000;

/// Fixed seed: production runs are reproducible
const RNG_SEED: u64 = 12345;

fn main() {
    if let Err(err) = run() {
        eprintln!("simulation error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), SimulationError> {
    let config = SimulationConfig {
        population: TOTAL_USERS,
        rng_seed: RNG_SEED,
        tiers: TierTable::standard(),
        scoring: ScoringWeights::default(),
        progress_interval: PROGRESS_INTERVAL,
    };

    println!("Starting simulation...");
    let start = Instant::now();

    let mut runner = SimulationRunner::new(config)?;
    let results = runner.run_with_progress(|progress| {
        println!("{} users processed...", progress.users_processed);
    });

    let elapsed = start.elapsed().as_secs_f64();
    println!("\nSimulation completed in {:.2} seconds.", elapsed);

    let summaries = report::summarize(results);
    println!("\n{}", report::render(&summaries));

    Ok(())
}
