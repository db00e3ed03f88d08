//! Simulation engine
//!
//! Main loop integrating all components:
//! - Tier assignment (weighted draw)
//! - Response-vector synthesis
//! - Scoring (three transforms + combination)
//! - Result recording (per-tier score lists)
//!
//! # Architecture
//!
//! ```text
//! For each simulated user:
//! 1. Draw a tier (one uniform value, cumulative-weight chain)
//! 2. Generate the tier's response vector
//! 3. Compute the combined score
//! 4. Append the score to the tier's results
//! 5. Emit a progress update at the configured interval
//! ```
//!
//! There are no recoverable error paths inside the loop; errors exist
//! only at configuration time.
//!
//! # Example
//!
//! ```
//! use assessment_simulator_core::{
//!     ScoringWeights, SimulationConfig, SimulationRunner, TierTable,
//! };
//!
//! let config = SimulationConfig {
//!     population: 100,
//!     rng_seed: 42,
//!     tiers: TierTable::standard(),
//!     scoring: ScoringWeights::default(),
//!     progress_interval: 50,
//! };
//!
//! let mut runner = SimulationRunner::new(config).unwrap();
//! let results = runner.run();
//! assert_eq!(results.total_entries(), 100);
//! ```

use crate::generator::{ResponseGenerator, TierTable};
use crate::models::results::ResultsTable;
use crate::models::tier::Tier;
use crate::rng::RngManager;
use crate::scoring::ScoringWeights;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Configuration Types
// ============================================================================

/// Complete simulation configuration
///
/// Contains all parameters needed to run a simulation. Serializable so the
/// whole configuration can be hashed for replay verification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of users to simulate (0 is valid and produces an empty table)
    pub population: usize,

    /// RNG seed for deterministic generation
    pub rng_seed: u64,

    /// Ordered tier lookup table; weights must sum to 1.0
    pub tiers: TierTable,

    /// Multipliers for the three scoring transforms
    pub scoring: ScoringWeights,

    /// Emit a progress update every this many users
    pub progress_interval: usize,
}

/// Simulation error types
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SimulationError {
    /// Configuration validation error
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Serialization failed while hashing a config
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Outcome of simulating a single user
#[derive(Debug, Clone, PartialEq)]
pub struct UserResult {
    /// Zero-based index of the user within the run
    pub index: usize,

    /// Tier the user was assigned to
    pub tier: Tier,

    /// Combined score appended to that tier
    pub combined_score: f64,
}

/// Progress notification emitted during a run
///
/// Purely observational; consuming or ignoring updates has no effect on
/// the generated results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressUpdate {
    /// Users fully processed when the update fired
    pub users_processed: usize,
}

// ============================================================================
// Simulation Runner
// ============================================================================

/// Main runner owning all simulation state
///
/// # Determinism
///
/// All randomness flows through the seeded `RngManager`. Each user consumes
/// exactly `1 + response_count` draws (tier first), so same seed + same
/// config = identical results.
#[derive(Debug)]
pub struct SimulationRunner {
    /// Tier selection and response synthesis
    generator: ResponseGenerator,

    /// Multipliers for the scoring transforms
    scoring: ScoringWeights,

    /// Deterministic RNG (sole randomness source)
    rng: RngManager,

    /// Scores recorded so far
    results: ResultsTable,

    /// Configured number of users
    population: usize,

    /// Progress cadence
    progress_interval: usize,

    /// Users fully processed
    users_processed: usize,
}

impl SimulationRunner {
    /// Create a new runner from configuration
    ///
    /// # Returns
    ///
    /// * `Ok(SimulationRunner)` - ready to run
    /// * `Err(SimulationError)` - configuration validation failed
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        Self::validate_config(&config)?;

        let SimulationConfig {
            population,
            rng_seed,
            tiers,
            scoring,
            progress_interval,
        } = config;

        Ok(Self {
            generator: ResponseGenerator::new(tiers),
            scoring,
            rng: RngManager::new(rng_seed),
            results: ResultsTable::new(),
            population,
            progress_interval,
            users_processed: 0,
        })
    }

    /// Validate configuration
    fn validate_config(config: &SimulationConfig) -> Result<(), SimulationError> {
        if config.tiers.is_empty() {
            return Err(SimulationError::InvalidConfig(
                "tier table must not be empty".to_string(),
            ));
        }

        for (tier, profile) in config.tiers.entries() {
            if !profile.weight.is_finite() || profile.weight <= 0.0 {
                return Err(SimulationError::InvalidConfig(format!(
                    "tier {} weight must be positive and finite, got {}",
                    tier, profile.weight
                )));
            }
            if profile.response_count == 0 {
                return Err(SimulationError::InvalidConfig(format!(
                    "tier {} response_count must be > 0",
                    tier
                )));
            }
            if profile.response_min > profile.response_max {
                return Err(SimulationError::InvalidConfig(format!(
                    "tier {} response range is inverted: [{}, {}]",
                    tier, profile.response_min, profile.response_max
                )));
            }
        }

        let total_weight = config.tiers.total_weight();
        if (total_weight - 1.0).abs() > 1e-9 {
            return Err(SimulationError::InvalidConfig(format!(
                "tier weights must sum to 1.0, got {}",
                total_weight
            )));
        }

        if config.progress_interval == 0 {
            return Err(SimulationError::InvalidConfig(
                "progress_interval must be > 0".to_string(),
            ));
        }

        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Configured population size
    pub fn population(&self) -> usize {
        self.population
    }

    /// Users fully processed so far
    pub fn users_processed(&self) -> usize {
        self.users_processed
    }

    /// True once every configured user has been simulated
    pub fn is_complete(&self) -> bool {
        self.users_processed >= self.population
    }

    /// Scores recorded so far
    pub fn results(&self) -> &ResultsTable {
        &self.results
    }

    // ========================================================================
    // Simulation Loop
    // ========================================================================

    /// Simulate the next user
    ///
    /// Returns `None` once the configured population has been processed.
    pub fn step(&mut self) -> Option<UserResult> {
        if self.is_complete() {
            return None;
        }

        let index = self.users_processed;
        let tier = self.generator.select_tier(&mut self.rng);
        let responses = self.generator.generate_responses(tier, &mut self.rng);
        let combined_score = self.scoring.combined(&responses);

        self.results.record(tier, combined_score);
        self.users_processed += 1;

        Some(UserResult {
            index,
            tier,
            combined_score,
        })
    }

    /// Run to completion
    pub fn run(&mut self) -> &ResultsTable {
        self.run_with_progress(|_| {})
    }

    /// Run to completion, emitting progress updates
    ///
    /// The callback fires before each user whose index is a multiple of
    /// `progress_interval` (index 0 included), reporting how many users
    /// have been fully processed at that point.
    pub fn run_with_progress<F>(&mut self, mut on_progress: F) -> &ResultsTable
    where
        F: FnMut(ProgressUpdate),
    {
        while !self.is_complete() {
            if self.users_processed % self.progress_interval == 0 {
                on_progress(ProgressUpdate {
                    users_processed: self.users_processed,
                });
            }
            let _ = self.step();
        }
        &self.results
    }
}
