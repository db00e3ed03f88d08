//! Assessment Simulator Core - Rust Engine
//!
//! Synthetic assessment-score generator with deterministic execution.
//!
//! Simulates a population of users split across three demographic tiers,
//! scores each user's randomized response vector through three linear
//! transforms, and aggregates combined scores per tier for reporting.
//!
//! # Architecture
//!
//! - **models**: Domain types (Tier, ResultsTable)
//! - **generator**: Tier selection and response-vector synthesis
//! - **scoring**: Linear scoring transforms and score combination
//! - **orchestrator**: Main simulation loop and replay digests
//! - **report**: Per-tier descriptive statistics
//! - **rng**: Deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. Every simulated user contributes exactly one combined score to exactly one tier
//! 2. All randomness is deterministic (seeded RNG)
//! 3. Total recorded scores equal the configured population

// Module declarations
pub mod generator;
pub mod models;
pub mod orchestrator;
pub mod report;
pub mod rng;
pub mod scoring;

// Re-exports for convenience
pub use generator::{ResponseGenerator, TierProfile, TierTable};
pub use models::{results::ResultsTable, tier::Tier};
pub use orchestrator::{
    compute_config_hash, results_digest, ProgressUpdate, RunRecord, SimulationConfig,
    SimulationError, SimulationRunner, UserResult,
};
pub use report::{render, summarize, TierSummary};
pub use rng::RngManager;
pub use scoring::ScoringWeights;
