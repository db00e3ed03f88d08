//! Orchestrator - main simulation loop
//!
//! Single sequential pass over the configured population. Each step draws
//! a tier, synthesizes a response vector, scores it, and records the
//! combined score.
//!
//! See `engine.rs` for the loop and `digest.rs` for replay verification.

pub mod digest;
pub mod engine;

// Re-export main types for convenience
pub use digest::{compute_config_hash, results_digest, RunRecord};
pub use engine::{
    ProgressUpdate, SimulationConfig, SimulationError, SimulationRunner, UserResult,
};
