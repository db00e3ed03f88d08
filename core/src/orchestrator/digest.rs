//! Replay verification digests
//!
//! Deterministic hashing of configuration and results. Two runs with the
//! same seed and config must produce byte-identical digests; a mismatch
//! means a replay diverged.
//!
//! # Critical Invariants
//!
//! - **Canonical config hash**: JSON with recursively sorted keys, so the
//!   hash is independent of serialization key order
//! - **Exact results digest**: covers tiers in table order, entry counts,
//!   and each score's IEEE-754 bit pattern in append order

use crate::models::results::ResultsTable;
use crate::orchestrator::engine::{SimulationConfig, SimulationError};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Compute deterministic SHA256 hash of a config
///
/// Uses canonical JSON serialization with sorted keys to ensure
/// deterministic hashing regardless of map iteration order.
pub fn compute_config_hash<T: Serialize>(config: &T) -> Result<String, SimulationError> {
    use serde_json::Value;
    use std::collections::BTreeMap;

    let value = serde_json::to_value(config).map_err(|e| {
        SimulationError::Serialization(format!("Config serialization failed: {}", e))
    })?;

    // Recursively sort all object keys for canonical representation
    fn canonicalize(value: Value) -> Value {
        match value {
            Value::Object(map) => {
                let sorted: BTreeMap<String, Value> =
                    map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
                Value::Object(sorted.into_iter().collect())
            }
            Value::Array(arr) => Value::Array(arr.into_iter().map(canonicalize).collect()),
            other => other,
        }
    }

    let canonical_value = canonicalize(value);

    let json = serde_json::to_string(&canonical_value).map_err(|e| {
        SimulationError::Serialization(format!("Config serialization failed: {}", e))
    })?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    let result = hasher.finalize();

    Ok(format!("{:x}", result))
}

/// Digest of a results table
///
/// Covers tiers in table order: label bytes, entry count, then each
/// score's little-endian bit pattern in append order. Equal digests mean
/// bit-identical results.
pub fn results_digest(results: &ResultsTable) -> String {
    let mut hasher = Sha256::new();
    for (tier, scores) in results.iter() {
        hasher.update(tier.label().as_bytes());
        hasher.update((scores.len() as u64).to_le_bytes());
        for &score in scores {
            hasher.update(score.to_le_bytes());
        }
    }
    format!("{:x}", hasher.finalize())
}

/// Replay verification record for a completed run
///
/// Small enough to keep alongside reported output; two runs that agree on
/// both hashes replayed identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Configured population size
    pub population: usize,

    /// Seed the run was generated from
    pub rng_seed: u64,

    /// Canonical hash of the full configuration
    pub config_hash: String,

    /// Digest of the completed results table
    pub results_digest: String,
}

impl RunRecord {
    /// Build a record from a completed run
    pub fn new(
        config: &SimulationConfig,
        results: &ResultsTable,
    ) -> Result<Self, SimulationError> {
        Ok(Self {
            population: config.population,
            rng_seed: config.rng_seed,
            config_hash: compute_config_hash(config)?,
            results_digest: results_digest(results),
        })
    }
}
