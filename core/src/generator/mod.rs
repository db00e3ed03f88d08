//! Response generation
//!
//! Deterministic synthesis of simulated users: one weighted tier draw
//! followed by a fixed-size vector of uniform integer responses.
//!
//! # Key Principles
//!
//! 1. **Determinism**: same seed + same table → same tiers and responses
//! 2. **Single comparison chain**: the tier draw consumes exactly one
//!    uniform value and is never resampled
//! 3. **Lookup table**: per-tier parameters live in [`TierTable`], not in
//!    branching code
//!
//! # Example
//!
//! ```
//! use assessment_simulator_core::{ResponseGenerator, RngManager, TierTable};
//!
//! let generator = ResponseGenerator::new(TierTable::standard());
//! let mut rng = RngManager::new(42);
//!
//! let tier = generator.select_tier(&mut rng);
//! let responses = generator.generate_responses(tier, &mut rng);
//! assert!(!responses.is_empty());
//! ```

use crate::models::tier::Tier;
use crate::rng::RngManager;
use serde::{Deserialize, Serialize};

/// Generation parameters for a single tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierProfile {
    /// Selection probability (weights across the table sum to 1.0)
    pub weight: f64,

    /// Number of responses per simulated user
    pub response_count: usize,

    /// Minimum response value (inclusive)
    pub response_min: i64,

    /// Maximum response value (inclusive)
    pub response_max: i64,
}

/// Ordered tier → profile lookup table
///
/// The entry order is the cumulative-weight selection order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierTable {
    entries: Vec<(Tier, TierProfile)>,
}

impl TierTable {
    /// Build a table from ordered entries
    pub fn new(entries: Vec<(Tier, TierProfile)>) -> Self {
        Self { entries }
    }

    /// Production parameters: 80% primary/secondary, 15% undergraduate,
    /// 5% graduate, with 30/40/50 responses in [1,5]/[2,6]/[3,7]
    pub fn standard() -> Self {
        Self::new(vec![
            (
                Tier::PrimarySecondary,
                TierProfile {
                    weight: 0.80,
                    response_count: 30,
                    response_min: 1,
                    response_max: 5,
                },
            ),
            (
                Tier::Undergraduate,
                TierProfile {
                    weight: 0.15,
                    response_count: 40,
                    response_min: 2,
                    response_max: 6,
                },
            ),
            (
                Tier::Graduate,
                TierProfile {
                    weight: 0.05,
                    response_count: 50,
                    response_min: 3,
                    response_max: 7,
                },
            ),
        ])
    }

    /// Entries in selection order
    pub fn entries(&self) -> &[(Tier, TierProfile)] {
        &self.entries
    }

    /// Profile for a tier, if configured
    pub fn profile(&self, tier: Tier) -> Option<&TierProfile> {
        self.entries
            .iter()
            .find(|(entry_tier, _)| *entry_tier == tier)
            .map(|(_, profile)| profile)
    }

    /// Sum of all selection weights
    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|(_, profile)| profile.weight).sum()
    }

    /// True if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Generator for simulated users
///
/// Stateless apart from its lookup table: all randomness comes from the
/// `RngManager` passed into each call.
#[derive(Debug, Clone)]
pub struct ResponseGenerator {
    table: TierTable,
}

impl ResponseGenerator {
    /// Create a generator over a tier table
    pub fn new(table: TierTable) -> Self {
        Self { table }
    }

    /// The underlying tier table
    pub fn table(&self) -> &TierTable {
        &self.table
    }

    /// Select a tier by cumulative weight
    ///
    /// Consumes exactly one uniform draw. The first tier whose cumulative
    /// weight exceeds the draw wins; the final tier absorbs any
    /// floating-point slack past the last boundary.
    ///
    /// # Panics
    ///
    /// Panics if the table is empty (the runner validates this at
    /// configuration time).
    pub fn select_tier(&self, rng: &mut RngManager) -> Tier {
        let draw = rng.next_f64();

        let mut cumulative = 0.0;
        for (tier, profile) in &self.table.entries {
            cumulative += profile.weight;
            if draw < cumulative {
                return *tier;
            }
        }

        self.table
            .entries
            .last()
            .map(|(tier, _)| *tier)
            .expect("cannot select a tier from an empty tier table")
    }

    /// Generate one response vector for `tier`
    ///
    /// Draws `response_count` independent uniform values in the tier's
    /// inclusive range.
    ///
    /// # Panics
    ///
    /// Panics if `tier` has no profile in the table.
    pub fn generate_responses(&self, tier: Tier, rng: &mut RngManager) -> Vec<i64> {
        let profile = self
            .table
            .profile(tier)
            .expect("tier missing from tier table");

        let mut responses = Vec::with_capacity(profile.response_count);
        for _ in 0..profile.response_count {
            // +1 for inclusive range
            responses.push(rng.range(profile.response_min, profile.response_max + 1));
        }
        responses
    }
}
