//! Results table
//!
//! The in-memory collection of combined scores, partitioned by tier.
//! Owned exclusively by the runner during generation, then handed out
//! read-only for reporting.
//!
//! # Critical Invariants
//!
//! 1. **Append-only**: scores are never mutated or removed during a run
//! 2. **Conservation**: every simulated user contributes exactly one score
//!    to exactly one tier, so total entries equal the population
//! 3. **Stable order**: tiers iterate in `Tier` order, scores in append order

use crate::models::tier::Tier;
use std::collections::BTreeMap;

/// Combined scores recorded per tier
///
/// All tiers are present from construction, so empty tiers still appear
/// in reports and digests.
///
/// # Example
///
/// ```rust
/// use assessment_simulator_core::{ResultsTable, Tier};
///
/// let mut results = ResultsTable::new();
/// results.record(Tier::Graduate, 312.55);
///
/// assert_eq!(results.total_entries(), 1);
/// assert_eq!(results.scores_for(Tier::Graduate), &[312.55]);
/// assert_eq!(results.scores_for(Tier::Undergraduate), &[] as &[f64]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsTable {
    /// Scores per tier, keyed in tier order
    scores: BTreeMap<Tier, Vec<f64>>,
}

impl ResultsTable {
    /// Create an empty table with every tier present
    pub fn new() -> Self {
        let scores = Tier::ALL.iter().map(|&tier| (tier, Vec::new())).collect();
        Self { scores }
    }

    /// Append a combined score to a tier
    pub fn record(&mut self, tier: Tier, score: f64) {
        self.scores.entry(tier).or_default().push(score);
    }

    /// Scores recorded for a tier, in append order
    pub fn scores_for(&self, tier: Tier) -> &[f64] {
        self.scores.get(&tier).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of scores recorded for a tier
    pub fn count_for(&self, tier: Tier) -> usize {
        self.scores_for(tier).len()
    }

    /// Total scores recorded across all tiers
    ///
    /// After a completed run this equals the configured population.
    pub fn total_entries(&self) -> usize {
        self.scores.values().map(Vec::len).sum()
    }

    /// True if no scores have been recorded
    pub fn is_empty(&self) -> bool {
        self.total_entries() == 0
    }

    /// Iterate tiers in order with their score slices
    pub fn iter(&self) -> impl Iterator<Item = (Tier, &[f64])> {
        self.scores.iter().map(|(&tier, scores)| (tier, scores.as_slice()))
    }
}

impl Default for ResultsTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_has_all_tiers_empty() {
        let results = ResultsTable::new();

        assert!(results.is_empty());
        assert_eq!(results.total_entries(), 0);
        assert_eq!(results.iter().count(), Tier::ALL.len());
        for (_, scores) in results.iter() {
            assert!(scores.is_empty());
        }
    }

    #[test]
    fn test_record_appends_in_order() {
        let mut results = ResultsTable::new();

        results.record(Tier::Undergraduate, 235.0);
        results.record(Tier::Undergraduate, 272.6);
        results.record(Tier::PrimarySecondary, 128.47);

        assert_eq!(results.scores_for(Tier::Undergraduate), &[235.0, 272.6]);
        assert_eq!(results.scores_for(Tier::PrimarySecondary), &[128.47]);
        assert_eq!(results.count_for(Tier::Graduate), 0);
        assert_eq!(results.total_entries(), 3);
    }

    #[test]
    fn test_iteration_follows_tier_order() {
        let mut results = ResultsTable::new();
        results.record(Tier::Graduate, 300.0);
        results.record(Tier::PrimarySecondary, 100.0);

        let tiers: Vec<Tier> = results.iter().map(|(tier, _)| tier).collect();
        assert_eq!(
            tiers,
            vec![Tier::PrimarySecondary, Tier::Undergraduate, Tier::Graduate]
        );
    }
}
