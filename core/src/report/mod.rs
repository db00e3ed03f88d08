//! Summary reporting
//!
//! Per-tier descriptive statistics over a completed results table, plus
//! the formatted summary block printed by the CLI.
//!
//! Statistics that are undefined are guarded, not computed: an empty tier
//! carries no mean/min/max and a single-entry tier carries no sample
//! standard deviation. The renderer prints `N/A` for guarded values and
//! never panics.

use crate::models::results::ResultsTable;
use crate::models::tier::Tier;

/// Descriptive statistics for one tier
#[derive(Debug, Clone, PartialEq)]
pub struct TierSummary {
    /// Tier the statistics describe
    pub tier: Tier,

    /// Number of recorded scores
    pub count: usize,

    /// Arithmetic mean (None when the tier is empty)
    pub mean: Option<f64>,

    /// Smallest score (None when the tier is empty)
    pub min: Option<f64>,

    /// Largest score (None when the tier is empty)
    pub max: Option<f64>,

    /// Sample standard deviation (None below 2 entries)
    pub std_dev: Option<f64>,
}

/// Compute summaries for every tier, in tier order
pub fn summarize(results: &ResultsTable) -> Vec<TierSummary> {
    results
        .iter()
        .map(|(tier, scores)| summarize_tier(tier, scores))
        .collect()
}

fn summarize_tier(tier: Tier, scores: &[f64]) -> TierSummary {
    let count = scores.len();
    if count == 0 {
        return TierSummary {
            tier,
            count,
            mean: None,
            min: None,
            max: None,
            std_dev: None,
        };
    }

    let sum: f64 = scores.iter().sum();
    let mean = sum / count as f64;
    let min = scores.iter().fold(f64::INFINITY, |acc, &s| acc.min(s));
    let max = scores.iter().fold(f64::NEG_INFINITY, |acc, &s| acc.max(s));

    // Sample standard deviation needs at least two values (n - 1 divisor)
    let std_dev = if count < 2 {
        None
    } else {
        let variance = scores
            .iter()
            .map(|&s| (s - mean).powi(2))
            .sum::<f64>()
            / (count - 1) as f64;
        Some(variance.sqrt())
    };

    TierSummary {
        tier,
        count,
        mean: Some(mean),
        min: Some(min),
        max: Some(max),
        std_dev,
    }
}

/// Render the formatted summary block
///
/// Mean and standard deviation are rounded to 2 decimals at formatting
/// time; guarded statistics render as `N/A`.
pub fn render(summaries: &[TierSummary]) -> String {
    let mut out = String::from("--- Assessment Results Summary ---\n");

    for summary in summaries {
        out.push_str(&format!(
            "\n{} Users: {}\n",
            summary.tier.label(),
            summary.count
        ));

        if let (Some(mean), Some(min), Some(max)) = (summary.mean, summary.min, summary.max) {
            out.push_str(&format!("  Avg Combined Score: {:.2}\n", mean));
            out.push_str(&format!("  Min: {} | Max: {}\n", min, max));
            match summary.std_dev {
                Some(std_dev) => out.push_str(&format!("  Std Dev: {:.2}\n", std_dev)),
                None => out.push_str("  Std Dev: N/A\n"),
            }
        }
    }

    out
}
