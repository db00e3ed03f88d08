//! Scoring transforms
//!
//! Three linear transforms run on every response vector; the combined
//! score is their arithmetic mean rounded to 2 decimals. All three are
//! scalar multiples of the response sum, so the combined score has the
//! closed form `round2(sum * (cognitive + emotional + adaptive) / 3)`.
//!
//! Rounding is half-to-even (`f64::round_ties_even`); golden expectations
//! must be produced under the same convention.

use serde::{Deserialize, Serialize};

/// Scalar multipliers for the three scoring transforms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Cognitive-track multiplier
    pub cognitive: f64,

    /// Emotional-track multiplier
    pub emotional: f64,

    /// Adaptive-track multiplier
    pub adaptive: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            cognitive: 1.5,
            emotional: 2.0,
            adaptive: 1.2,
        }
    }
}

impl ScoringWeights {
    /// The three raw scores for a response vector, in
    /// (cognitive, emotional, adaptive) order
    pub fn raw_scores(&self, responses: &[i64]) -> (f64, f64, f64) {
        let sum = response_sum(responses) as f64;
        (sum * self.cognitive, sum * self.emotional, sum * self.adaptive)
    }

    /// Combined score: arithmetic mean of the three raw scores, rounded
    /// to 2 decimals
    pub fn combined(&self, responses: &[i64]) -> f64 {
        let (cognitive, emotional, adaptive) = self.raw_scores(responses);
        round2((cognitive + emotional + adaptive) / 3.0)
    }
}

/// Sum of raw response values
pub fn response_sum(responses: &[i64]) -> i64 {
    responses.iter().sum()
}

/// Round to 2 decimal places, ties to even
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
