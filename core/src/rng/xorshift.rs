//! xorshift64* random number generator
//!
//! Fast, high-quality PRNG with 64-bit state and 64-bit output, suitable
//! for simulation purposes. Not cryptographically secure.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. Golden-run tests and the
//! replay digests in `orchestrator::digest` depend on this: a simulated
//! population is fully reproducible from its seed.

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use assessment_simulator_core::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let draw = rng.next_f64();       // tier selection draw in [0, 1)
/// let response = rng.range(1, 6);  // response value in [1, 5]
/// ```
#[derive(Debug, Clone)]
pub struct RngManager {
    state: u64,
}

impl RngManager {
    /// Create a new RNG with the given seed
    ///
    /// A zero seed is coerced to 1 (xorshift state must never be zero).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u64 value
    ///
    /// Advances the internal state and returns a random value.
    pub fn next(&mut self) -> u64 {
        // xorshift64* algorithm
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate a random value in range [min, max)
    ///
    /// Callers wanting an inclusive upper bound pass `max + 1`.
    ///
    /// # Panics
    ///
    /// Panics if min >= max
    pub fn range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min < max, "min must be less than max");

        let value = self.next();
        let range_size = (max - min) as u64;
        min + (value % range_size) as i64
    }

    /// Generate a random f64 in range [0.0, 1.0)
    ///
    /// Used for the cumulative-weight tier draw.
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next();
        // Convert to [0.0, 1.0) using the top 53 bits
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }
}
